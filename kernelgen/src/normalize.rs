//! Collapses multi-line kernel headers onto one line.

use std::{borrow::Cow, sync::LazyLock};

use regex::{Captures, Regex};

static KERNEL_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:__)?kernel\s+void\s+[A-Za-z_][A-Za-z0-9_]*\s*\([^)]*\)")
        .expect("kernel header regex is valid")
});

/// Rewrites every kernel declaration header so that it occupies one line.
///
/// The physical lines of a header are trimmed and joined with a single
/// space. The line breaks taken out are re-emitted after the closing
/// parenthesis, so lines following the header keep their numbers.
pub fn normalize_signatures(source: &str) -> Cow<'_, str> {
    KERNEL_HEADER.replace_all(source, |captures: &Captures| {
        let header = &captures[0];
        let line_breaks = header.matches('\n').count();
        if line_breaks == 0 {
            return header.to_owned();
        }

        let mut collapsed = header
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
            .replace("( ", "(")
            .replace(" )", ")");
        collapsed.extend(std::iter::repeat_n('\n', line_breaks));
        collapsed
    })
}
