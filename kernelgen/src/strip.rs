//! Comment removal that leaves string literals alone.

use std::{borrow::Cow, sync::LazyLock};

use regex::{Captures, Regex};

// One alternation so a `//` or `/*` inside a literal is consumed by the
// literal branch first. Character literals come first so `'"'` does not open
// a string.
static COMMENT_OR_STRING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)('(?:[^'\\]|\\.)'|"(?:[^"\\]|\\.)*")|/\*.*?\*/|//[^\n]*(?:\n|$)"#,
    )
    .expect("comment regex is valid")
});

fn replacement<'t>(captures: &Captures<'t>) -> &'t str {
    match captures.get(1) {
        Some(literal) => literal.as_str(),
        None if captures[0].starts_with("/*") => "",
        None => "\n",
    }
}

/// Removes block and line comments from `source`.
///
/// Block comments become the empty string, line comments (with their
/// terminator) become a single `\n`. Double-quoted string literals are kept
/// byte-for-byte, even when they contain comment markers, and so are
/// character literals. Input with an unterminated literal or block comment
/// is not rejected, but what gets stripped from it is unspecified.
pub fn strip_comments(source: &str) -> Cow<'_, str> {
    COMMENT_OR_STRING
        .replace_all(source, |captures: &Captures| replacement(captures).to_owned())
}

/// Source line of every line of a stripped text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineMap {
    lines: Vec<usize>,
}

impl LineMap {
    /// `removed` holds `(offset in stripped, line breaks removed there)`,
    /// sorted by offset.
    fn new(
        stripped: &str,
        removed: &[(usize, usize)],
    ) -> Self {
        let mut removed = removed.iter().peekable();
        let mut shift = 0;
        let mut offset = 0;

        let lines = stripped
            .split('\n')
            .enumerate()
            .map(|(index, line)| {
                // a line belongs to the source line its first token is on
                let content = offset + line.len() - line.trim_start().len();
                while let Some((_, line_breaks)) =
                    removed.next_if(|(at, _)| *at <= content)
                {
                    shift += line_breaks;
                }
                offset += line.len() + 1;
                index + 1 + shift
            })
            .collect();

        Self {
            lines,
        }
    }

    /// Source line of the 1-based stripped `line`.
    pub fn source_line(
        &self,
        line: usize,
    ) -> usize {
        match line.checked_sub(1).and_then(|index| self.lines.get(index)) {
            Some(&source_line) => source_line,
            None => {
                let shift =
                    self.lines.last().map_or(0, |&last| last - self.lines.len());
                line + shift
            },
        }
    }
}

/// [`strip_comments`], plus the source line of every stripped line.
///
/// Block comments spanning lines take their line breaks with them; the map
/// restores the numbering of the original text.
pub fn strip_comments_with_lines(source: &str) -> (String, LineMap) {
    let mut stripped = String::with_capacity(source.len());
    let mut removed = Vec::new();
    let mut last_end = 0;

    for captures in COMMENT_OR_STRING.captures_iter(source) {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        stripped.push_str(&source[last_end..whole.start()]);

        let replacement = replacement(&captures);
        let line_breaks = whole
            .as_str()
            .matches('\n')
            .count()
            .saturating_sub(replacement.matches('\n').count());
        if line_breaks > 0 {
            removed.push((stripped.len(), line_breaks));
        }

        stripped.push_str(replacement);
        last_end = whole.end();
    }
    stripped.push_str(&source[last_end..]);

    let lines = LineMap::new(&stripped, &removed);
    (stripped, lines)
}
