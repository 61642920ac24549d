use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

static USING_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\busing\s*\[\s*([A-Za-z_][A-Za-z0-9_]*(?:\s*::\s*(?:[A-Za-z_][A-Za-z0-9_]*|\*))*)\s*\]")
        .expect("using directive regex is valid")
});

/// Collects the names of every `using [<name>]` directive in `source`.
///
/// Directives are read from the raw text, comments included, in order of
/// appearance. Repeated names are kept once.
pub fn collect_imports(source: &str) -> Vec<String> {
    USING_DIRECTIVE
        .captures_iter(source)
        .map(|captures| captures[1].split_whitespace().collect::<String>())
        .unique()
        .collect()
}
