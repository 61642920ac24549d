use serde::Serialize;

use crate::{
    descriptor::KernelDescriptor,
    directives::collect_imports,
    normalize::normalize_signatures,
    signature::{ParseError, match_signatures},
    strip::strip_comments_with_lines,
};

/// Everything extracted from one kernel source.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct SourceAnalysis {
    pub imports: Vec<String>,
    pub kernels: Vec<KernelDescriptor>,
    #[serde(skip)]
    pub skipped: Vec<ParseError>,
}

impl SourceAnalysis {
    /// Collects directives, strips comments, normalizes declaration headers
    /// and matches every kernel declaration of `text`.
    ///
    /// Reported lines refer to `text`, not to the stripped source.
    pub fn analyze(text: &str) -> Self {
        let imports = collect_imports(text);
        let (stripped, lines) = strip_comments_with_lines(text);
        let normalized = normalize_signatures(&stripped);
        let mut outcome = match_signatures(&normalized);

        for kernel in &mut outcome.kernels {
            kernel.line = lines.source_line(kernel.line);
        }
        for error in &mut outcome.skipped {
            error.line = lines.source_line(error.line);
        }

        Self {
            imports,
            kernels: outcome
                .kernels
                .iter()
                .map(KernelDescriptor::from_signature)
                .collect(),
            skipped: outcome.skipped,
        }
    }

    /// First malformed declaration, when `strict` is set.
    pub fn check(
        &self,
        strict: bool,
    ) -> Result<(), ParseError> {
        match self.skipped.first() {
            Some(error) if strict => Err(error.clone()),
            _ => Ok(()),
        }
    }
}
