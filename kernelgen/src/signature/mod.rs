//! Kernel declaration matching.
//!
//! Each line of normalized source is tokenized and, when it carries the
//! `kernel` keyword, parsed into a [`KernelSignature`] holding one structured
//! record per parameter.

mod cst;
mod info;
mod lexer;
mod parser;
mod token;

use thiserror::Error;

pub use info::{
    KernelSignature, ParameterQualifier, ParameterSignature, VECTOR_BASE_TYPES,
    VECTOR_WIDTHS, split_vector_width,
};
pub use parser::SignatureParser;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}, column {column}: {message}")]
pub struct ParseError {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl ParseError {
    pub fn new(
        line: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            line,
            column,
            message: message.into(),
        }
    }
}

/// Kernels found in a normalized source, plus the declarations that were
/// skipped because they did not parse.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    pub kernels: Vec<KernelSignature>,
    pub skipped: Vec<ParseError>,
}

/// Runs the signature parser over every line of `normalized`.
///
/// Lines are numbered from 1. Kernels are returned in source order.
pub fn match_signatures(normalized: &str) -> MatchOutcome {
    let mut outcome = MatchOutcome::default();

    for (index, line) in normalized.lines().enumerate() {
        match SignatureParser::parse_line(line, index + 1) {
            Ok(Some(kernel)) => outcome.kernels.push(kernel),
            Ok(None) => {},
            Err(error) => outcome.skipped.push(error),
        }
    }

    outcome
}
