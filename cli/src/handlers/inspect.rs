use std::path::{Path, PathBuf};

use anyhow::Context;
use kernelgen::{KernelDescriptor, SourceAnalysis};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub path: PathBuf,
    pub imports: Vec<String>,
    pub kernels: Vec<KernelDescriptor>,
    /// Declarations that were skipped because they did not parse.
    pub skipped: Vec<String>,
}

pub fn inspect(
    path: &Path,
    strict: bool,
) -> anyhow::Result<InspectReport> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let analysis = SourceAnalysis::analyze(&text);
    analysis.check(strict).with_context(|| {
        format!("malformed kernel declaration in {}", path.display())
    })?;

    Ok(InspectReport {
        path: path.to_path_buf(),
        imports: analysis.imports,
        kernels: analysis.kernels,
        skipped: analysis.skipped.iter().map(ToString::to_string).collect(),
    })
}

pub fn handle_inspect(
    file: PathBuf,
    strict: bool,
) -> anyhow::Result<()> {
    let report = inspect(&file, strict)?;
    let json = serde_json::to_string_pretty(&report)
        .context("cannot serialize inspect report")?;
    println!("{json}");
    Ok(())
}
