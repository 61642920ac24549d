use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

/// One kernel source handed to the generator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KernelInput {
    pub path: PathBuf,
    /// Output location relative to the output directory, without extension.
    pub link_path: PathBuf,
    /// Reference the source by path instead of embedding its text.
    pub copy_to_output: bool,
}

impl KernelInput {
    pub fn new(
        path: impl Into<PathBuf>,
        link_path: impl Into<PathBuf>,
        copy_to_output: bool,
    ) -> Self {
        Self {
            path: path.into(),
            link_path: link_path.into(),
            copy_to_output,
        }
    }
}

/// A loaded kernel source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    pub path: PathBuf,
    pub resolved_path: PathBuf,
    pub text: String,
    pub embed: bool,
    pub output_relative_path: PathBuf,
}

impl SourceUnit {
    pub async fn load(input: &KernelInput) -> anyhow::Result<Self> {
        let text = tokio::fs::read_to_string(&input.path)
            .await
            .with_context(|| format!("cannot read {}", input.path.display()))?;
        let resolved_path = tokio::fs::canonicalize(&input.path)
            .await
            .with_context(|| {
                format!("cannot resolve {}", input.path.display())
            })?;

        Ok(Self::from_text(input, resolved_path, text))
    }

    pub fn from_text(
        input: &KernelInput,
        resolved_path: PathBuf,
        text: String,
    ) -> Self {
        let output_relative_path = match input.path.extension() {
            Some(extension) => input.link_path.with_extension(extension),
            None => input.link_path.clone(),
        };

        Self {
            path: input.path.clone(),
            resolved_path,
            text,
            embed: !input.copy_to_output,
            output_relative_path,
        }
    }

    /// Output-relative source path with `/` separators.
    pub fn output_relative_str(&self) -> String {
        self.output_relative_path
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Finds every kernel source under `src_dir` with one of `extensions`.
///
/// Link paths mirror the directory layout below `src_dir`. Results are
/// sorted by path.
pub fn discover(
    src_dir: &Path,
    extensions: &[String],
    copy_to_output: bool,
) -> Vec<KernelInput> {
    let mut inputs: Vec<KernelInput> = WalkDir::new(src_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.file_type().is_file()
                && e.path()
                    .extension()
                    .and_then(|s| s.to_str())
                    .is_some_and(|ext| extensions.iter().any(|x| x == ext))
        })
        .filter_map(|e| {
            let link_path =
                e.path().strip_prefix(src_dir).ok()?.with_extension("");
            Some(KernelInput::new(e.into_path(), link_path, copy_to_output))
        })
        .collect();

    inputs.sort_by(|a, b| a.path.cmp(&b.path));
    inputs
}
