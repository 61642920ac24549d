use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::common::envs;

fn default_runtime_path() -> String {
    "::kernelgen::runtime".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["cl".to_string()]
}

/// Generator settings, usually read from a JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Fail on kernel declarations that do not parse instead of skipping them.
    #[serde(default)]
    pub strict: bool,
    /// Module path the generated code imports the runtime from.
    #[serde(default = "default_runtime_path")]
    pub runtime_path: String,
    /// File extensions picked up when discovering sources.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub copy_to_output: bool,
    /// Where referenced sources are copied, keeping their output-relative path.
    #[serde(default)]
    pub asset_dir: Option<PathBuf>,
    #[serde(default)]
    pub rustfmt: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            strict: false,
            runtime_path: default_runtime_path(),
            extensions: default_extensions(),
            copy_to_output: false,
            asset_dir: None,
            rustfmt: false,
        }
    }
}

impl GeneratorConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("cannot open config {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("cannot parse config {}", path.display()))
    }

    /// Applies `KERNELGEN_STRICT`.
    pub fn with_env_overrides(mut self) -> Self {
        self.strict |= envs::build_strict();
        self
    }
}
