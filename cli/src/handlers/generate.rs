use std::path::PathBuf;

use anyhow::Context;
use console::Style;
use kernelgen::{GeneratedArtifact, Generator, GeneratorConfig};
use tokio::runtime::Runtime;

pub struct GenerateOptions {
    pub src_dir: PathBuf,
    pub out_dir: PathBuf,
    pub config: Option<PathBuf>,
    pub strict: bool,
    pub copy_to_output: bool,
    pub asset_dir: Option<PathBuf>,
    pub runtime_path: Option<String>,
}

impl GenerateOptions {
    /// Configuration file (or defaults) with command-line flags on top.
    pub fn resolve_config(&self) -> anyhow::Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_file(path)?,
            None => GeneratorConfig::default(),
        };
        config.strict |= self.strict;
        config.copy_to_output |= self.copy_to_output;
        if let Some(asset_dir) = &self.asset_dir {
            config.asset_dir = Some(asset_dir.clone());
        }
        if let Some(runtime_path) = &self.runtime_path {
            config.runtime_path = runtime_path.clone();
        }
        Ok(config)
    }
}

fn format_artifact(artifact: &GeneratedArtifact) -> String {
    let style_status = if artifact.cached {
        Style::new().dim()
    } else {
        Style::new().green().bold()
    };
    let status = if artifact.cached {
        "cached"
    } else {
        "generated"
    };
    let kernels = if artifact.kernels.is_empty() {
        Style::new().dim().apply_to("no kernels".to_string())
    } else {
        Style::new().apply_to(artifact.kernels.join(", "))
    };

    format!(
        "{:>9} {} ({kernels})",
        style_status.apply_to(status),
        artifact.artifact_path.display()
    )
}

pub fn handle_generate(options: GenerateOptions) -> anyhow::Result<()> {
    let config = options.resolve_config()?;
    let generator = Generator::new(config, &options.out_dir);

    let runtime = Runtime::new().context("cannot start async runtime")?;
    let artifacts = runtime.block_on(generator.build_dir(&options.src_dir))?;

    for artifact in &artifacts {
        println!("{}", format_artifact(artifact));
    }

    let kernel_count: usize = artifacts.iter().map(|a| a.kernels.len()).sum();
    let style_summary = Style::new().bold();
    println!(
        "{}",
        style_summary.apply_to(format!(
            "{kernel_count} kernels in {} files",
            artifacts.len()
        ))
    );

    Ok(())
}
