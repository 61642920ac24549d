use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, bail};
use futures::{StreamExt, TryStreamExt, stream};
use tokio::task::spawn_blocking;

use crate::{
    analysis::SourceAnalysis,
    bindgen::bindgen_unit,
    common::{caching, codegen, envs},
    config::GeneratorConfig,
    debug_log,
    unit::{KernelInput, SourceUnit, discover},
};

fn write_artifact(
    rendered: &str,
    file: &Path,
    hash: &blake3::Hash,
    rustfmt: bool,
) -> anyhow::Result<()> {
    codegen::write_rendered(rendered, file, rustfmt)?;

    let hash_path = caching::hash_path(file);
    fs::write(&hash_path, hash.to_string()).with_context(|| {
        format!("cannot write hash file {}", hash_path.display())
    })
}

/// One artifact produced (or found up to date) by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub input: KernelInput,
    pub artifact_path: PathBuf,
    pub kernels: Vec<String>,
    pub cached: bool,
}

#[derive(Debug)]
pub struct Generator {
    config: GeneratorConfig,
    out_dir: PathBuf,
}

impl Generator {
    pub fn new(
        config: GeneratorConfig,
        out_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            config: config.with_env_overrides(),
            out_dir: out_dir.into(),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// `<out_dir>/<link_path>.rs`
    pub fn artifact_path(
        &self,
        input: &KernelInput,
    ) -> PathBuf {
        let mut path = self.out_dir.join(&input.link_path).into_os_string();
        path.push(".rs");
        path.into()
    }

    /// Analyzes `unit`, failing on malformed declarations in strict mode.
    pub fn analyze(
        &self,
        unit: &SourceUnit,
    ) -> anyhow::Result<SourceAnalysis> {
        let analysis = SourceAnalysis::analyze(&unit.text);

        analysis.check(self.config.strict).with_context(|| {
            format!("malformed kernel declaration in {}", unit.path.display())
        })?;

        for error in &analysis.skipped {
            debug_log!(
                "skipped kernel declaration in {}: {error}",
                unit.path.display()
            );
        }

        Ok(analysis)
    }

    pub fn render(
        &self,
        unit: &SourceUnit,
        analysis: &SourceAnalysis,
    ) -> anyhow::Result<String> {
        let tokens = bindgen_unit(&self.config.runtime_path, unit, analysis)?;
        let header = format!(
            "@generated by kernelgen from {}\nDo not edit by hand.",
            unit.path.display()
        );
        codegen::render_tokens(tokens, &header)
    }

    fn unit_hash(
        &self,
        unit: &SourceUnit,
    ) -> anyhow::Result<blake3::Hash> {
        let config = serde_json::to_vec(&self.config)
            .context("cannot serialize generator config")?;
        let path = unit.path.to_string_lossy();
        let resolved_path = unit.resolved_path.to_string_lossy();
        let relative_path = unit.output_relative_str();
        let embed: &[u8] = if unit.embed { b"embed" } else { b"path" };

        Ok(caching::artifact_hash([
            config.as_slice(),
            path.as_bytes(),
            resolved_path.as_bytes(),
            relative_path.as_bytes(),
            embed,
            unit.text.as_bytes(),
        ]))
    }

    async fn copy_asset(
        &self,
        unit: &SourceUnit,
    ) -> anyhow::Result<()> {
        let Some(asset_dir) = &self.config.asset_dir else {
            return Ok(());
        };
        if unit.embed {
            return Ok(());
        }

        let destination = asset_dir.join(&unit.output_relative_path);
        if let Some(parent) = destination.parent() {
            tokio::fs::create_dir_all(parent).await.with_context(|| {
                format!("cannot create directory {}", parent.display())
            })?;
        }
        tokio::fs::copy(&unit.path, &destination).await.with_context(|| {
            format!(
                "cannot copy {} to {}",
                unit.path.display(),
                destination.display()
            )
        })?;
        Ok(())
    }

    async fn generate(
        &self,
        input: KernelInput,
    ) -> anyhow::Result<GeneratedArtifact> {
        let source_path_display = input.path.display().to_string();
        debug_log!("generate start: {source_path_display}");

        let unit = SourceUnit::load(&input).await?;
        let analysis = self.analyze(&unit)?;
        let kernels =
            analysis.kernels.iter().map(|k| k.name.clone()).collect::<Vec<_>>();

        self.copy_asset(&unit).await?;

        let artifact_path = self.artifact_path(&input);
        let hash = self.unit_hash(&unit)?;

        let is_fresh = {
            let artifact_path = artifact_path.clone();
            spawn_blocking(move || caching::is_fresh(&artifact_path, &hash))
                .await
                .context("spawn_blocking failed")?
        };
        if !envs::build_force() && is_fresh {
            debug_log!("generate cached: {source_path_display}");
            return Ok(GeneratedArtifact {
                input,
                artifact_path,
                kernels,
                cached: true,
            });
        }

        let rendered = self.render(&unit, &analysis).with_context(|| {
            format!("cannot generate bindings for {source_path_display}")
        })?;

        let rustfmt = self.config.rustfmt;
        let file = artifact_path.clone();
        spawn_blocking(move || write_artifact(&rendered, &file, &hash, rustfmt))
            .await
            .context("spawn_blocking failed")??;

        debug_log!(
            "generate end: {source_path_display} (kernels: [{}])",
            kernels.join(", ")
        );

        Ok(GeneratedArtifact {
            input,
            artifact_path,
            kernels,
            cached: false,
        })
    }

    /// Fails when two inputs would write the same artifact.
    fn check_artifact_paths(
        &self,
        inputs: &[KernelInput],
    ) -> anyhow::Result<()> {
        let mut claimed = HashMap::with_capacity(inputs.len());
        for input in inputs {
            let artifact_path = self.artifact_path(input);
            if let Some(other) = claimed.insert(artifact_path.clone(), &input.path) {
                bail!(
                    "{} and {} both generate {}",
                    other.display(),
                    input.path.display(),
                    artifact_path.display()
                );
            }
        }
        Ok(())
    }

    /// Generates one artifact per input, concurrently. Results are sorted by
    /// source path.
    pub async fn build(
        &self,
        inputs: Vec<KernelInput>,
    ) -> anyhow::Result<Vec<GeneratedArtifact>> {
        self.check_artifact_paths(&inputs)?;

        let num_concurrent_generations =
            std::thread::available_parallelism().map(|x| x.get()).unwrap_or(4)
                * 2;

        let mut artifacts: Vec<GeneratedArtifact> = stream::iter(inputs)
            .map(|input| self.generate(input))
            .buffer_unordered(num_concurrent_generations)
            .try_collect()
            .await?;

        artifacts.sort_by(|a, b| a.input.path.cmp(&b.input.path));
        Ok(artifacts)
    }

    /// [`Generator::build`] on a current-thread runtime, for build scripts.
    pub fn build_blocking(
        &self,
        inputs: Vec<KernelInput>,
    ) -> anyhow::Result<Vec<GeneratedArtifact>> {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("cannot start async runtime")?
            .block_on(self.build(inputs))
    }

    /// Discovers every source under `src_dir` and generates it.
    pub async fn build_dir(
        &self,
        src_dir: &Path,
    ) -> anyhow::Result<Vec<GeneratedArtifact>> {
        let inputs =
            discover(src_dir, &self.config.extensions, self.config.copy_to_output);
        debug_log!(
            "discovered {} kernel sources in {}",
            inputs.len(),
            src_dir.display()
        );
        self.build(inputs).await
    }
}
