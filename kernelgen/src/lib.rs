//! Typed host-side wrappers for OpenCL C compute kernels.
//!
//! The generator reads kernel sources, finds every `kernel void` declaration
//! and emits one Rust type per kernel whose `run_*` methods bind each argument
//! at its declared index and launch the kernel through a [`runtime::ComputeRuntime`].

pub mod common;

pub mod analysis;
pub mod bindgen;
pub mod config;
pub mod descriptor;
pub mod directives;
pub mod generator;
pub mod normalize;
pub mod runtime;
pub mod signature;
pub mod strip;
pub mod type_map;
pub mod unit;

pub use analysis::SourceAnalysis;
pub use config::GeneratorConfig;
pub use descriptor::{ArgumentDescriptor, KernelDescriptor, Qualifier};
pub use generator::{GeneratedArtifact, Generator};
pub use signature::ParseError;
pub use unit::{KernelInput, SourceUnit, discover};

/// Generates wrappers for every source under `src_dir` into `out_dir`.
///
/// Meant to be called from a build script.
pub fn generate_dir(
    src_dir: impl AsRef<std::path::Path>,
    out_dir: impl Into<std::path::PathBuf>,
    config: GeneratorConfig,
) -> anyhow::Result<Vec<GeneratedArtifact>> {
    let generator = Generator::new(config, out_dir);
    let inputs = discover(
        src_dir.as_ref(),
        &generator.config().extensions,
        generator.config().copy_to_output,
    );
    generator.build_blocking(inputs)
}
