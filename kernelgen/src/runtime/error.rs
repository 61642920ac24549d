use std::path::PathBuf;

use thiserror::Error;

use super::{RuntimeError, handle::Device};

#[derive(Debug, Error)]
pub enum KernelError {
    #[error("invalid work dimension for global size {global:?}")]
    InvalidWorkDimension {
        global: [usize; 3],
    },
    #[error("cannot build kernel `{kernel}`:\n{log}")]
    Build {
        kernel: &'static str,
        log: String,
    },
    #[error(
        "kernel `{kernel}` was built for {built:?} but dispatched on {requested:?}"
    )]
    DeviceMismatch {
        kernel: &'static str,
        built: Device,
        requested: Device,
    },
    #[error("cannot read kernel source {}", path.display())]
    Source {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
