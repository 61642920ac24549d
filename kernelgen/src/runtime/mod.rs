//! Runtime base for generated kernel wrappers.
//!
//! Generated code names only the items re-exported here. The compute runtime
//! itself sits behind [`ComputeRuntime`]; hosts provide the implementation.

mod backend;
mod error;
mod handle;
mod kernel;
pub mod types;

pub use backend::{BuildFailure, ComputeRuntime, KernelArg, RuntimeError};
pub use error::KernelError;
pub use handle::{
    Buffer, CommandQueue, Context, Device, Event, EventHandle, KernelHandle,
    Mem, ProgramHandle, QueueHandle,
};
pub use kernel::{
    BoundKernel, KernelBase, KernelSource, KernelState, KernelWrapper,
    base_directory, work_dimension,
};
