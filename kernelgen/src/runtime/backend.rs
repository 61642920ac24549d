use std::ffi::c_void;

use thiserror::Error;

use super::handle::{
    Device, EventHandle, KernelHandle, Mem, ProgramHandle, QueueHandle,
};

/// A status code returned by the native compute runtime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation} failed with status {status}")]
pub struct RuntimeError {
    pub operation: &'static str,
    pub status: i32,
}

impl RuntimeError {
    pub fn new(
        operation: &'static str,
        status: i32,
    ) -> Self {
        Self {
            operation,
            status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("program build failed")]
pub struct BuildFailure {
    /// Build log reported by the native compiler.
    pub log: String,
}

/// One kernel argument as handed to the native argument setter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelArg {
    /// Device memory, set by handle.
    Mem(Mem),
    /// Local memory of `size` bytes; no value is transmitted.
    Local {
        size: usize,
    },
    /// `size` bytes read from `value`.
    ///
    /// `value` only has to stay valid for the duration of the
    /// [`ComputeRuntime::set_kernel_arg`] call that receives it.
    Bytes {
        size: usize,
        value: *const c_void,
    },
}

/// The native compute runtime the generated wrappers call into.
///
/// Implementations are expected to serialize access to one kernel handle
/// themselves only if they share it; `KernelBase` never sets arguments on the
/// same handle from two threads.
pub trait ComputeRuntime: Send + Sync {
    /// Lightweight step run on every wrapper construction.
    ///
    /// Receives only the kernel source and name; no device is involved.
    fn prepare(
        &self,
        _source: &str,
        _kernel_name: &str,
    ) -> Result<(), RuntimeError> {
        Ok(())
    }

    fn build_program(
        &self,
        device: Device,
        source: &str,
    ) -> Result<ProgramHandle, BuildFailure>;

    fn create_kernel(
        &self,
        program: ProgramHandle,
        kernel_name: &str,
    ) -> Result<KernelHandle, RuntimeError>;

    fn set_kernel_arg(
        &self,
        kernel: KernelHandle,
        index: u32,
        arg: KernelArg,
    ) -> Result<(), RuntimeError>;

    /// Enqueues an N-dimensional launch; `global.len()` is the dimension.
    ///
    /// `local` is `None` when the runtime should pick the work-group size.
    fn enqueue_nd_range(
        &self,
        queue: QueueHandle,
        kernel: KernelHandle,
        global: &[usize],
        local: Option<&[usize]>,
        wait_list: &[EventHandle],
    ) -> Result<EventHandle, RuntimeError>;

    fn wait_for_events(
        &self,
        events: &[EventHandle],
    ) -> Result<(), RuntimeError>;

    fn create_command_queue(
        &self,
        device: Device,
    ) -> Result<QueueHandle, RuntimeError>;

    fn create_buffer(
        &self,
        size: usize,
    ) -> Result<Mem, RuntimeError>;

    /// Called once when the owning wrapper is dropped.
    fn release_kernel(
        &self,
        _kernel: KernelHandle,
    ) -> Result<(), RuntimeError> {
        Ok(())
    }

    /// Called once when the owning wrapper is dropped, after its kernel.
    fn release_program(
        &self,
        _program: ProgramHandle,
    ) -> Result<(), RuntimeError> {
        Ok(())
    }

    /// Called once, when the last clone of an [`Event`] is dropped.
    ///
    /// [`Event`]: super::Event
    fn release_event(
        &self,
        _event: EventHandle,
    ) -> Result<(), RuntimeError> {
        Ok(())
    }
}
