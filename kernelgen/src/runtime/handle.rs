use std::{fmt, marker::PhantomData, mem::size_of, sync::Arc};

use super::{ComputeRuntime, KernelError};
use crate::debug_log;

macro_rules! handles {
    ($($(#[$meta:meta])* $name:ident;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            pub struct $name(pub u64);
        )*
    };
}

handles! {
    Device;
    /// Opaque device-memory handle (buffers, images, samplers).
    Mem;
    ProgramHandle;
    KernelHandle;
    QueueHandle;
    EventHandle;
}

/// Owns the runtime that programs, kernels and queues are created through.
#[derive(Clone)]
pub struct Context {
    runtime: Arc<dyn ComputeRuntime>,
}

impl fmt::Debug for Context {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("Context").finish_non_exhaustive()
    }
}

impl Context {
    pub fn new(runtime: Arc<dyn ComputeRuntime>) -> Self {
        Self {
            runtime,
        }
    }

    pub fn runtime(&self) -> &dyn ComputeRuntime {
        self.runtime.as_ref()
    }

    pub fn create_command_queue(
        &self,
        device: Device,
    ) -> Result<CommandQueue, KernelError> {
        let handle = self.runtime.create_command_queue(device)?;
        Ok(CommandQueue {
            handle,
            device,
        })
    }

    /// Allocates device memory for `len` elements of `T`.
    pub fn create_buffer<T>(
        &self,
        len: usize,
    ) -> Result<Buffer<T>, KernelError> {
        let mem = self.runtime.create_buffer(len * size_of::<T>())?;
        Ok(Buffer::from_raw(mem, len))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandQueue {
    handle: QueueHandle,
    device: Device,
}

impl CommandQueue {
    pub fn from_raw(
        handle: QueueHandle,
        device: Device,
    ) -> Self {
        Self {
            handle,
            device,
        }
    }

    pub fn handle(&self) -> QueueHandle {
        self.handle
    }

    pub fn device(&self) -> Device {
        self.device
    }
}

struct EventInner {
    handle: EventHandle,
    context: Context,
}

impl Drop for EventInner {
    fn drop(&mut self) {
        if let Err(error) = self.context.runtime().release_event(self.handle) {
            debug_log!("cannot release {:?}: {error}", self.handle);
        }
    }
}

/// Completion token of an enqueued launch.
///
/// Clones share the native event, which is released with the last clone.
#[derive(Clone)]
pub struct Event {
    inner: Arc<EventInner>,
}

impl fmt::Debug for Event {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_tuple("Event").field(&self.inner.handle).finish()
    }
}

impl Event {
    /// Takes ownership of `handle`; it is released through `context`.
    pub fn new(
        handle: EventHandle,
        context: Context,
    ) -> Self {
        Self {
            inner: Arc::new(EventInner {
                handle,
                context,
            }),
        }
    }

    pub fn handle(&self) -> EventHandle {
        self.inner.handle
    }

    /// Blocks until the launch behind this event has completed.
    pub fn wait(&self) -> Result<(), KernelError> {
        self.inner.context.runtime().wait_for_events(&[self.inner.handle])?;
        Ok(())
    }

    pub fn wait_all(events: &[Event]) -> Result<(), KernelError> {
        let Some(first) = events.first() else {
            return Ok(());
        };
        let handles = events.iter().map(Event::handle).collect::<Vec<_>>();
        first.inner.context.runtime().wait_for_events(&handles)?;
        Ok(())
    }
}

/// Device memory holding `len` elements of `T`.
#[derive(Debug)]
pub struct Buffer<T> {
    mem: Mem,
    len: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Buffer<T> {
    pub fn from_raw(
        mem: Mem,
        len: usize,
    ) -> Self {
        Self {
            mem,
            len,
            _marker: PhantomData,
        }
    }

    pub fn mem(&self) -> Mem {
        self.mem
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn size_in_bytes(&self) -> usize {
        self.len * size_of::<T>()
    }
}
