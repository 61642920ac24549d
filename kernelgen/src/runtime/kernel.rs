use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf},
};

use super::{
    ComputeRuntime, KernelArg, KernelError,
    handle::{CommandQueue, Context, Device, Event, KernelHandle, ProgramHandle},
};
use crate::debug_log;

/// Static description every generated wrapper provides.
pub trait KernelWrapper {
    /// Kernel function name as declared in the source.
    const KERNEL_NAME: &'static str;
    /// Absolute path of the kernel source, resolved when it was generated.
    const KERNEL_PATH: &'static str;
    /// Path of the kernel source as given to the generator.
    const ORIGINAL_PATH: &'static str;

    fn kernel_source() -> KernelSource;
}

/// Where a wrapper's kernel source text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelSource {
    Embedded(&'static str),
    File(PathBuf),
}

/// Directory of the running executable, or `.` when it cannot be found.
pub fn base_directory() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

impl KernelSource {
    /// Source copied next to the application, relative to [`base_directory`].
    pub fn resolve(relative_path: &str) -> Self {
        KernelSource::File(base_directory().join(relative_path))
    }

    pub fn load(&self) -> Result<Cow<'static, str>, KernelError> {
        match self {
            KernelSource::Embedded(text) => Ok(Cow::Borrowed(text)),
            KernelSource::File(path) => fs::read_to_string(path)
                .map(Cow::Owned)
                .map_err(|source| KernelError::Source {
                    path: path.clone(),
                    source,
                }),
        }
    }
}

/// Lifecycle of a wrapper's native kernel object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelState {
    /// Source loaded and handed to `prepare`; nothing built yet.
    Prepared,
    Built {
        device: Device,
        program: ProgramHandle,
        kernel: KernelHandle,
    },
}

/// State shared by every generated wrapper.
#[derive(Debug)]
pub struct KernelBase {
    context: Context,
    name: &'static str,
    source: Cow<'static, str>,
    state: KernelState,
}

impl KernelBase {
    pub fn new<K: KernelWrapper>(context: &Context) -> Result<Self, KernelError> {
        Self::prepare(context, K::kernel_source(), K::KERNEL_NAME)
    }

    /// Loads the source and runs the runtime's `prepare` step. No program is
    /// built and no kernel object is created here.
    pub fn prepare(
        context: &Context,
        source: KernelSource,
        name: &'static str,
    ) -> Result<Self, KernelError> {
        let source = source.load()?;
        context.runtime().prepare(&source, name)?;

        Ok(Self {
            context: context.clone(),
            name,
            source,
            state: KernelState::Prepared,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn state(&self) -> KernelState {
        self.state
    }

    /// Builds the program for `device` and creates the kernel object.
    ///
    /// Happens once per wrapper. Building again for the same device returns
    /// the existing kernel; another device is a [`KernelError::DeviceMismatch`].
    pub fn build(
        &mut self,
        device: Device,
    ) -> Result<KernelHandle, KernelError> {
        match self.state {
            KernelState::Built {
                device: built,
                kernel,
                ..
            } if built == device => return Ok(kernel),
            KernelState::Built {
                device: built,
                ..
            } => {
                return Err(KernelError::DeviceMismatch {
                    kernel: self.name,
                    built,
                    requested: device,
                });
            },
            KernelState::Prepared => {},
        }

        let runtime = self.context.runtime();
        let program =
            runtime.build_program(device, &self.source).map_err(|failure| {
                KernelError::Build {
                    kernel: self.name,
                    log: failure.log,
                }
            })?;
        let kernel = match runtime.create_kernel(program, self.name) {
            Ok(kernel) => kernel,
            Err(error) => {
                release_program(runtime, program);
                return Err(error.into());
            },
        };

        self.state = KernelState::Built {
            device,
            program,
            kernel,
        };
        Ok(kernel)
    }

    /// Borrows the kernel object for one argument-setting and launch
    /// sequence on `queue`, building it for the queue's device if needed.
    pub fn bind(
        &mut self,
        queue: &CommandQueue,
    ) -> Result<BoundKernel<'_>, KernelError> {
        let kernel = self.build(queue.device())?;
        Ok(BoundKernel {
            context: &self.context,
            kernel,
        })
    }
}

fn release_program(
    runtime: &dyn ComputeRuntime,
    program: ProgramHandle,
) {
    if let Err(error) = runtime.release_program(program) {
        debug_log!("cannot release {program:?}: {error}");
    }
}

impl Drop for KernelBase {
    fn drop(&mut self) {
        let KernelState::Built {
            program,
            kernel,
            ..
        } = self.state
        else {
            return;
        };

        let runtime = self.context.runtime();
        if let Err(error) = runtime.release_kernel(kernel) {
            debug_log!("cannot release {kernel:?} of `{}`: {error}", self.name);
        }
        release_program(runtime, program);
    }
}

/// Number of grid axes described by `global`.
///
/// Counts the leading non-zero components; zero components and gaps such as
/// `[n, 0, k]` are rejected.
pub fn work_dimension(global: &[usize; 3]) -> Result<usize, KernelError> {
    match global.map(|size| size != 0) {
        [true, false, false] => Ok(1),
        [true, true, false] => Ok(2),
        [true, true, true] => Ok(3),
        _ => Err(KernelError::InvalidWorkDimension {
            global: *global,
        }),
    }
}

/// Exclusive access to a built kernel object for one launch.
pub struct BoundKernel<'a> {
    context: &'a Context,
    kernel: KernelHandle,
}

impl BoundKernel<'_> {
    fn runtime(&self) -> &dyn ComputeRuntime {
        self.context.runtime()
    }

    pub fn handle(&self) -> KernelHandle {
        self.kernel
    }

    pub fn set_arg(
        &mut self,
        index: u32,
        arg: KernelArg,
    ) -> Result<(), KernelError> {
        self.runtime().set_kernel_arg(self.kernel, index, arg)?;
        Ok(())
    }

    /// Enqueues the launch and returns its completion event without waiting.
    pub fn enqueue(
        self,
        queue: &CommandQueue,
        global: [usize; 3],
        local: [usize; 3],
        wait_list: &[Event],
    ) -> Result<Event, KernelError> {
        let dimension = work_dimension(&global)?;
        let local = &local[..dimension];
        let local = if local.iter().all(|&size| size == 0) {
            None
        } else {
            Some(local)
        };
        let wait_list = wait_list.iter().map(Event::handle).collect::<Vec<_>>();

        let event = self.runtime().enqueue_nd_range(
            queue.handle(),
            self.kernel,
            &global[..dimension],
            local,
            &wait_list,
        )?;

        Ok(Event::new(event, self.context.clone()))
    }
}
