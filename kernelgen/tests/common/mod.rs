#![allow(dead_code)]
use std::{
    path::PathBuf,
    sync::{
        Arc, Mutex,
        atomic::{AtomicU64, Ordering},
    },
};

use kernelgen::{
    Generator, GeneratorConfig, KernelInput, SourceAnalysis, SourceUnit,
    runtime::{
        BuildFailure, ComputeRuntime, Context, Device, EventHandle, KernelArg,
        KernelHandle, Mem, ProgramHandle, QueueHandle, RuntimeError,
    },
};
use quote::ToTokens;

/// A kernel argument as the mock runtime saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedArg {
    Mem(Mem),
    Local(usize),
    Bytes(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Prepare {
        kernel: String,
    },
    BuildProgram {
        device: Device,
    },
    CreateKernel {
        program: ProgramHandle,
        name: String,
    },
    SetArg {
        kernel: KernelHandle,
        index: u32,
        arg: RecordedArg,
    },
    Enqueue {
        queue: QueueHandle,
        kernel: KernelHandle,
        global: Vec<usize>,
        local: Option<Vec<usize>>,
        wait_list: Vec<EventHandle>,
    },
    Wait {
        events: Vec<EventHandle>,
    },
    ReleaseKernel {
        kernel: KernelHandle,
    },
    ReleaseProgram {
        program: ProgramHandle,
    },
    ReleaseEvent {
        event: EventHandle,
    },
}

/// Records every call and hands out increasing handles.
#[derive(Debug, Default)]
pub struct MockRuntime {
    calls: Mutex<Vec<Call>>,
    next_handle: AtomicU64,
    build_log: Option<String>,
}

impl MockRuntime {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A runtime whose program builds always fail with `log`.
    pub fn failing_build(log: &str) -> Arc<Self> {
        Arc::new(Self {
            build_log: Some(log.to_string()),
            ..Self::default()
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn count(
        &self,
        predicate: impl Fn(&Call) -> bool,
    ) -> usize {
        self.calls().iter().filter(|call| predicate(call)).count()
    }

    pub fn set_args(&self) -> Vec<(u32, RecordedArg)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::SetArg {
                    index,
                    arg,
                    ..
                } => Some((index, arg)),
                _ => None,
            })
            .collect()
    }

    fn record(
        &self,
        call: Call,
    ) {
        self.calls.lock().unwrap().push(call);
    }

    fn next(&self) -> u64 {
        self.next_handle.fetch_add(1, Ordering::Relaxed) + 1
    }
}

impl ComputeRuntime for MockRuntime {
    fn prepare(
        &self,
        _source: &str,
        kernel_name: &str,
    ) -> Result<(), RuntimeError> {
        self.record(Call::Prepare {
            kernel: kernel_name.to_string(),
        });
        Ok(())
    }

    fn build_program(
        &self,
        device: Device,
        _source: &str,
    ) -> Result<ProgramHandle, BuildFailure> {
        self.record(Call::BuildProgram {
            device,
        });
        match &self.build_log {
            Some(log) => Err(BuildFailure {
                log: log.clone(),
            }),
            None => Ok(ProgramHandle(self.next())),
        }
    }

    fn create_kernel(
        &self,
        program: ProgramHandle,
        kernel_name: &str,
    ) -> Result<KernelHandle, RuntimeError> {
        self.record(Call::CreateKernel {
            program,
            name: kernel_name.to_string(),
        });
        Ok(KernelHandle(self.next()))
    }

    fn set_kernel_arg(
        &self,
        kernel: KernelHandle,
        index: u32,
        arg: KernelArg,
    ) -> Result<(), RuntimeError> {
        let arg = match arg {
            KernelArg::Mem(mem) => RecordedArg::Mem(mem),
            KernelArg::Local {
                size,
            } => RecordedArg::Local(size),
            KernelArg::Bytes {
                size,
                value,
            } => {
                let bytes = unsafe {
                    std::slice::from_raw_parts(value.cast::<u8>(), size)
                };
                RecordedArg::Bytes(bytes.to_vec())
            },
        };
        self.record(Call::SetArg {
            kernel,
            index,
            arg,
        });
        Ok(())
    }

    fn enqueue_nd_range(
        &self,
        queue: QueueHandle,
        kernel: KernelHandle,
        global: &[usize],
        local: Option<&[usize]>,
        wait_list: &[EventHandle],
    ) -> Result<EventHandle, RuntimeError> {
        self.record(Call::Enqueue {
            queue,
            kernel,
            global: global.to_vec(),
            local: local.map(<[usize]>::to_vec),
            wait_list: wait_list.to_vec(),
        });
        Ok(EventHandle(self.next()))
    }

    fn wait_for_events(
        &self,
        events: &[EventHandle],
    ) -> Result<(), RuntimeError> {
        self.record(Call::Wait {
            events: events.to_vec(),
        });
        Ok(())
    }

    fn create_command_queue(
        &self,
        _device: Device,
    ) -> Result<QueueHandle, RuntimeError> {
        Ok(QueueHandle(self.next()))
    }

    fn create_buffer(
        &self,
        _size: usize,
    ) -> Result<Mem, RuntimeError> {
        Ok(Mem(self.next()))
    }

    fn release_kernel(
        &self,
        kernel: KernelHandle,
    ) -> Result<(), RuntimeError> {
        self.record(Call::ReleaseKernel {
            kernel,
        });
        Ok(())
    }

    fn release_program(
        &self,
        program: ProgramHandle,
    ) -> Result<(), RuntimeError> {
        self.record(Call::ReleaseProgram {
            program,
        });
        Ok(())
    }

    fn release_event(
        &self,
        event: EventHandle,
    ) -> Result<(), RuntimeError> {
        self.record(Call::ReleaseEvent {
            event,
        });
        Ok(())
    }
}

pub fn context(runtime: &Arc<MockRuntime>) -> Context {
    Context::new(runtime.clone())
}

/// Renders the artifact for `text` as if it was read from `path`.
pub fn render(
    path: &str,
    text: &str,
    copy_to_output: bool,
) -> String {
    let input = KernelInput::new(
        path,
        PathBuf::from(path).with_extension(""),
        copy_to_output,
    );
    let unit =
        SourceUnit::from_text(&input, PathBuf::from("/src").join(path), text.to_string());
    let generator = Generator::new(GeneratorConfig::default(), "/out");
    let analysis = generator.analyze(&unit).unwrap();
    generator.render(&unit, &analysis).unwrap()
}

/// `text` parsed as Rust and printed back as compacted tokens, so that
/// formatting and comments do not take part in a comparison.
pub fn tokens(text: &str) -> String {
    let file = syn::parse_file(text).unwrap();
    compact(&file.to_token_stream().to_string())
}

pub fn analyze(text: &str) -> SourceAnalysis {
    SourceAnalysis::analyze(text)
}

/// `text` without whitespace or trailing commas, so that token output and
/// pretty-printed output compare equal.
pub fn compact(text: &str) -> String {
    text.split_whitespace()
        .collect::<String>()
        .replace(",)", ")")
        .replace(",]", "]")
        .replace(",}", "}")
}
