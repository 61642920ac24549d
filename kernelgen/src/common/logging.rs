use std::{sync::OnceLock, time::Instant};

use crate::common::envs;

static START: OnceLock<Instant> = OnceLock::new();

pub fn elapsed_ms() -> u128 {
    START.get_or_init(Instant::now).elapsed().as_millis()
}

fn emit(line: std::fmt::Arguments) {
    if envs::in_build_script() {
        println!("cargo::warning={line}");
    } else {
        eprintln!("{line}");
    }
}

pub fn _debug_log(args: std::fmt::Arguments) {
    if envs::build_debug() {
        emit(format_args!("(kernelgen-debug) [{}ms] {}", elapsed_ms(), args));
    }
}

pub fn _warn_log(args: std::fmt::Arguments) {
    emit(format_args!("(kernelgen) {args}"));
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        $crate::common::logging::_debug_log(format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {{
        $crate::common::logging::_warn_log(format_args!($($arg)*));
    }};
}
