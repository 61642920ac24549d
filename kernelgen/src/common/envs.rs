use std::sync::OnceLock;

static BUILD_DEBUG: OnceLock<bool> = OnceLock::new();
static BUILD_STRICT: OnceLock<bool> = OnceLock::new();
static BUILD_FORCE: OnceLock<bool> = OnceLock::new();
static IN_BUILD_SCRIPT: OnceLock<bool> = OnceLock::new();

pub fn parse_env_flag_value(value: Option<&str>) -> bool {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) => !matches!(v.as_str(), "" | "0" | "false" | "no" | "off"),
        None => false,
    }
}

fn env_flag(name: &str) -> bool {
    if in_build_script() {
        println!("cargo::rerun-if-env-changed={name}");
    }
    parse_env_flag_value(std::env::var(name).ok().as_deref())
}

/// Whether we are running inside a cargo build script.
pub fn in_build_script() -> bool {
    *IN_BUILD_SCRIPT.get_or_init(|| {
        std::env::var_os("OUT_DIR").is_some()
            && std::env::var_os("CARGO_MANIFEST_DIR").is_some()
    })
}

pub fn build_debug() -> bool {
    *BUILD_DEBUG.get_or_init(|| env_flag("KERNELGEN_DEBUG"))
}

pub fn build_strict() -> bool {
    *BUILD_STRICT.get_or_init(|| env_flag("KERNELGEN_STRICT"))
}

pub fn build_force() -> bool {
    *BUILD_FORCE.get_or_init(|| env_flag("KERNELGEN_FORCE"))
}
