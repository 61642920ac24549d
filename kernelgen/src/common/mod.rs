pub mod caching;
pub mod codegen;
pub mod envs;
pub mod logging;
