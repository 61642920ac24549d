mod generate;
mod inspect;

pub use generate::{GenerateOptions, handle_generate};
pub use inspect::{InspectReport, handle_inspect, inspect};
