mod error;
mod integration_test;
pub mod vars;

pub use crate::error::DemoError;

// Build-time identity, attached to the run span
pub const PROGRAM_NAME: &str = "learn_go";
pub const PROGRAM_VERSION: &str = env!("CARGO_PKG_VERSION");
