//! CLI support for the `ssp` binary.

pub mod args;
pub mod commands;
pub mod context;
pub mod output;
pub mod tracing_setup;

pub use context::CommandContext;
