/// CLI layer: argument parsing, runtime context, and output formatting.
pub mod args;
pub mod context;
pub mod output;

pub use args::Cli;
pub use context::RunContext;
pub use output::{write_commands, write_error};
