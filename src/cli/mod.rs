//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, and the main
//! application runner.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;
pub mod stats_cmd;

// Re-export commonly used types
pub use app::{run_minutes, RunOptions, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, OutputFormat};
pub use presenter::Presenter;
