//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like the OpenAI API, ffprobe and
//! the XDG config and data directories.

pub mod config;
pub mod probe;
pub mod provider;
pub mod stats;

// Re-export adapters
pub use config::XdgConfigStore;
pub use probe::{create_duration_probe, FfprobeDurationProbe, NoOpDurationProbe};
pub use provider::{create_provider, OpenAiProvider};
pub use stats::JsonStatsStore;
