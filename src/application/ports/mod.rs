//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod duration_probe;
pub mod provider;
pub mod stats;

// Re-export common types
pub use config::ConfigStore;
pub use duration_probe::DurationProbe;
pub use provider::{
    format_provider_error, AiProvider, ProviderConfig, ProviderError, ProviderSetupError,
    INVALID_RESPONSE_MESSAGE,
};
pub use stats::{StatsError, StatsStore};
