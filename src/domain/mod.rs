//! Domain layer - Core business logic
//!
//! Contains value objects, the minutes schema, error classification,
//! and domain errors. This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod minutes;
pub mod provider;
pub mod transcript;
pub mod usage;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use minutes::{ActionItem, DiscussionPoint, MinutesDocument};
pub use provider::{ErrorCategory, ProviderId};
pub use transcript::{AudioFormat, InputKind, Transcript};
pub use usage::{UsageDelta, UsageTotals};
