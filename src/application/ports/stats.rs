//! Usage statistics port interface

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::usage::{UsageDelta, UsageTotals};

/// Statistics storage errors
#[derive(Debug, Clone, Error)]
pub enum StatsError {
    #[error("Failed to read stats file: {0}")]
    ReadError(String),

    #[error("Failed to parse stats file: {0}")]
    ParseError(String),

    #[error("Failed to write stats file: {0}")]
    WriteError(String),
}

/// Port for persisting usage counters
#[async_trait]
pub trait StatsStore: Send + Sync {
    /// Load the current totals (all zero if nothing was recorded yet)
    async fn load(&self) -> Result<UsageTotals, StatsError>;

    /// Add a delta and persist the new totals.
    ///
    /// # Returns
    /// The totals after applying the delta
    async fn record(&self, delta: &UsageDelta) -> Result<UsageTotals, StatsError>;

    /// Reset all counters to zero
    async fn reset(&self) -> Result<(), StatsError>;

    /// Get the storage file path
    fn path(&self) -> PathBuf;
}
