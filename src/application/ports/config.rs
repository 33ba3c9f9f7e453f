//! Configuration port interface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for the persisted settings file.
///
/// Holds the API key, provider choice, model overrides and output defaults.
/// Environment variables and CLI flags are merged on top by the caller.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load the stored settings. A missing file yields an all-`None` config.
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Persist settings, creating parent directories as needed
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Location of the settings file
    fn path(&self) -> PathBuf;

    /// Whether the settings file exists
    fn exists(&self) -> bool;

    /// Write [`AppConfig::defaults`]. Fails with `AlreadyExists` if a file is present.
    async fn init(&self) -> Result<(), ConfigError>;
}
