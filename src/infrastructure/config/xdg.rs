//! XDG config store adapter

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Directory name under the user's config and data dirs
pub const APP_DIR: &str = "minutes-scribe";

/// Config file stored at `<config_dir>/minutes-scribe/config.toml`
pub struct XdgConfigStore {
    path: PathBuf,
}

impl XdgConfigStore {
    /// Create a store at the default XDG location
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join(APP_DIR);

        Self {
            path: config_dir.join("config.toml"),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parse_toml(content: &str) -> Result<AppConfig, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    fn to_toml(config: &AppConfig) -> Result<String, ConfigError> {
        toml::to_string_pretty(config).map_err(|e| ConfigError::WriteError(e.to_string()))
    }
}

impl Default for XdgConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for XdgConfigStore {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.exists() {
            return Ok(AppConfig::empty());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        Self::parse_toml(&content)
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        let content = Self::to_toml(config)?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;

        tracing::debug!(path = %self.path.display(), "config saved");
        Ok(())
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    async fn init(&self) -> Result<(), ConfigError> {
        if self.exists() {
            return Err(ConfigError::AlreadyExists(
                self.path.to_string_lossy().to_string(),
            ));
        }

        self.save(&AppConfig::defaults()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_is_xdg() {
        let store = XdgConfigStore::new();
        let path = store.path().to_string_lossy().to_string();
        assert!(path.contains("minutes-scribe"));
        assert!(path.ends_with("config.toml"));
    }

    #[test]
    fn parse_toml_reads_known_keys() {
        let content = r#"
api_key = "sk-test"
provider = "openai"
generation_model = "gpt-4o"
max_tokens = 1500
timeout_secs = 30
format = "markdown"
"#;

        let config = XdgConfigStore::parse_toml(content).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.generation_model.as_deref(), Some("gpt-4o"));
        assert_eq!(config.max_tokens, Some(1500));
        assert_eq!(config.timeout_secs, Some(30));
        assert_eq!(config.format.as_deref(), Some("markdown"));
    }

    #[test]
    fn parse_toml_rejects_wrong_types() {
        let err = XdgConfigStore::parse_toml("max_tokens = \"lots\"").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        let config = store.load().await.unwrap();
        assert!(config.api_key.is_none());
        assert!(config.provider.is_none());
    }

    #[tokio::test]
    async fn init_writes_defaults_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("nested").join("config.toml"));

        store.init().await.unwrap();
        let config = store.load().await.unwrap();
        assert_eq!(config.provider.as_deref(), Some("openai"));
        assert_eq!(config.max_tokens, Some(2000));

        assert!(matches!(
            store.init().await,
            Err(ConfigError::AlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn save_then_load_keeps_values() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        let config = AppConfig {
            api_key: Some("sk-test".to_string()),
            timeout_secs: Some(45),
            ..Default::default()
        };

        store.save(&config).await.unwrap();
        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.api_key, config.api_key);
        assert_eq!(loaded.timeout_secs, Some(45));
        assert!(loaded.format.is_none());
    }
}
