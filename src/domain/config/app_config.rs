//! Application configuration value object

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::provider::ProviderId;

/// Completion token ceiling when none is configured
pub const DEFAULT_MAX_TOKENS: u32 = 2000;

/// HTTP request timeout when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Output format when none is configured
pub const DEFAULT_FORMAT: &str = "json";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub provider: Option<String>,
    pub transcription_model: Option<String>,
    pub generation_model: Option<String>,
    pub max_tokens: Option<u32>,
    pub timeout_secs: Option<u64>,
    pub format: Option<String>,
    /// API endpoint override
    pub base_url: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            provider: Some(ProviderId::default().to_string()),
            transcription_model: None,
            generation_model: None,
            max_tokens: Some(DEFAULT_MAX_TOKENS),
            timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
            format: Some(DEFAULT_FORMAT.to_string()),
            base_url: None,
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            provider: other.provider.or(self.provider),
            transcription_model: other.transcription_model.or(self.transcription_model),
            generation_model: other.generation_model.or(self.generation_model),
            max_tokens: other.max_tokens.or(self.max_tokens),
            timeout_secs: other.timeout_secs.or(self.timeout_secs),
            format: other.format.or(self.format),
            base_url: other.base_url.or(self.base_url),
        }
    }

    /// Get provider as parsed ProviderId, or default if not set/invalid
    pub fn provider_or_default(&self) -> ProviderId {
        self.provider
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get the completion token ceiling, or 2000 if not set/zero
    pub fn max_tokens_or_default(&self) -> u32 {
        self.max_tokens
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_MAX_TOKENS)
    }

    /// Get the request timeout, or 120s if not set/zero
    pub fn timeout_or_default(&self) -> Duration {
        Duration::from_secs(
            self.timeout_secs
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Get the output format name, or "json" if not set
    pub fn format_or_default(&self) -> &str {
        self.format.as_deref().unwrap_or(DEFAULT_FORMAT)
    }

    /// Get the API key if it is set and non-blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert!(config.api_key.is_none());
        assert_eq!(config.provider, Some("openai".to_string()));
        assert_eq!(config.max_tokens, Some(2000));
        assert_eq!(config.timeout_secs, Some(120));
        assert_eq!(config.format, Some("json".to_string()));
        assert!(config.transcription_model.is_none());
        assert!(config.generation_model.is_none());
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.api_key.is_none());
        assert!(config.provider.is_none());
        assert!(config.max_tokens.is_none());
        assert!(config.format.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            api_key: Some("base_key".to_string()),
            max_tokens: Some(1000),
            generation_model: Some("gpt-4o-mini".to_string()),
            ..Default::default()
        };

        let other = AppConfig {
            api_key: Some("other_key".to_string()),
            max_tokens: None, // Should not override
            generation_model: Some("gpt-4o".to_string()),
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.api_key, Some("other_key".to_string()));
        assert_eq!(merged.max_tokens, Some(1000)); // Kept from base
        assert_eq!(merged.generation_model, Some("gpt-4o".to_string()));
    }

    #[test]
    fn merge_preserves_base_when_other_is_none() {
        let base = AppConfig {
            api_key: Some("key".to_string()),
            format: Some("markdown".to_string()),
            ..Default::default()
        };

        let merged = base.merge(AppConfig::empty());

        assert_eq!(merged.api_key, Some("key".to_string()));
        assert_eq!(merged.format, Some("markdown".to_string()));
    }

    #[test]
    fn provider_or_default_parses() {
        let config = AppConfig {
            provider: Some("OpenAI".to_string()),
            ..Default::default()
        };
        assert_eq!(config.provider_or_default(), ProviderId::OpenAi);
    }

    #[test]
    fn provider_or_default_uses_default_on_invalid() {
        let config = AppConfig {
            provider: Some("invalid".to_string()),
            ..Default::default()
        };
        assert_eq!(config.provider_or_default(), ProviderId::OpenAi);
    }

    #[test]
    fn numeric_defaults_reject_zero() {
        let config = AppConfig {
            max_tokens: Some(0),
            timeout_secs: Some(0),
            ..Default::default()
        };
        assert_eq!(config.max_tokens_or_default(), 2000);
        assert_eq!(config.timeout_or_default(), Duration::from_secs(120));
    }

    #[test]
    fn numeric_values_are_used() {
        let config = AppConfig {
            max_tokens: Some(512),
            timeout_secs: Some(30),
            ..Default::default()
        };
        assert_eq!(config.max_tokens_or_default(), 512);
        assert_eq!(config.timeout_or_default(), Duration::from_secs(30));
    }

    #[test]
    fn blank_api_key_is_missing() {
        let config = AppConfig {
            api_key: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(config.api_key().is_none());

        let config = AppConfig {
            api_key: Some(" sk-test ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.api_key(), Some("sk-test"));
    }

    #[test]
    fn format_or_default() {
        assert_eq!(AppConfig::empty().format_or_default(), "json");
    }
}
