//! AI provider port interface

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::config::{DEFAULT_MAX_TOKENS, DEFAULT_TIMEOUT_SECS};
use crate::domain::minutes::MinutesDocument;
use crate::domain::provider::{default_error_message, ProviderId};
use crate::domain::transcript::Transcript;

/// Errors raised by provider calls
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("Transcription failed: {0}")]
    Transcription(String),

    #[error("Transcription returned no text")]
    EmptyTranscription,

    #[error("Minutes generation failed: {0}")]
    Generation(String),

    #[error("Provider returned an invalid response: {0}")]
    Schema(String),

    #[error("Failed to stage audio for upload: {0}")]
    Storage(String),
}

/// Shown when the vendor's answer could not be read as minutes
pub const INVALID_RESPONSE_MESSAGE: &str =
    "The AI provider returned an invalid response. Please try again.";

/// Shared error formatting for providers.
///
/// Unreadable responses get their own message; everything else goes through
/// the category cascade.
pub fn format_provider_error(error: &ProviderError) -> String {
    match error {
        ProviderError::Schema(_) => INVALID_RESPONSE_MESSAGE.to_string(),
        other => default_error_message(other),
    }
}

/// Errors raised while constructing a provider
#[derive(Debug, Clone, Error)]
pub enum ProviderSetupError {
    #[error("Missing API key for provider '{0}'")]
    MissingApiKey(ProviderId),

    #[error("Failed to initialise HTTP client: {0}")]
    Client(String),
}

/// Everything needed to construct one provider instance.
///
/// Built per invocation from already-decrypted credentials.
#[derive(Clone)]
pub struct ProviderConfig {
    pub provider: ProviderId,
    pub api_key: String,
    /// Overrides the provider's default transcription model
    pub transcription_model: Option<String>,
    /// Overrides the provider's default generation model
    pub generation_model: Option<String>,
    /// Ceiling on generated tokens per minutes request
    pub max_tokens: u32,
    /// Per-request HTTP timeout
    pub timeout: Duration,
    /// Overrides the provider's API base URL
    pub base_url: Option<String>,
}

impl ProviderConfig {
    /// Create a config with default models and limits
    pub fn new(provider: ProviderId, api_key: impl Into<String>) -> Self {
        Self {
            provider,
            api_key: api_key.into(),
            transcription_model: None,
            generation_model: None,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            base_url: None,
        }
    }

    /// Point the provider at a different API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("provider", &self.provider)
            .field("api_key", &"<redacted>")
            .field("transcription_model", &self.transcription_model)
            .field("generation_model", &self.generation_model)
            .field("max_tokens", &self.max_tokens)
            .field("timeout", &self.timeout)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Port for a vendor that can transcribe audio and write minutes
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Which provider this is
    fn id(&self) -> ProviderId;

    /// Transcribe audio to text.
    ///
    /// # Arguments
    /// * `file_content` - Raw bytes of the uploaded audio
    /// * `filename` - Original filename; only its extension is used
    ///
    /// # Returns
    /// The transcript text, or `EmptyTranscription` if the vendor produced none
    async fn transcribe_audio(
        &self,
        file_content: &[u8],
        filename: &str,
    ) -> Result<String, ProviderError>;

    /// Generate structured minutes from a transcript.
    async fn generate_minutes(
        &self,
        transcript: &Transcript,
    ) -> Result<MinutesDocument, ProviderError>;

    /// Turn an error into a fixed user-facing message.
    ///
    /// Implementations usually delegate to [`format_provider_error`].
    fn format_error(&self, error: &ProviderError) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_api_key() {
        let config = ProviderConfig::new(ProviderId::OpenAi, "sk-very-secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk-very-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn new_uses_defaults() {
        let config = ProviderConfig::new(ProviderId::OpenAi, "key");
        assert_eq!(config.max_tokens, 2000);
        assert_eq!(config.timeout, Duration::from_secs(120));
        assert!(config.base_url.is_none());
    }

    #[test]
    fn schema_errors_get_invalid_response_message() {
        let message = format_provider_error(&ProviderError::Schema(
            "expected value at line 1 column 1".into(),
        ));
        assert_eq!(message, INVALID_RESPONSE_MESSAGE);
    }

    #[test]
    fn other_errors_use_the_cascade() {
        let message = format_provider_error(&ProviderError::Generation(
            "HTTP 429 Too Many Requests".into(),
        ));
        assert_eq!(
            message,
            "API rate limit exceeded. Please wait a moment and try again."
        );
        let message = format_provider_error(&ProviderError::EmptyTranscription);
        assert_eq!(message, "An unexpected error occurred. Please try again.");
    }

    #[test]
    fn error_messages_name_the_stage() {
        assert!(ProviderError::Transcription("x".into())
            .to_string()
            .starts_with("Transcription failed"));
        assert!(ProviderError::Generation("x".into())
            .to_string()
            .starts_with("Minutes generation failed"));
        assert!(ProviderError::Schema("x".into())
            .to_string()
            .contains("invalid response"));
    }
}
