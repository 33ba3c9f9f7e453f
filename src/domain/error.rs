//! Domain error types

use thiserror::Error;

/// Error when an unknown AI provider name is configured
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported provider: \"{input}\". Valid providers are: openai")]
pub struct InvalidProviderError {
    pub input: String,
}

/// Error when an upload matches neither the text nor the audio table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported file type")]
pub struct UnsupportedInputError {
    pub filename: Option<String>,
    pub content_type: Option<String>,
}

/// Error when a transcript is blank after trimming whitespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Transcript is empty")]
pub struct EmptyInputError;

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
