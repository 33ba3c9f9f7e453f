//! AI provider identifiers

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidProviderError;

/// All available providers
pub const ALL_PROVIDERS: &[ProviderId] = &[ProviderId::OpenAi];

/// Identifier selecting a concrete provider implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProviderId {
    #[default]
    OpenAi,
}

impl ProviderId {
    /// Get the human-readable label for this provider
    pub const fn label(&self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI",
        }
    }

    /// Get the string identifier for this provider
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
        }
    }
}

impl FromStr for ProviderId {
    type Err = InvalidProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            _ => Err(InvalidProviderError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
