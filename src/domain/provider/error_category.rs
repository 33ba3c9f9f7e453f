//! Classification of provider failures into user-facing categories

use std::fmt;

/// User-facing category of a provider failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Authentication,
    RateLimit,
    Quota,
    Connectivity,
    Unknown,
}

/// Ordered cascade of (category, lowercase markers). First match wins.
const CASCADE: &[(ErrorCategory, &[&str])] = &[
    (
        ErrorCategory::Authentication,
        &["401", "invalid_api_key", "authentication"],
    ),
    (ErrorCategory::RateLimit, &["429", "rate_limit"]),
    (ErrorCategory::Quota, &["quota", "insufficient"]),
    (ErrorCategory::Connectivity, &["connection", "timeout"]),
];

impl ErrorCategory {
    /// Classify an error by its text.
    ///
    /// Matching is a case-insensitive substring search run as a strict ordered
    /// cascade: Authentication, RateLimit, Quota, Connectivity, then Unknown.
    pub fn classify(error_text: &str) -> Self {
        let haystack = error_text.to_lowercase();
        CASCADE
            .iter()
            .find(|(_, markers)| markers.iter().any(|m| haystack.contains(m)))
            .map(|(category, _)| *category)
            .unwrap_or(Self::Unknown)
    }

    /// The fixed message shown to the user for this category
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Authentication => {
                "Invalid API key. Please check your API key in Profile settings."
            }
            Self::RateLimit => "API rate limit exceeded. Please wait a moment and try again.",
            Self::Quota => "API quota exceeded. Please check your billing settings.",
            Self::Connectivity => "Connection error. Please check your internet and try again.",
            Self::Unknown => "An unexpected error occurred. Please try again.",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Authentication => "authentication",
            Self::RateLimit => "rate_limit",
            Self::Quota => "quota",
            Self::Connectivity => "connectivity",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Classify any displayable error
pub fn classify_error(error: &dyn fmt::Display) -> ErrorCategory {
    ErrorCategory::classify(&error.to_string())
}

/// Default error formatting shared by every provider.
///
/// Returns the category's fixed message, so raw vendor text never reaches
/// the user.
pub fn default_error_message(error: &dyn fmt::Display) -> String {
    classify_error(error).message().to_string()
}
