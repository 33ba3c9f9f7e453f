//! Transcript value object

use std::fmt;

use crate::domain::error::EmptyInputError;

/// Plain-text transcript of a meeting.
///
/// Can only be constructed from text that is non-blank after trimming, so any
/// holder of a `Transcript` may hand it to minutes generation directly. The text
/// itself is kept verbatim, surrounding whitespace included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    text: String,
}

impl Transcript {
    /// Create a transcript, rejecting empty or whitespace-only text
    pub fn new(text: impl Into<String>) -> Result<Self, EmptyInputError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(EmptyInputError);
        }
        Ok(Self { text })
    }

    /// Get the transcript text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume and return the transcript text
    pub fn into_string(self) -> String {
        self.text
    }

    /// Number of characters (Unicode scalar values), not bytes
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Transcript {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
