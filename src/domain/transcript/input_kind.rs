//! Upload classification: which ingestion path a file takes

use std::fmt;
use std::path::Path;

use crate::domain::error::UnsupportedInputError;

/// Audio formats accepted for transcription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioFormat {
    Mp3,
    Wav,
    M4a,
    Ogg,
    Webm,
}

impl AudioFormat {
    /// Get the MIME type string
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::Wav => "audio/wav",
            Self::M4a => "audio/mp4",
            Self::Ogg => "audio/ogg",
            Self::Webm => "audio/webm",
        }
    }

    /// Get the file extension
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Wav => "wav",
            Self::M4a => "m4a",
            Self::Ogg => "ogg",
            Self::Webm => "webm",
        }
    }

    /// Look up a format by file extension (without the dot, any case)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "mp3" => Some(Self::Mp3),
            "wav" => Some(Self::Wav),
            "m4a" => Some(Self::M4a),
            "ogg" => Some(Self::Ogg),
            "webm" => Some(Self::Webm),
            _ => None,
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mime_type())
    }
}

/// Ingestion path chosen for an upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// UTF-8 text, sent straight to minutes generation
    Text,
    /// Audio, transcribed first
    Audio(AudioFormat),
}

impl InputKind {
    /// Classify an upload from its filename and/or declared content type.
    ///
    /// The filename extension is checked first, then the content type (MIME
    /// parameters such as `; charset=utf-8` are ignored). Matching is
    /// case-insensitive. Anything outside the table is rejected.
    pub fn detect(
        filename: Option<&str>,
        content_type: Option<&str>,
    ) -> Result<Self, UnsupportedInputError> {
        if let Some(kind) = filename.and_then(Self::from_filename) {
            return Ok(kind);
        }

        if let Some(kind) = content_type.and_then(Self::from_content_type) {
            return Ok(kind);
        }

        Err(UnsupportedInputError {
            filename: filename.map(str::to_string),
            content_type: content_type.map(str::to_string),
        })
    }

    fn from_filename(filename: &str) -> Option<Self> {
        let ext = Path::new(filename).extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("txt") {
            return Some(Self::Text);
        }
        AudioFormat::from_extension(ext).map(Self::Audio)
    }

    fn from_content_type(content_type: &str) -> Option<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "text/plain" => Some(Self::Text),
            "audio/mpeg" => Some(Self::Audio(AudioFormat::Mp3)),
            _ => None,
        }
    }

    /// Whether this upload goes through transcription
    pub fn is_audio(&self) -> bool {
        matches!(self, Self::Audio(_))
    }
}
