//! Audio duration probe port interface

use async_trait::async_trait;

/// Port for measuring how long an audio upload plays.
///
/// Probing is best-effort: implementations return `0.0` whenever the
/// duration cannot be determined and never fail.
#[async_trait]
pub trait DurationProbe: Send + Sync {
    /// Duration of the audio in seconds, or `0.0` if unknown
    async fn probe_seconds(&self, file_content: &[u8], filename: &str) -> f64;
}
