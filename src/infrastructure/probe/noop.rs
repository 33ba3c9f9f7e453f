//! No-op duration probe
//!
//! Used when ffprobe is not installed.

use async_trait::async_trait;

use crate::application::ports::DurationProbe;

/// Duration probe that always reports an unknown duration
pub struct NoOpDurationProbe;

impl NoOpDurationProbe {
    /// Create a new no-op probe
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpDurationProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DurationProbe for NoOpDurationProbe {
    async fn probe_seconds(&self, _file_content: &[u8], _filename: &str) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn noop_reports_zero() {
        let probe = NoOpDurationProbe::new();
        assert_eq!(probe.probe_seconds(b"ID3", "call.mp3").await, 0.0);
    }
}
