//! ffprobe duration probe
//!
//! Stages the upload in a temp file and asks ffprobe for the container
//! duration. Any failure reports 0.0 so minutes generation is never blocked.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::DurationProbe;

const FFPROBE: &str = "ffprobe";

/// Duration probe backed by the ffprobe binary
pub struct FfprobeDurationProbe {
    binary: String,
    temp_dir: PathBuf,
}

impl FfprobeDurationProbe {
    /// Create a probe that runs `ffprobe` from PATH
    pub fn new() -> Self {
        Self {
            binary: FFPROBE.to_string(),
            temp_dir: std::env::temp_dir(),
        }
    }

    /// Use a different ffprobe binary
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Stage uploads in a different directory
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = dir.into();
        self
    }

    fn build_args(path: &Path) -> Vec<String> {
        vec![
            "-v".to_string(),
            "error".to_string(),
            "-show_entries".to_string(),
            "format=duration".to_string(),
            "-of".to_string(),
            "csv=p=0".to_string(),
            path.to_string_lossy().to_string(),
        ]
    }

    async fn run(&self, file_content: &[u8], filename: &str) -> Result<f64, String> {
        let suffix = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e))
            .unwrap_or_default();

        let mut staged = tempfile::Builder::new()
            .prefix("minutes-scribe-probe-")
            .suffix(&suffix)
            .tempfile_in(&self.temp_dir)
            .map_err(|e| e.to_string())?;
        staged
            .write_all(file_content)
            .and_then(|_| staged.flush())
            .map_err(|e| e.to_string())?;

        let output = Command::new(&self.binary)
            .args(Self::build_args(staged.path()))
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| e.to_string())?;

        if !output.status.success() {
            return Err(String::from_utf8_lossy(&output.stderr).trim().to_string());
        }

        parse_duration(&String::from_utf8_lossy(&output.stdout))
            .ok_or_else(|| "ffprobe printed no duration".to_string())
    }
}

impl Default for FfprobeDurationProbe {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse ffprobe's `csv=p=0` output into non-negative seconds
fn parse_duration(stdout: &str) -> Option<f64> {
    stdout
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|secs| secs.is_finite() && *secs >= 0.0)
}

#[async_trait]
impl DurationProbe for FfprobeDurationProbe {
    async fn probe_seconds(&self, file_content: &[u8], filename: &str) -> f64 {
        match self.run(file_content, filename).await {
            Ok(secs) => secs,
            Err(e) => {
                tracing::warn!(error = %e, filename, "could not determine audio duration");
                0.0
            }
        }
    }
}

/// Check if ffprobe is on PATH using `which`
pub async fn is_ffprobe_available() -> bool {
    Command::new("which")
        .arg(FFPROBE)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map(|s| s.success())
        .unwrap_or(false)
}
