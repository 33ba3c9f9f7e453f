//! JSON file stats store

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{StatsError, StatsStore};
use crate::domain::usage::{UsageDelta, UsageTotals};

use crate::infrastructure::config::APP_DIR;

/// Usage counters stored at `<data_dir>/minutes-scribe/stats.json`
pub struct JsonStatsStore {
    path: PathBuf,
}

impl JsonStatsStore {
    /// Create a store at the default XDG data location
    pub fn new() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("~/.local/share"))
            .join(APP_DIR);

        Self {
            path: data_dir.join("stats.json"),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn write(&self, totals: &UsageTotals) -> Result<(), StatsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StatsError::WriteError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(totals)
            .map_err(|e| StatsError::WriteError(e.to_string()))?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| StatsError::WriteError(e.to_string()))
    }
}

impl Default for JsonStatsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StatsStore for JsonStatsStore {
    async fn load(&self) -> Result<UsageTotals, StatsError> {
        if !self.path.exists() {
            return Ok(UsageTotals::default());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| StatsError::ReadError(e.to_string()))?;

        serde_json::from_str(&content).map_err(|e| StatsError::ParseError(e.to_string()))
    }

    async fn record(&self, delta: &UsageDelta) -> Result<UsageTotals, StatsError> {
        let mut totals = self.load().await?;
        totals.apply(delta);
        self.write(&totals).await?;

        tracing::debug!(
            transcripts_generated = totals.transcripts_generated,
            characters_processed = totals.characters_processed,
            "usage recorded"
        );
        Ok(totals)
    }

    async fn reset(&self) -> Result<(), StatsError> {
        self.write(&UsageTotals::default()).await
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delta() -> UsageDelta {
        UsageDelta {
            characters_processed: 500,
            audio_seconds_processed: 61.5,
            transcripts_generated: 1,
        }
    }

    #[test]
    fn default_path_is_under_data_dir() {
        let path = JsonStatsStore::new().path().to_string_lossy().to_string();
        assert!(path.contains("minutes-scribe"));
        assert!(path.ends_with("stats.json"));
    }

    #[tokio::test]
    async fn missing_file_loads_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStatsStore::with_path(dir.path().join("stats.json"));
        assert_eq!(store.load().await.unwrap(), UsageTotals::default());
    }

    #[tokio::test]
    async fn record_accumulates_across_calls() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStatsStore::with_path(dir.path().join("data").join("stats.json"));

        store.record(&delta()).await.unwrap();
        let totals = store.record(&delta()).await.unwrap();

        assert_eq!(totals.characters_processed, 1000);
        assert_eq!(totals.audio_seconds_processed, 123.0);
        assert_eq!(totals.transcripts_generated, 2);
        assert_eq!(store.load().await.unwrap(), totals);
    }

    #[tokio::test]
    async fn reset_zeroes_counters() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStatsStore::with_path(dir.path().join("stats.json"));

        store.record(&delta()).await.unwrap();
        store.reset().await.unwrap();
        assert_eq!(store.load().await.unwrap(), UsageTotals::default());
    }

    #[tokio::test]
    async fn corrupt_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = JsonStatsStore::with_path(path);
        assert!(matches!(store.load().await, Err(StatsError::ParseError(_))));
    }
}
