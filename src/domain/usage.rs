//! Usage statistics value objects

use serde::{Deserialize, Serialize};

/// What one successful minutes run adds to the usage counters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsageDelta {
    pub characters_processed: u64,
    pub audio_seconds_processed: f64,
    pub transcripts_generated: u64,
}

/// Accumulated usage counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageTotals {
    pub characters_processed: u64,
    pub audio_seconds_processed: f64,
    pub transcripts_generated: u64,
}

impl UsageTotals {
    /// Add a delta to the totals
    pub fn apply(&mut self, delta: &UsageDelta) {
        self.characters_processed = self
            .characters_processed
            .saturating_add(delta.characters_processed);
        self.audio_seconds_processed += delta.audio_seconds_processed.max(0.0);
        self.transcripts_generated = self
            .transcripts_generated
            .saturating_add(delta.transcripts_generated);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_accumulates() {
        let mut totals = UsageTotals::default();
        let delta = UsageDelta {
            characters_processed: 120,
            audio_seconds_processed: 30.5,
            transcripts_generated: 1,
        };
        totals.apply(&delta);
        totals.apply(&delta);

        assert_eq!(totals.characters_processed, 240);
        assert_eq!(totals.audio_seconds_processed, 61.0);
        assert_eq!(totals.transcripts_generated, 2);
    }

    #[test]
    fn negative_audio_seconds_are_ignored() {
        let mut totals = UsageTotals::default();
        totals.apply(&UsageDelta {
            characters_processed: 1,
            audio_seconds_processed: -5.0,
            transcripts_generated: 1,
        });
        assert_eq!(totals.audio_seconds_processed, 0.0);
    }

    #[test]
    fn missing_fields_parse_as_zero() {
        let totals: UsageTotals = serde_json::from_str(r#"{"transcripts_generated": 3}"#).unwrap();
        assert_eq!(totals.transcripts_generated, 3);
        assert_eq!(totals.characters_processed, 0);
    }
}
