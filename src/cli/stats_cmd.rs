//! Stats command handler

use crate::application::ports::{StatsError, StatsStore};

use super::presenter::{format_audio_seconds, Presenter};

/// Handle stats subcommand
pub async fn handle_stats_command<S: StatsStore>(
    reset: bool,
    store: &S,
    presenter: &Presenter,
) -> Result<(), StatsError> {
    if reset {
        store.reset().await?;
        presenter.success("Usage statistics reset");
        return Ok(());
    }

    let totals = store.load().await?;
    presenter.key_value("transcripts_generated", &totals.transcripts_generated.to_string());
    presenter.key_value("characters_processed", &totals.characters_processed.to_string());
    presenter.key_value(
        "audio_processed",
        &format_audio_seconds(totals.audio_seconds_processed),
    );

    Ok(())
}
