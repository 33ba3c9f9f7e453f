//! Generate minutes use case
//!
//! The single entry point callers use to turn an upload into minutes. It hides
//! whether the source was text or audio and converts every provider failure
//! into a [`ResultEnvelope::Failure`].

use crate::domain::minutes::MinutesDocument;
use crate::domain::transcript::{InputKind, Transcript};
use crate::domain::usage::UsageDelta;

use super::ports::{AiProvider, DurationProbe, ProviderError};

/// Returned when a text upload is blank
pub const EMPTY_FILE_MESSAGE: &str = "File is empty";

/// Returned when a text upload is not UTF-8
pub const INVALID_UTF8_MESSAGE: &str = "File is not valid UTF-8 text";

/// Returned when plain text input is blank
pub const EMPTY_TRANSCRIPT_MESSAGE: &str = "Transcript is empty";

/// Returned when transcription produced nothing usable
pub const EMPTY_TRANSCRIPTION_MESSAGE: &str = "Transcription resulted in empty text";

/// A successful minutes run
#[derive(Debug, Clone, PartialEq)]
pub struct MinutesReport {
    pub minutes: MinutesDocument,
    pub transcript: String,
    /// Character count of the transcript
    pub transcript_length: usize,
    /// Seconds of audio, present only for audio uploads (0.0 if unknown)
    pub audio_duration: Option<f64>,
}

/// Outcome of one request. Never carries a raw provider error.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultEnvelope {
    Success(MinutesReport),
    Failure { error: String },
}

impl ResultEnvelope {
    /// Build a failure with the given message
    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
        }
    }

    /// Whether the run produced minutes
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The failure message, if any
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure { error } => Some(error),
        }
    }

    /// Counter increments the caller should record after a success
    pub fn usage(&self) -> Option<UsageDelta> {
        match self {
            Self::Success(report) => Some(UsageDelta {
                characters_processed: report.transcript_length as u64,
                audio_seconds_processed: report.audio_duration.unwrap_or(0.0),
                transcripts_generated: 1,
            }),
            Self::Failure { .. } => None,
        }
    }
}

/// Pipeline step about to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ProbingDuration,
    Transcribing,
    GeneratingMinutes,
}

/// Callbacks for progress updates
#[derive(Default)]
#[allow(clippy::type_complexity)]
pub struct GeneratorCallbacks {
    /// Called before each pipeline step starts
    pub on_stage: Option<Box<dyn Fn(Stage) + Send + Sync>>,
}

/// Minutes generation façade over one provider
pub struct MinutesGenerator {
    provider: Box<dyn AiProvider>,
    duration_probe: Box<dyn DurationProbe>,
    callbacks: GeneratorCallbacks,
}

impl MinutesGenerator {
    /// Create a new generator for a provider instance
    pub fn new(provider: Box<dyn AiProvider>, duration_probe: Box<dyn DurationProbe>) -> Self {
        Self {
            provider,
            duration_probe,
            callbacks: GeneratorCallbacks::default(),
        }
    }

    /// Attach progress callbacks
    pub fn with_callbacks(mut self, callbacks: GeneratorCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// Route an already-classified upload to the matching handler
    pub async fn handle_upload(
        &self,
        kind: InputKind,
        file_content: &[u8],
        filename: &str,
    ) -> ResultEnvelope {
        match kind {
            InputKind::Text => self.handle_text_bytes(file_content).await,
            InputKind::Audio(_) => self.handle_audio(file_content, filename).await,
        }
    }

    /// Transcribe an audio upload, then generate minutes
    pub async fn handle_audio(&self, file_content: &[u8], filename: &str) -> ResultEnvelope {
        tracing::info!(
            provider = %self.provider.id(),
            bytes = file_content.len(),
            filename,
            "processing audio upload"
        );

        self.notify(Stage::ProbingDuration);
        let audio_duration = self
            .duration_probe
            .probe_seconds(file_content, filename)
            .await;
        tracing::debug!(audio_duration, "probed audio duration");

        self.notify(Stage::Transcribing);
        let text = match self.provider.transcribe_audio(file_content, filename).await {
            Ok(text) => text,
            Err(ProviderError::EmptyTranscription) => {
                tracing::warn!("transcription returned no text");
                return ResultEnvelope::failure(EMPTY_TRANSCRIPTION_MESSAGE);
            }
            Err(e) => return self.fail("audio transcription", e),
        };

        let Ok(transcript) = Transcript::new(text) else {
            tracing::warn!("transcription was blank");
            return ResultEnvelope::failure(EMPTY_TRANSCRIPTION_MESSAGE);
        };

        self.summarize(transcript, Some(audio_duration)).await
    }

    /// Decode a text upload, then generate minutes
    pub async fn handle_text_bytes(&self, file_content: &[u8]) -> ResultEnvelope {
        tracing::info!(
            provider = %self.provider.id(),
            bytes = file_content.len(),
            "processing text upload"
        );

        let text = match std::str::from_utf8(file_content) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "text upload is not UTF-8");
                return ResultEnvelope::failure(INVALID_UTF8_MESSAGE);
            }
        };

        match Transcript::new(text) {
            Ok(transcript) => self.summarize(transcript, None).await,
            Err(_) => ResultEnvelope::failure(EMPTY_FILE_MESSAGE),
        }
    }

    /// Generate minutes from transcript text
    pub async fn handle_text(&self, transcript: &str) -> ResultEnvelope {
        tracing::info!(
            provider = %self.provider.id(),
            chars = transcript.chars().count(),
            "processing text input"
        );

        match Transcript::new(transcript) {
            Ok(transcript) => self.summarize(transcript, None).await,
            Err(_) => ResultEnvelope::failure(EMPTY_TRANSCRIPT_MESSAGE),
        }
    }

    async fn summarize(&self, transcript: Transcript, audio_duration: Option<f64>) -> ResultEnvelope {
        self.notify(Stage::GeneratingMinutes);

        let minutes = match self.provider.generate_minutes(&transcript).await {
            Ok(minutes) => minutes,
            Err(e) => return self.fail("minutes generation", e),
        };

        let transcript_length = transcript.char_count();
        tracing::info!(
            transcript_length,
            decisions = minutes.decisions.len(),
            action_items = minutes.action_items.len(),
            "minutes generated"
        );

        ResultEnvelope::Success(MinutesReport {
            minutes,
            transcript: transcript.into_string(),
            transcript_length,
            audio_duration,
        })
    }

    fn fail(&self, step: &str, error: ProviderError) -> ResultEnvelope {
        tracing::error!(step, error = %error, "provider call failed");
        ResultEnvelope::failure(self.provider.format_error(&error))
    }

    fn notify(&self, stage: Stage) {
        if let Some(ref cb) = self.callbacks.on_stage {
            cb(stage);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{format_provider_error, INVALID_RESPONSE_MESSAGE};
    use crate::domain::minutes::ActionItem;
    use crate::domain::provider::ProviderId;
    use crate::domain::transcript::AudioFormat;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Calls {
        transcribe: AtomicUsize,
        generate: AtomicUsize,
        last_transcript: Mutex<Option<String>>,
    }

    // Mock provider returning canned results
    struct MockProvider {
        transcription: Result<String, ProviderError>,
        minutes: Result<MinutesDocument, ProviderError>,
        calls: Arc<Calls>,
    }

    impl MockProvider {
        fn new(calls: Arc<Calls>) -> Self {
            Self {
                transcription: Ok("Alice: we ship Friday.".to_string()),
                minutes: Ok(MinutesDocument::default()),
                calls,
            }
        }
    }

    #[async_trait]
    impl AiProvider for MockProvider {
        fn id(&self) -> ProviderId {
            ProviderId::OpenAi
        }

        async fn transcribe_audio(
            &self,
            _file_content: &[u8],
            _filename: &str,
        ) -> Result<String, ProviderError> {
            self.calls.transcribe.fetch_add(1, Ordering::SeqCst);
            self.transcription.clone()
        }

        async fn generate_minutes(
            &self,
            transcript: &Transcript,
        ) -> Result<MinutesDocument, ProviderError> {
            self.calls.generate.fetch_add(1, Ordering::SeqCst);
            *self.calls.last_transcript.lock().unwrap() = Some(transcript.to_string());
            self.minutes.clone()
        }

        fn format_error(&self, error: &ProviderError) -> String {
            format_provider_error(error)
        }
    }

    struct FixedProbe(f64);

    #[async_trait]
    impl DurationProbe for FixedProbe {
        async fn probe_seconds(&self, _file_content: &[u8], _filename: &str) -> f64 {
            self.0
        }
    }

    fn generator(provider: MockProvider) -> MinutesGenerator {
        MinutesGenerator::new(Box::new(provider), Box::new(FixedProbe(0.0)))
    }

    #[tokio::test]
    async fn handle_text_returns_transcript_verbatim() {
        let calls = Arc::new(Calls::default());
        let gen = generator(MockProvider::new(calls.clone()));

        for text in ["hello", "  padded  ", "naïve café ☕", "line one\nline two"] {
            let envelope = gen.handle_text(text).await;
            let ResultEnvelope::Success(report) = envelope else {
                panic!("expected success for {text:?}");
            };
            assert_eq!(report.transcript, text);
            assert_eq!(report.transcript_length, text.chars().count());
            assert_eq!(report.audio_duration, None);
        }
        assert_eq!(calls.generate.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn blank_inputs_never_reach_the_provider() {
        let calls = Arc::new(Calls::default());
        let mut provider = MockProvider::new(calls.clone());
        provider.transcription = Ok("   \n".to_string());
        let gen = generator(provider);

        for blank in ["", "   "] {
            assert_eq!(
                gen.handle_text(blank).await,
                ResultEnvelope::failure(EMPTY_TRANSCRIPT_MESSAGE)
            );
            assert_eq!(
                gen.handle_text_bytes(blank.as_bytes()).await,
                ResultEnvelope::failure(EMPTY_FILE_MESSAGE)
            );
        }
        assert_eq!(
            gen.handle_audio(b"RIFF", "call.wav").await,
            ResultEnvelope::failure(EMPTY_TRANSCRIPTION_MESSAGE)
        );

        assert_eq!(calls.generate.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn empty_transcription_error_is_reported_as_empty_text() {
        let calls = Arc::new(Calls::default());
        let mut provider = MockProvider::new(calls.clone());
        provider.transcription = Err(ProviderError::EmptyTranscription);
        let gen = generator(provider);

        assert_eq!(
            gen.handle_audio(b"ID3", "call.mp3").await,
            ResultEnvelope::failure(EMPTY_TRANSCRIPTION_MESSAGE)
        );
        assert_eq!(calls.generate.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn decision_and_owner_pass_through() {
        let calls = Arc::new(Calls::default());
        let mut provider = MockProvider::new(calls.clone());
        provider.minutes = Ok(MinutesDocument {
            decisions: vec!["We decided to ship on Friday.".to_string()],
            action_items: vec![ActionItem {
                task: "Write the release notes".to_string(),
                owner: "Alice".to_string(),
                due_date: None,
            }],
            ..Default::default()
        });
        let gen = generator(provider);

        let input = "We decided to ship on Friday. Alice will write the release notes.";
        let ResultEnvelope::Success(report) = gen.handle_text(input).await else {
            panic!("expected success");
        };
        assert_eq!(report.minutes.decisions, vec!["We decided to ship on Friday."]);
        assert_eq!(report.minutes.action_items.len(), 1);
        assert_eq!(report.minutes.action_items[0].owner, "Alice");
        assert_eq!(
            calls.last_transcript.lock().unwrap().as_deref(),
            Some(input)
        );
    }

    #[tokio::test]
    async fn transcription_connection_error_is_classified() {
        let calls = Arc::new(Calls::default());
        let mut provider = MockProvider::new(calls.clone());
        provider.transcription = Err(ProviderError::Transcription(
            "error sending request: connection refused".to_string(),
        ));
        let gen = generator(provider);

        assert_eq!(
            gen.handle_audio(b"OggS", "standup.ogg").await,
            ResultEnvelope::failure("Connection error. Please check your internet and try again.")
        );
        assert_eq!(calls.generate.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unreadable_minutes_fail_without_partial_document() {
        let calls = Arc::new(Calls::default());
        let mut provider = MockProvider::new(calls.clone());
        provider.minutes = Err(ProviderError::Schema(
            "expected value at line 1 column 1".to_string(),
        ));
        let gen = generator(provider);

        let envelope = gen.handle_text("real content").await;
        assert_eq!(envelope, ResultEnvelope::failure(INVALID_RESPONSE_MESSAGE));
        assert!(envelope.usage().is_none());
    }

    #[tokio::test]
    async fn generation_auth_error_is_classified() {
        let calls = Arc::new(Calls::default());
        let mut provider = MockProvider::new(calls);
        provider.minutes = Err(ProviderError::Generation(
            "HTTP 401 Unauthorized: Incorrect API key provided (invalid_api_key)".to_string(),
        ));
        let gen = generator(provider);

        assert_eq!(
            gen.handle_text("content").await.error(),
            Some("Invalid API key. Please check your API key in Profile settings.")
        );
    }

    #[tokio::test]
    async fn audio_success_carries_duration_and_usage() {
        let calls = Arc::new(Calls::default());
        let gen = MinutesGenerator::new(
            Box::new(MockProvider::new(calls.clone())),
            Box::new(FixedProbe(42.5)),
        );

        let envelope = gen.handle_audio(b"ID3", "call.mp3").await;
        let ResultEnvelope::Success(ref report) = envelope else {
            panic!("expected success");
        };
        assert_eq!(report.audio_duration, Some(42.5));
        assert_eq!(report.transcript, "Alice: we ship Friday.");

        let usage = envelope.usage().unwrap();
        assert_eq!(usage.characters_processed, 22);
        assert_eq!(usage.audio_seconds_processed, 42.5);
        assert_eq!(usage.transcripts_generated, 1);
        assert_eq!(calls.transcribe.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn invalid_utf8_is_rejected_locally() {
        let calls = Arc::new(Calls::default());
        let gen = generator(MockProvider::new(calls.clone()));

        assert_eq!(
            gen.handle_text_bytes(&[0xff, 0xfe, 0x00]).await,
            ResultEnvelope::failure(INVALID_UTF8_MESSAGE)
        );
        assert_eq!(calls.generate.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn handle_upload_routes_by_kind() {
        let calls = Arc::new(Calls::default());
        let gen = generator(MockProvider::new(calls.clone()));

        let text = gen.handle_upload(InputKind::Text, b"notes", "notes.txt").await;
        assert!(text.is_success());
        assert_eq!(calls.transcribe.load(Ordering::SeqCst), 0);

        let audio = gen
            .handle_upload(InputKind::Audio(AudioFormat::Wav), b"RIFF", "call.wav")
            .await;
        assert!(audio.is_success());
        assert_eq!(calls.transcribe.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn stages_are_reported_in_order() {
        let calls = Arc::new(Calls::default());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let gen = generator(MockProvider::new(calls)).with_callbacks(GeneratorCallbacks {
            on_stage: Some(Box::new(move |stage: Stage| sink.lock().unwrap().push(stage))),
        });

        gen.handle_audio(b"ID3", "call.mp3").await;

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                Stage::ProbingDuration,
                Stage::Transcribing,
                Stage::GeneratingMinutes
            ]
        );
    }
}
