//! OpenAI provider adapter
//!
//! Transcribes audio with the audio transcriptions endpoint and writes
//! minutes with the chat completions endpoint in JSON mode.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::application::ports::{
    format_provider_error, AiProvider, ProviderConfig, ProviderError, ProviderSetupError,
};
use crate::domain::minutes::{MinutesDocument, MinutesPrompt};
use crate::domain::provider::ProviderId;
use crate::domain::transcript::{AudioFormat, Transcript};

/// OpenAI API base URL
pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// Model used for speech-to-text
const DEFAULT_TRANSCRIPTION_MODEL: &str = "whisper-1";

/// Model used for minutes generation
const DEFAULT_GENERATION_MODEL: &str = "gpt-4o-mini";

/// Prefix for staged audio files
const TEMP_FILE_PREFIX: &str = "minutes-scribe-";

/// Extension used when the upload name has none
const FALLBACK_EXTENSION: &str = "mp3";

// Request types for the chat completions API

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    response_format: ResponseFormat,
    store: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

// Response types

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
    code: Option<String>,
}

/// OpenAI-backed provider
pub struct OpenAiProvider {
    api_key: String,
    base_url: String,
    transcription_model: String,
    generation_model: String,
    max_tokens: u32,
    temp_dir: PathBuf,
    client: reqwest::Client,
}

impl OpenAiProvider {
    /// Create a provider from its configuration
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderSetupError> {
        let api_key = config.api_key.trim();
        if api_key.is_empty() {
            return Err(ProviderSetupError::MissingApiKey(ProviderId::OpenAi));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderSetupError::Client(e.to_string()))?;

        let base_url = config
            .base_url
            .as_deref()
            .unwrap_or(OPENAI_API_BASE)
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            api_key: api_key.to_string(),
            base_url,
            transcription_model: config
                .transcription_model
                .clone()
                .unwrap_or_else(|| DEFAULT_TRANSCRIPTION_MODEL.to_string()),
            generation_model: config
                .generation_model
                .clone()
                .unwrap_or_else(|| DEFAULT_GENERATION_MODEL.to_string()),
            max_tokens: config.max_tokens,
            temp_dir: std::env::temp_dir(),
            client,
        })
    }

    /// Stage uploads in a different directory
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = dir.into();
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn build_chat_request<'a>(&'a self, prompt: &'a MinutesPrompt) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            model: &self.generation_model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: prompt.system(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt.user(),
                },
            ],
            max_tokens: self.max_tokens,
            response_format: ResponseFormat {
                kind: "json_object",
            },
            store: false,
        }
    }

    /// Write the upload to a temp file named after its extension
    fn stage_audio(&self, file_content: &[u8], extension: &str) -> Result<NamedTempFile, ProviderError> {
        use std::io::Write;

        let suffix = format!(".{}", extension);
        let mut file = tempfile::Builder::new()
            .prefix(TEMP_FILE_PREFIX)
            .suffix(&suffix)
            .tempfile_in(&self.temp_dir)
            .map_err(|e| ProviderError::Storage(e.to_string()))?;

        file.write_all(file_content)
            .and_then(|_| file.flush())
            .map_err(|e| ProviderError::Storage(e.to_string()))?;

        Ok(file)
    }

    async fn upload_audio(&self, staged: &Path, extension: &str) -> Result<String, ProviderError> {
        let bytes = tokio::fs::read(staged)
            .await
            .map_err(|e| ProviderError::Storage(e.to_string()))?;

        let mime = AudioFormat::from_extension(extension)
            .map(|f| f.mime_type())
            .unwrap_or("application/octet-stream");

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(format!("audio.{}", extension))
            .mime_str(mime)
            .map_err(|e| ProviderError::Transcription(e.to_string()))?;

        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("model", self.transcription_model.clone())
            .text("response_format", "json");

        let response = self
            .client
            .post(self.endpoint("audio/transcriptions"))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ProviderError::Transcription(describe_request_error(e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Transcription(describe_request_error(e)))?;

        if !status.is_success() {
            return Err(ProviderError::Transcription(describe_api_error(status, &body)));
        }

        let parsed: TranscriptionResponse = serde_json::from_str(&body)
            .map_err(|e| ProviderError::Transcription(format!("unreadable response: {}", e)))?;

        Ok(parsed.text)
    }
}

/// Flatten a reqwest error into text the classifier understands.
///
/// The request URL is stripped so host, port and path digits never reach
/// the classifier.
fn describe_request_error(error: reqwest::Error) -> String {
    if error.is_timeout() {
        "Request timeout".to_string()
    } else if error.is_connect() {
        "API connection failed".to_string()
    } else {
        error.without_url().to_string()
    }
}

/// Build "HTTP <status>: <message> (<code>)" from an error body
fn describe_api_error(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope { error }) => match error.code {
            Some(code) => format!("HTTP {}: {} ({})", status, error.message, code),
            None => format!("HTTP {}: {}", status, error.message),
        },
        Err(_) if body.trim().is_empty() => format!("HTTP {}", status),
        Err(_) => format!("HTTP {}: {}", status, body.trim()),
    }
}

/// Lowercased extension of the upload name, or the fallback
fn extension_of(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_else(|| FALLBACK_EXTENSION.to_string())
}

#[async_trait]
impl AiProvider for OpenAiProvider {
    fn id(&self) -> ProviderId {
        ProviderId::OpenAi
    }

    async fn transcribe_audio(
        &self,
        file_content: &[u8],
        filename: &str,
    ) -> Result<String, ProviderError> {
        let extension = extension_of(filename);
        let staged = self.stage_audio(file_content, &extension)?;
        tracing::debug!(
            path = %staged.path().display(),
            model = %self.transcription_model,
            "staged audio for transcription"
        );

        // The staged file is removed on drop if the upload fails
        let text = self.upload_audio(staged.path(), &extension).await?;

        if let Err(e) = staged.close() {
            tracing::warn!(error = %e, "failed to remove staged audio");
        }

        if text.trim().is_empty() {
            return Err(ProviderError::EmptyTranscription);
        }
        Ok(text)
    }

    async fn generate_minutes(
        &self,
        transcript: &Transcript,
    ) -> Result<MinutesDocument, ProviderError> {
        let prompt = MinutesPrompt::build(transcript);
        let body = self.build_chat_request(&prompt);

        tracing::debug!(
            model = %self.generation_model,
            max_tokens = self.max_tokens,
            "requesting minutes"
        );

        let response = self
            .client
            .post(self.endpoint("chat/completions"))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Generation(describe_request_error(e)))?;

        let status = response.status();
        let raw = response
            .text()
            .await
            .map_err(|e| ProviderError::Generation(describe_request_error(e)))?;

        if !status.is_success() {
            return Err(ProviderError::Generation(describe_api_error(status, &raw)));
        }

        let completion: ChatCompletionResponse =
            serde_json::from_str(&raw).map_err(|e| ProviderError::Schema(e.to_string()))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| ProviderError::Schema("completion has no content".to_string()))?;

        MinutesDocument::from_json(&content).map_err(|e| ProviderError::Schema(e.to_string()))
    }

    fn format_error(&self, error: &ProviderError) -> String {
        format_provider_error(error)
    }
}
