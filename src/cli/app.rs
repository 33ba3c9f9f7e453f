//! Main app runner for minutes generation

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use serde_json::json;

use crate::application::ports::{ConfigStore, DurationProbe, ProviderConfig, StatsStore};
use crate::application::{GeneratorCallbacks, MinutesGenerator, ResultEnvelope, Stage};
use crate::domain::config::AppConfig;
use crate::domain::minutes::render_markdown;
use crate::domain::provider::ProviderId;
use crate::domain::transcript::InputKind;
use crate::infrastructure::{
    create_duration_probe, create_provider, JsonStatsStore, NoOpDurationProbe, XdgConfigStore,
};

use super::args::OutputFormat;
use super::presenter::{stage_message, Presenter};

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variable holding the OpenAI API key
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable overriding the API endpoint
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";

/// Shown when neither a file nor text was given
pub const MISSING_INPUT_MESSAGE: &str = "No transcript or file provided";

/// Parsed options for one minutes run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub file: Option<PathBuf>,
    pub text: Option<String>,
    pub content_type: Option<String>,
    pub output: Option<PathBuf>,
}

/// What the generator should be fed
enum Input {
    Text(String),
    Upload {
        kind: InputKind,
        bytes: Vec<u8>,
        filename: String,
    },
}

/// Generate minutes for one input and write the result
pub async fn run_minutes(options: RunOptions, config: AppConfig) -> ExitCode {
    let mut presenter = Presenter::new();

    let format = match config.format_or_default().parse::<OutputFormat>() {
        Ok(format) => format,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let input = match resolve_input(&options).await {
        Ok(input) => input,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let provider_id = match config.provider.as_deref().map(str::parse::<ProviderId>) {
        Some(Ok(id)) => id,
        None => ProviderId::default(),
        Some(Err(e)) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let Some(api_key) = config.api_key() else {
        presenter.error(&format!(
            "Missing API key. Set {} or run 'minutes-scribe config set api_key <key>'",
            API_KEY_ENV
        ));
        return ExitCode::from(EXIT_ERROR);
    };

    let provider_config = build_provider_config(provider_id, api_key, &config);
    tracing::debug!(config = ?provider_config, "provider configuration");

    let provider = match create_provider(&provider_config) {
        Ok(provider) => provider,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let probe: Box<dyn DurationProbe> = match &input {
        Input::Upload { kind, .. } if kind.is_audio() => create_duration_probe().await,
        _ => Box::new(NoOpDurationProbe::new()),
    };

    presenter.start_spinner("Preparing...");
    let callbacks = GeneratorCallbacks {
        on_stage: presenter.spinner_handle().map(|bar| {
            Box::new(move |stage| bar.set_message(stage_message(stage)))
                as Box<dyn Fn(Stage) + Send + Sync>
        }),
    };
    let generator = MinutesGenerator::new(provider, probe).with_callbacks(callbacks);

    let envelope = match input {
        Input::Text(text) => generator.handle_text(&text).await,
        Input::Upload {
            kind,
            bytes,
            filename,
        } => generator.handle_upload(kind, &bytes, &filename).await,
    };

    match &envelope {
        ResultEnvelope::Success(_) => presenter.spinner_success("Minutes generated"),
        ResultEnvelope::Failure { error } => presenter.spinner_fail(error),
    }

    if let Some(delta) = envelope.usage() {
        let stats = JsonStatsStore::new();
        if let Err(e) = stats.record(&delta).await {
            presenter.warn(&format!("Could not update usage stats: {}", e));
        }
    }

    if let Err(e) = write_result(&presenter, &envelope, format, options.output.as_deref()) {
        presenter.error(&format!("Failed to write output: {}", e));
        return ExitCode::from(EXIT_ERROR);
    }

    if envelope.is_success() {
        ExitCode::from(EXIT_SUCCESS)
    } else {
        ExitCode::from(EXIT_ERROR)
    }
}

/// Read and classify the input named on the command line
async fn resolve_input(options: &RunOptions) -> Result<Input, String> {
    if let Some(text) = &options.text {
        return Ok(Input::Text(text.clone()));
    }

    let Some(path) = &options.file else {
        return Err(MISSING_INPUT_MESSAGE.to_string());
    };

    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let kind = InputKind::detect(Some(filename.as_str()), options.content_type.as_deref())
        .map_err(|e| e.to_string())?;

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    tracing::info!(filename = %filename, kind = ?kind, bytes = bytes.len(), "input resolved");

    Ok(Input::Upload {
        kind,
        bytes,
        filename,
    })
}

/// Build the provider configuration from merged settings
pub fn build_provider_config(
    provider: ProviderId,
    api_key: &str,
    config: &AppConfig,
) -> ProviderConfig {
    ProviderConfig {
        provider,
        api_key: api_key.to_string(),
        transcription_model: config.transcription_model.clone(),
        generation_model: config.generation_model.clone(),
        max_tokens: config.max_tokens_or_default(),
        timeout: config.timeout_or_default(),
        base_url: config.base_url.clone(),
    }
}

/// JSON response body for an envelope
pub fn response_json(envelope: &ResultEnvelope) -> serde_json::Value {
    match envelope {
        ResultEnvelope::Success(report) => {
            let mut body = json!({
                "success": true,
                "minutes": report.minutes,
                "transcript": report.transcript,
                "transcript_length": report.transcript_length,
            });
            if let Some(duration) = report.audio_duration {
                body["audio_duration"] = json!(duration);
            }
            body
        }
        ResultEnvelope::Failure { error } => json!({
            "success": false,
            "message": error,
        }),
    }
}

fn write_result(
    presenter: &Presenter,
    envelope: &ResultEnvelope,
    format: OutputFormat,
    output: Option<&Path>,
) -> std::io::Result<()> {
    match (format, envelope) {
        (OutputFormat::Markdown, ResultEnvelope::Success(report)) => {
            presenter.emit(render_markdown(&report.minutes).trim_end(), output)
        }
        (OutputFormat::Markdown, ResultEnvelope::Failure { error }) => {
            presenter.error(error);
            Ok(())
        }
        (OutputFormat::Json, ResultEnvelope::Success(_)) => {
            let body = serde_json::to_string_pretty(&response_json(envelope))?;
            presenter.emit(&body, output)
        }
        // Failures always go to stdout so callers see them
        (OutputFormat::Json, ResultEnvelope::Failure { .. }) => {
            let body = serde_json::to_string_pretty(&response_json(envelope))?;
            presenter.emit(&body, None)
        }
    }
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, path = %store.path().display(), "ignoring unreadable config");
            AppConfig::empty()
        }
    };

    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config())
        .merge(cli_config)
}

fn env_config() -> AppConfig {
    AppConfig {
        api_key: env::var(API_KEY_ENV).ok().filter(|s| !s.trim().is_empty()),
        base_url: env::var(BASE_URL_ENV).ok().filter(|s| !s.trim().is_empty()),
        ..Default::default()
    }
}
