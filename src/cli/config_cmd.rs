//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::domain::provider::ProviderId;

use super::args::{is_valid_config_key, ConfigAction, OutputFormat, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let mut config = store.load().await?;
    apply_value(&mut config, key, value)?;
    store.save(&config).await?;

    let shown = if key == "api_key" {
        mask_api_key(value.trim())
    } else {
        value.trim().to_string()
    };
    presenter.success(&format!("{} = {}", key, shown));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let config = store.load().await?;
    presenter.output(&display_value(&config, key).unwrap_or_else(|| NOT_SET.to_string()));

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        presenter.key_value(
            key,
            &display_value(&config, key).unwrap_or_else(|| NOT_SET.to_string()),
        );
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        })
    }
}

fn invalid(key: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        key: key.to_string(),
        message: message.into(),
    }
}

/// Validate a value and store it under the key
fn apply_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(invalid(key, "Value must not be empty"));
    }

    match key {
        "api_key" => config.api_key = Some(value.to_string()),
        "provider" => {
            let id = value
                .parse::<ProviderId>()
                .map_err(|e| invalid(key, e.to_string()))?;
            config.provider = Some(id.to_string());
        }
        "transcription_model" => config.transcription_model = Some(value.to_string()),
        "generation_model" => config.generation_model = Some(value.to_string()),
        "max_tokens" => config.max_tokens = Some(parse_positive(key, value)?),
        "timeout_secs" => config.timeout_secs = Some(parse_positive(key, value)?),
        "format" => {
            let format = value.parse::<OutputFormat>().map_err(|e| invalid(key, e))?;
            config.format = Some(format.to_string());
        }
        "base_url" => {
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                return Err(invalid(key, "Value must start with http:// or https://"));
            }
            config.base_url = Some(value.trim_end_matches('/').to_string());
        }
        _ => return Err(invalid(key, "Unknown key")),
    }

    Ok(())
}

/// Parse a whole number greater than zero
fn parse_positive<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    match value.parse::<T>() {
        Ok(n) if n > T::default() => Ok(n),
        _ => Err(invalid(key, "Value must be a whole number greater than 0")),
    }
}

/// Value shown by `get` and `list`; API keys are masked
fn display_value(config: &AppConfig, key: &str) -> Option<String> {
    match key {
        "api_key" => config.api_key.as_deref().map(mask_api_key),
        "provider" => config.provider.clone(),
        "transcription_model" => config.transcription_model.clone(),
        "generation_model" => config.generation_model.clone(),
        "max_tokens" => config.max_tokens.map(|n| n.to_string()),
        "timeout_secs" => config.timeout_secs.map(|n| n.to_string()),
        "format" => config.format.clone(),
        "base_url" => config.base_url.clone(),
        _ => None,
    }
}

/// Mask API key for display (show first 4 and last 4 chars)
fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}
