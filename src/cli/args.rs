//! CLI argument definitions using Clap

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand, ValueEnum};

/// minutes-scribe - meeting minutes from transcripts and recordings
#[derive(Parser, Debug)]
#[command(name = "minutes-scribe")]
#[command(version)]
#[command(about = "Generate structured meeting minutes from a transcript or audio file")]
#[command(long_about = None)]
pub struct Cli {
    /// Transcript (.txt) or recording (.mp3, .wav, .m4a, .ogg, .webm)
    #[arg(value_name = "FILE", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Transcript text to summarize instead of a file
    #[arg(short = 't', long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Content type of FILE when its extension is missing or misleading
    #[arg(long, value_name = "MIME", requires = "file")]
    pub content_type: Option<String>,

    /// AI provider to use
    #[arg(short = 'p', long, value_name = "PROVIDER")]
    pub provider: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Write the result to a file instead of stdout
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Log pipeline steps to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Show usage statistics
    Stats {
        /// Reset all counters to zero
        #[arg(long)]
        reset: bool,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// How minutes are written out
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `{"success": ..}` JSON response
    #[default]
    Json,
    /// Rendered Markdown document
    Markdown,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!(
                "Invalid format '{}'. Valid options: {}",
                s,
                VALID_FORMATS.join(", ")
            )),
        }
    }
}

/// Valid output format names
pub const VALID_FORMATS: &[&str] = &["json", "markdown"];

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "api_key",
    "provider",
    "transcription_model",
    "generation_model",
    "max_tokens",
    "timeout_secs",
    "format",
    "base_url",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
