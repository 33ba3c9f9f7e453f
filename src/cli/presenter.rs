//! CLI presenter for output formatting

use std::io::{self, Write};
use std::path::Path;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::application::Stage;

/// Presenter for CLI output formatting.
///
/// Status goes to stderr; results go to stdout or the output file.
pub struct Presenter {
    spinner: Option<ProgressBar>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self { spinner: None }
    }

    /// Start a spinner with message
    pub fn start_spinner(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
        {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    /// Handle for updating the spinner from a generator callback
    pub fn spinner_handle(&self) -> Option<ProgressBar> {
        self.spinner.clone()
    }

    /// Mark spinner as success and finish
    pub fn spinner_success(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!("{} {}", "✓".green(), message));
        }
    }

    /// Mark spinner as failed and finish
    pub fn spinner_fail(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!("{} {}", "✗".red(), message));
        }
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
        let _ = io::stdout().flush();
    }

    /// Write the result to a file, or stdout when no path is given
    pub fn emit(&self, text: &str, path: Option<&Path>) -> io::Result<()> {
        match path {
            Some(path) => {
                std::fs::write(path, format!("{}\n", text))?;
                self.success(&format!("Written to {}", path.display()));
                Ok(())
            }
            None => {
                self.output(text);
                Ok(())
            }
        }
    }

    /// Print a key-value pair (for config list and stats)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Spinner text for a pipeline stage
pub fn stage_message(stage: Stage) -> &'static str {
    match stage {
        Stage::ProbingDuration => "Reading audio...",
        Stage::Transcribing => "Transcribing audio...",
        Stage::GeneratingMinutes => "Generating minutes...",
    }
}

/// Format seconds as `1h 02m 03s`, `4m 05s` or `7.5s`
pub fn format_audio_seconds(secs: f64) -> String {
    if !secs.is_finite() || secs <= 0.0 {
        return "0s".to_string();
    }
    if secs < 60.0 {
        return format!("{:.1}s", secs);
    }

    let total = secs.round() as u64;
    let (h, m, s) = (total / 3600, (total % 3600) / 60, total % 60);
    if h > 0 {
        format!("{}h {:02}m {:02}s", h, m, s)
    } else {
        format!("{}m {:02}s", m, s)
    }
}
