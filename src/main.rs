//! minutes-scribe CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use minutes_scribe::cli::{
    app::{load_merged_config, run_minutes, RunOptions, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
    stats_cmd::handle_stats_command,
};
use minutes_scribe::domain::config::AppConfig;
use minutes_scribe::infrastructure::{JsonStatsStore, XdgConfigStore};

/// Send `tracing` events to stderr, filtered by RUST_LOG
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("minutes_scribe={}", default_level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let presenter = Presenter::new();

    // Handle subcommands
    match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        Some(Commands::Stats { reset }) => {
            let store = JsonStatsStore::new();
            if let Err(e) = handle_stats_command(reset, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        None => {}
    }

    // API key and base URL come from env/file only
    let cli_config = AppConfig {
        provider: cli.provider.clone(),
        format: cli.format.map(|f| f.to_string()),
        ..Default::default()
    };

    let config = load_merged_config(cli_config).await;

    let options = RunOptions {
        file: cli.file,
        text: cli.text,
        content_type: cli.content_type,
        output: cli.output,
    };

    run_minutes(options, config).await
}
