// src/main.rs
mod app;
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::Args;
use teletext_deck::config::Config;
use teletext_deck::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Validate argument combinations
    commands::validate_args(&args)?;

    // Load config once; logging falls back to defaults so a broken config
    // can still be reported through the log
    let loaded = Config::load().await;
    let log_config = loaded.as_ref().ok().cloned().unwrap_or_default();

    let (log_file_path, _guard) = logging::setup_logging(&args, &log_config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        return commands::handle_list_config_command().await;
    }

    if args.new_log_file_path.is_some() || args.clear_log_file_path {
        return commands::handle_config_update_command(&args).await;
    }

    // Fail early on a bad config before touching the terminal
    let config = commands::apply_cli_overrides(loaded?, &args)?;
    let (deck, start) = commands::load_presentation(&args).await.inspect_err(|e| {
        if e.is_deck_error() {
            tracing::error!("Deck rejected: {e}");
        }
    })?;

    if args.once {
        return commands::handle_once_command(&deck, start);
    }

    app::run_interactive(&args, &config, &deck, start).await
}
