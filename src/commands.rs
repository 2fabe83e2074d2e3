use crate::cli::Args;
use crossterm::{execute, terminal::SetTitle};
use std::io::stdout;
use std::path::PathBuf;
use teletext_deck::config::Config;
use teletext_deck::deck::{Deck, load_deck};
use teletext_deck::error::AppError;
use teletext_deck::ui::render_static;

const WINDOW_TITLE: &str = "TELETEXT DECK";

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.start == 0 {
        return Err(AppError::config_error(
            "Slide numbers start from 1 (--start 0 is not valid)",
        ));
    }
    if args.new_log_file_path.is_some() && args.clear_log_file_path {
        return Err(AppError::config_error(
            "Cannot use both --set-log-file and --clear-log-file simultaneously",
        ));
    }
    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(WINDOW_TITLE))?;
    Config::display().await?;
    Ok(())
}

/// Handles configuration update commands (--set-log-file, --clear-log-file).
///
/// A missing or unreadable config file is replaced by defaults before saving.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await.unwrap_or_else(|e| {
        tracing::warn!("Starting from default config: {e}");
        Config::default()
    });

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Applies per-run command line overrides on top of the loaded config.
pub fn apply_cli_overrides(mut config: Config, args: &Args) -> Result<Config, AppError> {
    if let Some(transition_ms) = args.transition_ms {
        config.transition_ms = transition_ms;
        config.validate()?;
    }
    Ok(config)
}

/// Loads the deck named on the command line and resolves the 0-based start slide.
pub async fn load_presentation(args: &Args) -> Result<(Deck, usize), AppError> {
    let path: &PathBuf = args
        .deck
        .as_ref()
        .ok_or_else(|| AppError::config_error("No deck file given"))?;

    let deck = load_deck(path).await?;
    if args.start == 0 || args.start > deck.len() {
        return Err(AppError::invalid_start_slide(args.start, deck.len()));
    }

    tracing::debug!("Starting '{}' at slide {}", path.display(), args.start);
    Ok((deck, args.start - 1))
}

/// Handles the --once command.
///
/// Prints the start slide once and exits, leaving it in terminal history.
pub fn handle_once_command(deck: &Deck, start: usize) -> Result<(), AppError> {
    let mut out = stdout();
    execute!(out, SetTitle(WINDOW_TITLE))?;
    render_static(deck, start, &mut out)
}
