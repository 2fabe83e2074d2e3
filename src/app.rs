use crate::cli::Args;
use teletext_deck::config::Config;
use teletext_deck::deck::Deck;
use teletext_deck::error::AppError;
use teletext_deck::ui::{self, SessionOptions};

/// Run the interactive application flow.
///
/// The terminal session (raw mode, alternate screen, mouse capture) is set up
/// and torn down inside the UI so it is restored on every exit path.
pub async fn run_interactive(
    args: &Args,
    config: &Config,
    deck: &Deck,
    start: usize,
) -> Result<(), AppError> {
    let options = SessionOptions {
        start,
        transition: config.transition_duration(),
        gestures: config.gesture_config(),
        debug_mode: args.debug,
    };

    let result = ui::run_interactive_ui(deck, options).await;
    if result.is_ok() {
        tracing::info!("Presentation of '{}' ended", deck.name());
    }
    result
}
