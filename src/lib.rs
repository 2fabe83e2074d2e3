//! Teletext-styled terminal slide presenter
//!
//! This library provides the navigation state, transition engine, input
//! dispatching and terminal rendering behind the `teletext_deck` binary.
//!
//! # Examples
//!
//! ```rust,no_run
//! use teletext_deck::deck::load_deck;
//! use teletext_deck::error::AppError;
//! use teletext_deck::ui::render_static;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     // Load a deck file
//!     let deck = load_deck(Path::new("talk.deck")).await?;
//!
//!     // Print the first slide to stdout
//!     let mut stdout = std::io::stdout();
//!     render_static(&deck, 0, &mut stdout)?;
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod deck;
pub mod error;
pub mod input;
pub mod presentation;
pub mod testing_utils;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::Config;
pub use deck::{Deck, Slide, load_deck, parse_deck};
pub use error::AppError;
pub use input::{DispatchOutcome, GestureConfig, InputDispatcher, NavCommand};
pub use presentation::{
    Direction, NavigationController, NavigationState, PresentationSurface, TransitionEngine,
    UiSnapshot,
};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
