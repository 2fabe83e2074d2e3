use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),

    // Deck loading errors
    #[error("Failed to read deck '{path}': {message}")]
    DeckLoad { path: String, message: String },

    #[error("Deck '{path}' contains no slides")]
    EmptyDeck { path: String },

    #[error("Start slide {requested} is out of range (deck has {total} slides)")]
    InvalidStartSlide { requested: usize, total: usize },
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a deck load error
    pub fn deck_load(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DeckLoad {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an empty deck error
    pub fn empty_deck(path: impl Into<String>) -> Self {
        Self::EmptyDeck { path: path.into() }
    }

    /// Create an invalid start slide error. `requested` is 1-based as typed by the user.
    pub fn invalid_start_slide(requested: usize, total: usize) -> Self {
        Self::InvalidStartSlide { requested, total }
    }

    /// Check if error comes from the deck rather than the environment
    pub fn is_deck_error(&self) -> bool {
        matches!(
            self,
            AppError::DeckLoad { .. }
                | AppError::EmptyDeck { .. }
                | AppError::InvalidStartSlide { .. }
        )
    }
}
