//! Application-wide constants and configuration defaults
//!
//! This module centralizes the timing, gesture and layout numbers used by
//! the presentation controller and the terminal surface.

/// Application name used for config directories and log files
pub const APP_NAME: &str = "teletext_deck";

/// Default log file name
pub const LOG_FILE_NAME: &str = "teletext_deck.log";

/// Transition timing
pub mod transition {
    /// Duration of one slide transition in milliseconds
    pub const DURATION_MS: u64 = 580;

    /// Upper bound accepted from configuration
    pub const MAX_DURATION_MS: u64 = 10_000;

    /// Full-width offset of an off-screen slide, in percent of the panel width
    pub const FULL_OFFSET_PERCENT: f64 = 100.0;
}

/// Swipe and tap recognition
pub mod gesture {
    /// Minimum horizontal travel for a swipe, in pointer units (terminal cells)
    pub const SWIPE_MIN_DISTANCE: f64 = 30.0;

    /// Maximum time between press and release for a swipe
    pub const SWIPE_MAX_DURATION_MS: u64 = 500;

    /// Width of each tap zone as a fraction of the screen width
    pub const TAP_ZONE_FRACTION: f64 = 0.25;
}

/// UI polling intervals in milliseconds
pub mod polling {
    /// Polling interval while a transition is animating (about 60 fps)
    pub const ANIMATING_MS: u64 = 16;

    /// Polling interval for active use (< 5 seconds idle)
    pub const ACTIVE_MS: u64 = 50;

    /// Polling interval for idle use
    pub const IDLE_MS: u64 = 250;

    /// Threshold for considering user as idle (seconds)
    pub const IDLE_THRESHOLD_SECONDS: u64 = 5;
}

/// Terminal layout
pub mod ui {
    /// Rows used by header, subheader, progress bar and indicator row at the top
    pub const TOP_CHROME_ROWS: u16 = 3;

    /// Rows used by the control row and footer at the bottom
    pub const BOTTOM_CHROME_ROWS: u16 = 2;

    /// Horizontal content margin inside a slide panel
    pub const CONTENT_MARGIN: usize = 2;

    /// Width used when rendering without a terminal (`--once`)
    pub const NONINTERACTIVE_WIDTH: u16 = 80;

    /// Height used when rendering without a terminal (`--once`)
    pub const NONINTERACTIVE_HEIGHT: u16 = 24;

    /// Label of the previous button
    pub const PREV_LABEL: &str = "<< EDELL";

    /// Label of the next button
    pub const NEXT_LABEL: &str = "SEUR >>";
}

/// Environment variable names
pub mod env_vars {
    /// Override log file path
    pub const LOG_FILE: &str = "TELETEXT_DECK_LOG_FILE";

    /// Override transition duration in milliseconds
    pub const TRANSITION_MS: &str = "TELETEXT_DECK_TRANSITION_MS";
}
