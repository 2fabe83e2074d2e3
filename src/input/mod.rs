//! Input dispatching for the presenter
//!
//! - `keyboard`: key-to-command mapping
//! - `gesture`: swipe and tap-zone recognition from pointer press/release
//! - `dispatcher`: routes terminal events into the navigation controller

mod dispatcher;
mod gesture;
mod keyboard;

pub use dispatcher::{DispatchOutcome, InputDispatcher};
pub use gesture::{GestureConfig, GestureRecognizer, PointerSample};
pub use keyboard::map_key;

/// A navigation request produced from raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    /// Move by a signed number of slides
    Relative(isize),
    /// Jump to a slide index
    GoTo(usize),
    First,
    Last,
    Quit,
}

/// Clickable chrome elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Indicator(usize),
    Previous,
    Next,
}

impl HitTarget {
    pub fn command(self) -> NavCommand {
        match self {
            HitTarget::Indicator(index) => NavCommand::GoTo(index),
            HitTarget::Previous => NavCommand::Relative(-1),
            HitTarget::Next => NavCommand::Relative(1),
        }
    }
}

/// Maps a screen cell to the control drawn there, if any.
pub trait HitTest {
    fn hit_test(&self, column: u16, row: u16) -> Option<HitTarget>;
}
