//! Transition engine: the directional slide/fade handoff between two panels.
//!
//! The engine keeps no state between calls. Mutual exclusion of transitions
//! is the controller's job via the animating flag.

use super::surface::{Placement, PresentationSurface};
use std::time::Duration;

/// Direction of travel through the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// +1 forward, -1 backward
    pub fn sign(self) -> i8 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionEngine {
    duration: Duration,
}

impl TransitionEngine {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Runs steps 1-3 of a transition: stage the incoming slide off-screen on
    /// the side of travel, flush, then animate both slides concurrently.
    pub fn begin<S: PresentationSurface>(
        &self,
        surface: &mut S,
        outgoing: usize,
        incoming: usize,
        direction: Direction,
    ) {
        let side = direction.sign();

        surface.set_animated(incoming, false);
        surface.place(incoming, Placement::off_screen(side));
        surface.set_active(incoming, false);

        // Without this the staging placement and the animated one coalesce
        // and the incoming slide would jump instead of slide.
        surface.flush_layout();

        surface.set_animated(incoming, true);
        surface.set_animated(outgoing, true);
        surface.place(incoming, Placement::NEUTRAL);
        surface.set_active(incoming, true);
        surface.place(outgoing, Placement::off_screen(-side));
    }

    /// Step 4: clear the outgoing slide's overrides and active marker.
    pub fn finish<S: PresentationSurface>(&self, surface: &mut S, outgoing: usize) {
        surface.reset(outgoing);
        surface.set_active(outgoing, false);
    }
}

impl Default for TransitionEngine {
    fn default() -> Self {
        Self::new(Duration::from_millis(
            crate::constants::transition::DURATION_MS,
        ))
    }
}
