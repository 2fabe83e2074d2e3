//! Navigation state: the current slide and the animation-in-progress flag.

use super::transition::Direction;

/// Position within the deck plus the exclusive transition flag.
///
/// `current_index` stays within `[0, total_slides)` and only changes when a
/// transition commits. `is_animating` is true for exactly the lifetime of one
/// transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    current_index: usize,
    total_slides: usize,
    is_animating: bool,
}

/// Why a navigation request was ignored. Only used for logging; callers
/// never see a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Animating,
    SameSlide,
    OutOfRange,
}

impl NavigationState {
    /// Creates a resting state at `start`, clamped into the deck.
    pub fn new(total_slides: usize, start: usize) -> Self {
        Self {
            current_index: start.min(total_slides.saturating_sub(1)),
            total_slides,
            is_animating: false,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_slides(&self) -> usize {
        self.total_slides
    }

    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 >= self.total_slides
    }

    /// Checks a request against the debounce rules and returns the accepted
    /// target and direction of travel.
    pub fn validate(&self, target: isize) -> Result<(usize, Direction), Rejection> {
        if self.is_animating {
            return Err(Rejection::Animating);
        }
        if target < 0 || target as usize >= self.total_slides {
            return Err(Rejection::OutOfRange);
        }
        let target = target as usize;
        if target == self.current_index {
            return Err(Rejection::SameSlide);
        }
        let direction = if target > self.current_index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        Ok((target, direction))
    }

    pub(super) fn begin_transition(&mut self) {
        self.is_animating = true;
    }

    pub(super) fn commit(&mut self, index: usize) {
        debug_assert!(index < self.total_slides);
        self.current_index = index;
        self.is_animating = false;
    }
}
