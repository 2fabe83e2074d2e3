//! Swipe and tap-zone recognition for pointer press/release pairs.

use super::NavCommand;
use crate::constants::gesture;
use std::time::Duration;
use tokio::time::Instant;

/// Gesture recognition parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// Horizontal travel a swipe must exceed
    pub swipe_min_distance: f64,
    /// Swipes must finish within this time; `None` disables the gate
    pub swipe_max_duration: Option<Duration>,
    /// Width of each edge tap zone as a fraction of screen width
    pub tap_zone_fraction: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_min_distance: gesture::SWIPE_MIN_DISTANCE,
            swipe_max_duration: Some(Duration::from_millis(gesture::SWIPE_MAX_DURATION_MS)),
            tap_zone_fraction: gesture::TAP_ZONE_FRACTION,
        }
    }
}

/// A pointer position with the time it was observed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    pub at: Instant,
}

impl PointerSample {
    pub fn new(x: f64, y: f64, at: Instant) -> Self {
        Self { x, y, at }
    }
}

/// Tracks a press and classifies the matching release.
#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    config: GestureConfig,
    start: Option<PointerSample>,
}

impl GestureRecognizer {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            start: None,
        }
    }

    pub fn press(&mut self, sample: PointerSample) {
        self.start = Some(sample);
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }

    /// Classifies a release. A recognized swipe wins; otherwise the release
    /// position is checked against the edge tap zones.
    pub fn release(&mut self, end: PointerSample, screen_width: f64) -> Option<NavCommand> {
        if let Some(start) = self.start.take()
            && let Some(command) = self.classify_swipe(start, end)
        {
            return Some(command);
        }
        self.classify_tap(end.x, screen_width)
    }

    fn classify_swipe(&self, start: PointerSample, end: PointerSample) -> Option<NavCommand> {
        let dx = end.x - start.x;
        let dy = end.y - start.y;

        if dx.abs() <= dy.abs() || dx.abs() <= self.config.swipe_min_distance {
            return None;
        }

        if let Some(max) = self.config.swipe_max_duration {
            let elapsed = end.at.saturating_duration_since(start.at);
            if elapsed >= max {
                tracing::debug!("Drag of {dx:.0} too slow for a swipe ({elapsed:?})");
                return None;
            }
        }

        // Dragging content leftward reveals the next slide
        Some(NavCommand::Relative(if dx < 0.0 { 1 } else { -1 }))
    }

    fn classify_tap(&self, x: f64, screen_width: f64) -> Option<NavCommand> {
        if screen_width <= 0.0 {
            return None;
        }
        let zone = screen_width * self.config.tap_zone_fraction;
        if x < zone {
            Some(NavCommand::Relative(-1))
        } else if x > screen_width - zone {
            Some(NavCommand::Relative(1))
        } else {
            None
        }
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}
