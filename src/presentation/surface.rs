//! The presentation surface: the only way navigation logic touches the screen.

use super::sync::UiSnapshot;
use crate::constants::transition::FULL_OFFSET_PERCENT;

/// Horizontal offset (percent of the panel width) and opacity of one slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub offset_percent: f64,
    pub opacity: f64,
}

impl Placement {
    /// On screen, fully opaque
    pub const NEUTRAL: Placement = Placement {
        offset_percent: 0.0,
        opacity: 1.0,
    };

    /// One full panel width away on the given side (+1 right, -1 left), transparent
    pub fn off_screen(side: i8) -> Self {
        Placement {
            offset_percent: f64::from(side) * FULL_OFFSET_PERCENT,
            opacity: 0.0,
        }
    }

    /// Linear interpolation towards `to`, with `t` clamped to `[0, 1]`
    pub fn lerp(self, to: Placement, t: f64) -> Placement {
        let t = t.clamp(0.0, 1.0);
        Placement {
            offset_percent: self.offset_percent + (to.offset_percent - self.offset_percent) * t,
            opacity: self.opacity + (to.opacity - self.opacity) * t,
        }
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Abstract visual operations the transition engine and controller depend on.
///
/// Slides are addressed by their index in the deck. Implementations decide
/// how placements become pixels (or terminal cells); the navigation logic
/// never inspects the result.
pub trait PresentationSurface {
    /// Enables or disables animated interpolation for subsequent placements of a slide.
    fn set_animated(&mut self, slide: usize, animated: bool);

    /// Sets the slide's position and opacity override.
    fn place(&mut self, slide: usize, placement: Placement);

    /// Commits all pending non-animated placements so the next animated
    /// placement starts from them.
    fn flush_layout(&mut self);

    /// Adds or removes the active-display marker.
    fn set_active(&mut self, slide: usize, active: bool);

    /// Drops the slide's placement overrides, returning it to its default state.
    fn reset(&mut self, slide: usize);

    /// Refreshes progress, counters, indicators and prev/next controls.
    fn render_ui(&mut self, ui: &UiSnapshot);
}

impl<S: PresentationSurface + ?Sized> PresentationSurface for &mut S {
    fn set_animated(&mut self, slide: usize, animated: bool) {
        (**self).set_animated(slide, animated)
    }

    fn place(&mut self, slide: usize, placement: Placement) {
        (**self).place(slide, placement)
    }

    fn flush_layout(&mut self) {
        (**self).flush_layout()
    }

    fn set_active(&mut self, slide: usize, active: bool) {
        (**self).set_active(slide, active)
    }

    fn reset(&mut self, slide: usize) {
        (**self).reset(slide)
    }

    fn render_ui(&mut self, ui: &UiSnapshot) {
        (**self).render_ui(ui)
    }
}
