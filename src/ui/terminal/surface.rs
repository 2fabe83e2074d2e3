//! Terminal implementation of the presentation surface.
//!
//! Placements are interpolated over the transition duration so the frame
//! renderer can sample each panel's offset and opacity at any instant.
//! Non-animated placements stay pending until `flush_layout`, mirroring how
//! a browser coalesces style changes before layout.

use crate::presentation::{Placement, PresentationSurface, UiSnapshot};
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone)]
struct PanelVisual {
    committed: Placement,
    target: Placement,
    anim_start: Option<Instant>,
    animated: bool,
    active: bool,
    overridden: bool,
    dirty: bool,
}

impl Default for PanelVisual {
    fn default() -> Self {
        Self {
            committed: Placement::NEUTRAL,
            target: Placement::NEUTRAL,
            anim_start: None,
            animated: true,
            active: false,
            overridden: false,
            dirty: false,
        }
    }
}

impl PanelVisual {
    fn placement_at(&self, now: Instant, duration: Duration) -> Placement {
        match self.anim_start {
            Some(start) => {
                let t = progress(start, now, duration);
                self.committed.lerp(self.target, ease_in_out(t))
            }
            None if self.dirty => self.committed,
            None => self.target,
        }
    }

    fn is_moving(&self, now: Instant, duration: Duration) -> bool {
        self.anim_start
            .is_some_and(|start| progress(start, now, duration) < 1.0)
    }
}

fn progress(start: Instant, now: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
}

/// Cubic ease-in-out
fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[derive(Debug, Clone)]
pub struct TerminalSurface {
    panels: Vec<PanelVisual>,
    duration: Duration,
    ui: UiSnapshot,
}

impl TerminalSurface {
    pub fn new(slides: usize, duration: Duration) -> Self {
        Self {
            panels: vec![PanelVisual::default(); slides],
            duration,
            ui: UiSnapshot::default(),
        }
    }

    /// Placement of a slide at `now`, or `None` when the slide is not shown.
    /// Slides are shown while active or while carrying a placement override.
    pub fn placement_at(&self, slide: usize, now: Instant) -> Option<Placement> {
        let panel = self.panels.get(slide)?;
        (panel.active || panel.overridden).then(|| panel.placement_at(now, self.duration))
    }

    /// All shown slides with their placements, back to front.
    /// The panel settling on screen is last so it paints over a departing one.
    pub fn visible_panels(&self, now: Instant) -> Vec<(usize, Placement)> {
        let mut visible: Vec<(usize, Placement)> = (0..self.panels.len())
            .filter_map(|i| self.placement_at(i, now).map(|p| (i, p)))
            .collect();
        visible.sort_by_key(|(i, _)| self.panels[*i].target == Placement::NEUTRAL);
        visible
    }

    /// True while any panel is still interpolating
    pub fn is_animating_at(&self, now: Instant) -> bool {
        self.panels.iter().any(|p| p.is_moving(now, self.duration))
    }

    pub fn is_active(&self, slide: usize) -> bool {
        self.panels.get(slide).is_some_and(|p| p.active)
    }

    pub fn ui(&self) -> &UiSnapshot {
        &self.ui
    }
}

impl PresentationSurface for TerminalSurface {
    fn set_animated(&mut self, slide: usize, animated: bool) {
        if let Some(panel) = self.panels.get_mut(slide) {
            panel.animated = animated;
        }
    }

    fn place(&mut self, slide: usize, placement: Placement) {
        let now = Instant::now();
        let duration = self.duration;
        let Some(panel) = self.panels.get_mut(slide) else {
            return;
        };

        if panel.animated {
            panel.committed = panel.placement_at(now, duration);
            panel.anim_start = Some(now);
            panel.dirty = false;
        } else {
            panel.anim_start = None;
            panel.dirty = true;
        }
        panel.target = placement;
        panel.overridden = true;
    }

    fn flush_layout(&mut self) {
        for panel in self.panels.iter_mut().filter(|p| p.dirty) {
            panel.committed = panel.target;
            panel.dirty = false;
        }
    }

    fn set_active(&mut self, slide: usize, active: bool) {
        if let Some(panel) = self.panels.get_mut(slide) {
            panel.active = active;
        }
    }

    fn reset(&mut self, slide: usize) {
        if let Some(panel) = self.panels.get_mut(slide) {
            let active = panel.active;
            *panel = PanelVisual {
                active,
                ..PanelVisual::default()
            };
        }
    }

    fn render_ui(&mut self, ui: &UiSnapshot) {
        self.ui = ui.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::{Direction, TransitionEngine};

    const DURATION: Duration = Duration::from_millis(580);

    fn started_surface(slides: usize) -> TerminalSurface {
        let mut surface = TerminalSurface::new(slides, DURATION);
        surface.set_animated(0, false);
        surface.place(0, Placement::NEUTRAL);
        surface.set_active(0, true);
        surface.flush_layout();
        surface
    }

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(0.5), 0.5);
        assert_eq!(ease_in_out(1.0), 1.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_hidden_slides_are_not_visible() {
        let surface = started_surface(3);
        let now = Instant::now();
        assert_eq!(surface.visible_panels(now), vec![(0, Placement::NEUTRAL)]);
        assert!(surface.placement_at(1, now).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_transition_interpolates_both_panels() {
        let mut surface = started_surface(3);
        let engine = TransitionEngine::new(DURATION);
        engine.begin(&mut surface, 0, 1, Direction::Forward);

        let start = Instant::now();
        let incoming = surface.placement_at(1, start).unwrap();
        assert_eq!(incoming.offset_percent, 100.0);
        assert_eq!(incoming.opacity, 0.0);

        tokio::time::advance(DURATION / 2).await;
        let now = Instant::now();
        assert!(surface.is_animating_at(now));
        let incoming = surface.placement_at(1, now).unwrap();
        let outgoing = surface.placement_at(0, now).unwrap();
        assert!((incoming.offset_percent - 50.0).abs() < 1e-6);
        assert!((outgoing.offset_percent + 50.0).abs() < 1e-6);

        tokio::time::advance(DURATION).await;
        let now = Instant::now();
        assert!(!surface.is_animating_at(now));
        assert_eq!(surface.placement_at(1, now), Some(Placement::NEUTRAL));
        assert_eq!(
            surface.placement_at(0, now),
            Some(Placement::off_screen(-1))
        );

        engine.finish(&mut surface, 0);
        assert_eq!(surface.visible_panels(now), vec![(1, Placement::NEUTRAL)]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_incoming_panel_is_drawn_last_in_both_directions() {
        let engine = TransitionEngine::new(DURATION);

        let mut surface = started_surface(3);
        engine.begin(&mut surface, 0, 1, Direction::Forward);
        tokio::time::advance(DURATION / 2).await;
        let order: Vec<usize> = surface
            .visible_panels(Instant::now())
            .into_iter()
            .map(|(slide, _)| slide)
            .collect();
        assert_eq!(order, vec![0, 1]);

        tokio::time::advance(DURATION).await;
        engine.finish(&mut surface, 0);
        engine.begin(&mut surface, 1, 0, Direction::Backward);
        tokio::time::advance(DURATION / 2).await;
        let order: Vec<usize> = surface
            .visible_panels(Instant::now())
            .into_iter()
            .map(|(slide, _)| slide)
            .collect();
        assert_eq!(order, vec![1, 0]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_flush_coalesces_staging() {
        let mut surface = started_surface(2);
        surface.set_animated(1, false);
        surface.place(1, Placement::off_screen(1));
        // No flush: the animated placement starts from the stale committed state
        surface.set_animated(1, true);
        surface.place(1, Placement::NEUTRAL);

        tokio::time::advance(DURATION / 2).await;
        assert_eq!(
            surface.placement_at(1, Instant::now()),
            Some(Placement::NEUTRAL)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_render_ui_stores_snapshot() {
        let mut surface = TerminalSurface::new(2, DURATION);
        let state = crate::presentation::NavigationState::new(2, 1);
        surface.render_ui(&UiSnapshot::from_state(&state));
        assert_eq!(surface.ui().counter, "2 / 2");
    }
}
