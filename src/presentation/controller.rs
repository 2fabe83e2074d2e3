//! The navigation controller: one owned object per presentation session.
//!
//! Requests are validated against [`NavigationState`], handed to the
//! [`TransitionEngine`], and committed once the transition deadline passes.
//! There are no ambient globals; every mutation goes through this type.

use super::state::NavigationState;
use super::surface::{Placement, PresentationSurface};
use super::sync::UiSnapshot;
use super::transition::{Direction, TransitionEngine};
use tokio::time::Instant;
use tracing::debug;

/// Completion handle of the in-flight transition. It cannot be cancelled:
/// once started, the transition commits at `deadline`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionHandle {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
    pub deadline: Instant,
}

pub struct NavigationController<S: PresentationSurface> {
    state: NavigationState,
    engine: TransitionEngine,
    surface: S,
    in_flight: Option<TransitionHandle>,
}

impl<S: PresentationSurface> NavigationController<S> {
    pub fn new(surface: S, total_slides: usize, engine: TransitionEngine) -> Self {
        Self {
            state: NavigationState::new(total_slides, 0),
            engine,
            surface,
            in_flight: None,
        }
    }

    /// Sets the resting slide before [`start`](Self::start). Clamped into the deck.
    pub fn starting_at(mut self, index: usize) -> Self {
        self.state = NavigationState::new(self.state.total_slides(), index);
        self
    }

    /// Shows the current slide as active and performs the initial UI sync.
    pub fn start(&mut self) {
        let current = self.state.current_index();
        if self.state.total_slides() > 0 {
            self.surface.set_animated(current, false);
            self.surface.place(current, Placement::NEUTRAL);
            self.surface.set_active(current, true);
            self.surface.flush_layout();
        }
        self.sync_ui();
        debug!(
            "Presentation started at slide {} of {}",
            current + 1,
            self.state.total_slides()
        );
    }

    /// Starts a transition to `index` unless it is debounced.
    ///
    /// Ignored while a transition is in flight, when `index` is the current
    /// slide, or when `index` is outside the deck.
    pub fn request_go_to(&mut self, index: isize) -> Option<TransitionHandle> {
        let (target, direction) = match self.state.validate(index) {
            Ok(accepted) => accepted,
            Err(reason) => {
                debug!("Ignoring navigation to {index}: {reason:?}");
                return None;
            }
        };

        let from = self.state.current_index();
        self.state.begin_transition();
        self.engine.begin(&mut self.surface, from, target, direction);

        let handle = TransitionHandle {
            from,
            to: target,
            direction,
            deadline: Instant::now() + self.engine.duration(),
        };
        self.in_flight = Some(handle);
        debug!("Transition {} -> {} started ({direction:?})", from + 1, target + 1);
        Some(handle)
    }

    /// Sugar for `request_go_to(current + delta)`.
    pub fn request_relative(&mut self, delta: isize) -> Option<TransitionHandle> {
        let target = self.state.current_index() as isize + delta;
        self.request_go_to(target)
    }

    pub fn first(&mut self) -> Option<TransitionHandle> {
        self.request_go_to(0)
    }

    pub fn last(&mut self) -> Option<TransitionHandle> {
        let last = self.state.total_slides() as isize - 1;
        self.request_go_to(last)
    }

    /// Commits the in-flight transition if its deadline has passed.
    /// Returns true when a transition was committed.
    pub fn poll_completion(&mut self, now: Instant) -> bool {
        match self.in_flight {
            Some(handle) if now >= handle.deadline => {
                self.complete(handle);
                true
            }
            _ => false,
        }
    }

    /// Waits for the in-flight transition, if any, and commits it.
    pub async fn settle(&mut self) -> bool {
        let Some(handle) = self.in_flight else {
            return false;
        };
        tokio::time::sleep_until(handle.deadline).await;
        self.complete(handle);
        true
    }

    fn complete(&mut self, handle: TransitionHandle) {
        self.in_flight = None;
        self.engine.finish(&mut self.surface, handle.from);
        self.state.commit(handle.to);
        self.sync_ui();
        debug!("Transition committed at slide {}", handle.to + 1);
    }

    fn sync_ui(&mut self) {
        let ui = UiSnapshot::from_state(&self.state);
        self.surface.render_ui(&ui);
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn total_slides(&self) -> usize {
        self.state.total_slides()
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    pub fn pending(&self) -> Option<&TransitionHandle> {
        self.in_flight.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::{RecordingSurface, SurfaceOp};
    use std::time::Duration;

    fn controller(total: usize) -> NavigationController<RecordingSurface> {
        let mut controller = NavigationController::new(
            RecordingSurface::new(total),
            total,
            TransitionEngine::default(),
        );
        controller.start();
        controller
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_renders_first_slide() {
        let controller = controller(4);
        let surface = controller.surface();
        assert_eq!(surface.active_slides(), vec![0]);
        assert_eq!(surface.last_ui().unwrap().counter, "1 / 4");
        assert!(surface.last_ui().unwrap().prev_disabled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_go_to_every_index() {
        for target in 0..5 {
            for start in 0..5 {
                let mut controller = controller(5);
                controller.request_go_to(start as isize);
                controller.settle().await;

                controller.request_go_to(target as isize);
                controller.settle().await;

                assert_eq!(controller.current_index(), target);
                assert_eq!(controller.surface().active_slides(), vec![target]);
                assert!(!controller.is_animating());
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_same_index_is_noop() {
        let mut controller = controller(3);
        controller.surface_mut().clear_ops();

        assert!(controller.request_go_to(0).is_none());
        assert!(!controller.is_animating());
        assert!(controller.surface().ops().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_out_of_range_is_noop() {
        let mut controller = controller(3);
        controller.surface_mut().clear_ops();

        assert!(controller.request_go_to(-1).is_none());
        assert!(controller.request_go_to(3).is_none());
        assert!(controller.request_relative(-1).is_none());
        assert_eq!(controller.current_index(), 0);
        assert!(controller.surface().ops().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_requests_during_transition_are_ignored() {
        let mut controller = controller(5);
        let handle = controller.request_relative(1).unwrap();
        assert!(controller.is_animating());

        assert!(controller.request_relative(1).is_none());
        assert!(controller.request_go_to(4).is_none());
        assert!(controller.last().is_none());
        assert_eq!(controller.current_index(), 0);
        assert_eq!(controller.pending(), Some(&handle));

        controller.settle().await;
        assert_eq!(controller.current_index(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_completion_waits_for_duration() {
        let mut controller = controller(3);
        let handle = controller.request_go_to(2).unwrap();
        assert_eq!(handle.direction, Direction::Forward);

        tokio::time::advance(Duration::from_millis(579)).await;
        assert!(!controller.poll_completion(Instant::now()));
        assert!(controller.is_animating());
        // The outgoing slide keeps its overrides until the duration has elapsed
        assert!(!controller.surface().ops().contains(&SurfaceOp::Reset(0)));
        assert!(controller.surface().is_active(0));
        assert_eq!(
            controller.surface().placement(0),
            Some(Placement::off_screen(-1))
        );

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(controller.poll_completion(Instant::now()));
        assert_eq!(controller.current_index(), 2);
        assert!(!controller.is_animating());
        assert!(controller.surface().ops().contains(&SurfaceOp::Reset(0)));
        assert!(!controller.surface().is_active(0));
        assert_eq!(controller.surface().placement(0), None);
        assert!(!controller.poll_completion(Instant::now()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_settle_without_transition() {
        let mut controller = controller(2);
        assert!(!controller.settle().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ui_sync_only_after_commit() {
        let mut controller = controller(3);
        controller.surface_mut().clear_ops();
        controller.request_relative(1);

        assert!(
            !controller
                .surface()
                .ops()
                .iter()
                .any(|op| matches!(op, SurfaceOp::RenderUi(_)))
        );

        controller.settle().await;
        let ui = controller.surface().last_ui().unwrap();
        assert_eq!(ui.counter, "2 / 3");
        assert_eq!(ui.active_indicator(), Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_and_last() {
        let mut controller = controller(5);
        controller.last();
        controller.settle().await;
        assert_eq!(controller.current_index(), 4);
        assert!(controller.surface().last_ui().unwrap().next_disabled);

        let handle = controller.first().unwrap();
        assert_eq!(handle.direction, Direction::Backward);
        controller.settle().await;
        assert_eq!(controller.current_index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_starting_at_is_clamped() {
        let mut controller =
            NavigationController::new(RecordingSurface::new(3), 3, TransitionEngine::default())
                .starting_at(7);
        controller.start();
        assert_eq!(controller.current_index(), 2);
        assert_eq!(controller.surface().active_slides(), vec![2]);
    }
}
