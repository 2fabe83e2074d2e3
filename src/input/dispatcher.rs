//! Routes terminal events to the navigation controller.

use super::gesture::{GestureConfig, GestureRecognizer, PointerSample};
use super::keyboard::map_key;
use super::{HitTarget, HitTest, NavCommand};
use crate::presentation::{NavigationController, PresentationSurface};
use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use tokio::time::Instant;

/// Result of dispatching one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A transition was started
    Navigated,
    /// The event mapped to a request that was debounced, or to nothing
    Ignored,
    /// The terminal was resized; the caller should re-layout
    Resized(u16, u16),
    /// The user asked to leave the presentation
    Quit,
}

pub struct InputDispatcher {
    gestures: GestureRecognizer,
    pressed_target: Option<HitTarget>,
}

impl InputDispatcher {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            gestures: GestureRecognizer::new(config),
            pressed_target: None,
        }
    }

    /// Dispatches one terminal event.
    ///
    /// Mouse presses on an indicator or a prev/next control become clicks
    /// when released over the same control. Any other press/release pair
    /// goes through swipe and tap-zone recognition.
    pub fn dispatch<S, H>(
        &mut self,
        event: &Event,
        controller: &mut NavigationController<S>,
        hits: &H,
        screen_width: u16,
    ) -> DispatchOutcome
    where
        S: PresentationSurface,
        H: HitTest + ?Sized,
    {
        let command = match event {
            Event::Key(key_event) => map_key(key_event),
            Event::Mouse(mouse_event) => {
                self.handle_mouse(mouse_event, hits, screen_width, Instant::now())
            }
            Event::Resize(width, height) => {
                self.gestures.cancel();
                self.pressed_target = None;
                return DispatchOutcome::Resized(*width, *height);
            }
            _ => None,
        };

        match command {
            Some(command) => Self::apply(command, controller),
            None => DispatchOutcome::Ignored,
        }
    }

    /// Runs a navigation command against the controller.
    pub fn apply<S: PresentationSurface>(
        command: NavCommand,
        controller: &mut NavigationController<S>,
    ) -> DispatchOutcome {
        let started = match command {
            NavCommand::Relative(delta) => controller.request_relative(delta),
            NavCommand::GoTo(index) => controller.request_go_to(index as isize),
            NavCommand::First => controller.first(),
            NavCommand::Last => controller.last(),
            NavCommand::Quit => return DispatchOutcome::Quit,
        };

        if started.is_some() {
            DispatchOutcome::Navigated
        } else {
            DispatchOutcome::Ignored
        }
    }

    fn handle_mouse<H: HitTest + ?Sized>(
        &mut self,
        mouse_event: &MouseEvent,
        hits: &H,
        screen_width: u16,
        now: Instant,
    ) -> Option<NavCommand> {
        let sample = PointerSample::new(
            f64::from(mouse_event.column),
            f64::from(mouse_event.row),
            now,
        );

        match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pressed_target = hits.hit_test(mouse_event.column, mouse_event.row);
                if self.pressed_target.is_none() {
                    self.gestures.press(sample);
                }
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(pressed) = self.pressed_target.take() {
                    let released = hits.hit_test(mouse_event.column, mouse_event.row);
                    return (released == Some(pressed)).then(|| pressed.command());
                }
                self.gestures.release(sample, f64::from(screen_width))
            }
            _ => None,
        }
    }
}

impl Default for InputDispatcher {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}
