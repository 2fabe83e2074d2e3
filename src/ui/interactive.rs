//! Interactive presentation session
//!
//! Owns the main loop: polls terminal events, dispatches them to the
//! navigation controller, commits finished transitions and redraws frames
//! while anything is moving.

use super::terminal::{
    ChromeLayout, TerminalOptions, TerminalSession, TerminalSurface, render_frame,
};
use crate::constants::{polling, ui};
use crate::deck::Deck;
use crate::error::AppError;
use crate::input::{DispatchOutcome, GestureConfig, InputDispatcher};
use crate::presentation::{NavigationController, TransitionEngine};
use crossterm::event;
use std::io::Write;
use std::time::Duration;
use tokio::time::Instant;

/// Settings for one presentation session
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// 0-based slide shown first
    pub start: usize,
    pub transition: Duration,
    pub gestures: GestureConfig,
    pub debug_mode: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            start: 0,
            transition: TransitionEngine::default().duration(),
            gestures: GestureConfig::default(),
            debug_mode: false,
        }
    }
}

/// Calculate adaptive polling interval based on user activity
pub(super) fn calculate_poll_interval(time_since_activity: Duration, animating: bool) -> Duration {
    if animating {
        Duration::from_millis(polling::ANIMATING_MS)
    } else if time_since_activity < Duration::from_secs(polling::IDLE_THRESHOLD_SECONDS) {
        Duration::from_millis(polling::ACTIVE_MS)
    } else {
        Duration::from_millis(polling::IDLE_MS)
    }
}

fn new_controller(
    deck: &Deck,
    start: usize,
    transition: Duration,
) -> NavigationController<TerminalSurface> {
    let mut controller = NavigationController::new(
        TerminalSurface::new(deck.len(), transition),
        deck.len(),
        TransitionEngine::new(transition),
    )
    .starting_at(start);
    controller.start();
    controller
}

/// Runs the interactive presenter until the user quits.
/// The terminal is restored even when the session fails.
pub async fn run_interactive_ui(deck: &Deck, options: SessionOptions) -> Result<(), AppError> {
    let mut session = TerminalSession::enter(TerminalOptions {
        debug_mode: options.debug_mode,
        title: Some(format!("{} - TELETEXT DECK", deck.name())),
    })?;

    let result = presentation_loop(deck, &options, session.writer()).await;
    if let Err(e) = &result {
        tracing::error!("Presentation loop failed: {e}");
    }

    session.restore()?;
    result
}

async fn presentation_loop<W: Write>(
    deck: &Deck,
    options: &SessionOptions,
    stdout: &mut W,
) -> Result<(), AppError> {
    let (mut width, mut height) = crossterm::terminal::size()?;
    let mut controller = new_controller(deck, options.start, options.transition);
    let mut dispatcher = InputDispatcher::new(options.gestures);
    let mut layout = ChromeLayout::default();
    let mut needs_render = true;
    let mut last_activity = Instant::now();

    tracing::info!(
        "Presenting '{}' ({} slides) from slide {}",
        deck.name(),
        deck.len(),
        controller.current_index() + 1
    );

    loop {
        let now = Instant::now();
        if controller.poll_completion(now) {
            needs_render = true;
        }

        let animating = controller.is_animating() || controller.surface().is_animating_at(now);
        if needs_render || animating {
            let (frame, frame_layout) =
                render_frame(deck, controller.surface(), now, width, height, true);
            stdout.write_all(frame.as_bytes())?;
            stdout.flush()?;
            layout = frame_layout;
            needs_render = false;
        }

        let poll_interval = calculate_poll_interval(last_activity.elapsed(), animating);
        if !event::poll(poll_interval)? {
            continue;
        }

        let event = event::read()?;
        last_activity = Instant::now();
        match dispatcher.dispatch(&event, &mut controller, &layout, width) {
            DispatchOutcome::Quit => {
                tracing::info!("Quit requested at slide {}", controller.current_index() + 1);
                break;
            }
            DispatchOutcome::Resized(new_width, new_height) => {
                tracing::debug!("Resized to {new_width}x{new_height}");
                width = new_width;
                height = new_height;
                needs_render = true;
            }
            DispatchOutcome::Navigated => needs_render = true,
            DispatchOutcome::Ignored => {}
        }
    }

    Ok(())
}

/// Renders a single slide without a terminal session (`--once`).
pub fn render_static<W: Write>(deck: &Deck, index: usize, out: &mut W) -> Result<(), AppError> {
    let controller = new_controller(deck, index, TransitionEngine::default().duration());
    let (frame, _) = render_frame(
        deck,
        controller.surface(),
        Instant::now(),
        ui::NONINTERACTIVE_WIDTH,
        ui::NONINTERACTIVE_HEIGHT,
        false,
    );
    out.write_all(frame.as_bytes())?;
    writeln!(out)?;
    Ok(())
}
