use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::time::Duration;
use teletext_deck::deck::Deck;
use teletext_deck::input::{DispatchOutcome, GestureConfig, HitTarget, HitTest, InputDispatcher};
use teletext_deck::presentation::{NavigationController, TransitionEngine};
use teletext_deck::testing_utils::{RecordingSurface, numbered_deck};
use teletext_deck::ui::{TerminalSurface, render_frame};
use tokio::time::Instant;

const SCREEN_WIDTH: u16 = 200;

/// Hit tester for a screen with no clickable chrome
struct NoChrome;

impl HitTest for NoChrome {
    fn hit_test(&self, _column: u16, _row: u16) -> Option<HitTarget> {
        None
    }
}

fn controller_at(total: usize, start: usize) -> NavigationController<RecordingSurface> {
    let mut controller =
        NavigationController::new(RecordingSurface::new(total), total, TransitionEngine::default())
            .starting_at(start);
    controller.start();
    controller
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn drag(
    dispatcher: &mut InputDispatcher,
    controller: &mut NavigationController<RecordingSurface>,
    from: (u16, u16),
    to: (u16, u16),
) -> DispatchOutcome {
    let down = mouse(MouseEventKind::Down(MouseButton::Left), from.0, from.1);
    let up = mouse(MouseEventKind::Up(MouseButton::Left), to.0, to.1);
    assert_eq!(
        dispatcher.dispatch(&down, controller, &NoChrome, SCREEN_WIDTH),
        DispatchOutcome::Ignored
    );
    dispatcher.dispatch(&up, controller, &NoChrome, SCREEN_WIDTH)
}

/// Forward key four times from the first of five slides lands on the last slide
#[tokio::test(start_paused = true)]
async fn test_forward_key_through_whole_deck() {
    let mut controller = controller_at(5, 0);
    let mut dispatcher = InputDispatcher::default();

    for _ in 0..4 {
        let outcome = dispatcher.dispatch(&key(KeyCode::Right), &mut controller, &NoChrome, 80);
        assert_eq!(outcome, DispatchOutcome::Navigated);
        assert!(controller.settle().await);
    }

    assert_eq!(controller.current_index(), 4);
    let ui = controller.surface().last_ui().unwrap();
    assert_eq!(ui.counter, "5 / 5");
    assert!(ui.next_disabled);
    assert!(!ui.prev_disabled);
    assert_eq!(ui.progress_percent, 100.0);

    // Past the end nothing happens
    let outcome = dispatcher.dispatch(&key(KeyCode::Char(' ')), &mut controller, &NoChrome, 80);
    assert_eq!(outcome, DispatchOutcome::Ignored);
    assert!(!controller.is_animating());
}

/// Leftward horizontal swipe advances one slide
#[tokio::test(start_paused = true)]
async fn test_leftward_swipe_advances() {
    let mut controller = controller_at(5, 0);
    let mut dispatcher = InputDispatcher::default();

    let outcome = drag(&mut dispatcher, &mut controller, (120, 10), (60, 15));
    assert_eq!(outcome, DispatchOutcome::Navigated);
    controller.settle().await;
    assert_eq!(controller.current_index(), 1);
}

/// Rightward swipe goes back, vertical drags do nothing
#[tokio::test(start_paused = true)]
async fn test_rightward_and_vertical_swipes() {
    let mut controller = controller_at(5, 2);
    let mut dispatcher = InputDispatcher::default();

    drag(&mut dispatcher, &mut controller, (60, 10), (120, 12));
    controller.settle().await;
    assert_eq!(controller.current_index(), 1);

    // Mostly vertical, released in the middle band: no swipe, no tap zone
    let outcome = drag(&mut dispatcher, &mut controller, (100, 2), (100, 40));
    assert_eq!(outcome, DispatchOutcome::Ignored);
    assert_eq!(controller.current_index(), 1);
}

/// A swipe slower than the configured maximum is not a swipe
#[tokio::test(start_paused = true)]
async fn test_slow_drag_is_not_a_swipe() {
    let mut controller = controller_at(5, 0);
    let mut dispatcher = InputDispatcher::new(GestureConfig::default());

    let down = mouse(MouseEventKind::Down(MouseButton::Left), 130, 10);
    dispatcher.dispatch(&down, &mut controller, &NoChrome, SCREEN_WIDTH);
    tokio::time::advance(Duration::from_millis(800)).await;
    let up = mouse(MouseEventKind::Up(MouseButton::Left), 70, 10);
    let outcome = dispatcher.dispatch(&up, &mut controller, &NoChrome, SCREEN_WIDTH);

    // Released at x=70, inside the middle band
    assert_eq!(outcome, DispatchOutcome::Ignored);
    assert_eq!(controller.current_index(), 0);
}

/// Taps in the outer quarters move backward and forward
#[tokio::test(start_paused = true)]
async fn test_tap_zones() {
    let mut controller = controller_at(5, 2);
    let mut dispatcher = InputDispatcher::default();

    let left = SCREEN_WIDTH / 10;
    drag(&mut dispatcher, &mut controller, (left, 10), (left, 10));
    controller.settle().await;
    assert_eq!(controller.current_index(), 1);

    let mut controller = controller_at(5, 2);
    let right = SCREEN_WIDTH / 10 * 9;
    drag(&mut dispatcher, &mut controller, (right, 10), (right, 10));
    controller.settle().await;
    assert_eq!(controller.current_index(), 3);

    // Middle of the screen is not a tap zone
    let mut controller = controller_at(5, 2);
    let outcome = drag(&mut dispatcher, &mut controller, (100, 10), (100, 10));
    assert_eq!(outcome, DispatchOutcome::Ignored);
}

/// Input during an animation is debounced across every input kind
#[tokio::test(start_paused = true)]
async fn test_input_during_transition_is_debounced() {
    let mut controller = controller_at(5, 0);
    let mut dispatcher = InputDispatcher::default();

    dispatcher.dispatch(&key(KeyCode::Right), &mut controller, &NoChrome, SCREEN_WIDTH);
    assert!(controller.is_animating());

    assert_eq!(
        dispatcher.dispatch(&key(KeyCode::End), &mut controller, &NoChrome, SCREEN_WIDTH),
        DispatchOutcome::Ignored
    );
    let right = SCREEN_WIDTH - 5;
    assert_eq!(
        drag(&mut dispatcher, &mut controller, (right, 10), (right, 10)),
        DispatchOutcome::Ignored
    );

    controller.settle().await;
    assert_eq!(controller.current_index(), 1);
}

/// Home and End jump to the ends of the deck
#[tokio::test(start_paused = true)]
async fn test_home_and_end() {
    let mut controller = controller_at(6, 2);
    let mut dispatcher = InputDispatcher::default();

    dispatcher.dispatch(&key(KeyCode::End), &mut controller, &NoChrome, SCREEN_WIDTH);
    controller.settle().await;
    assert_eq!(controller.current_index(), 5);

    dispatcher.dispatch(&key(KeyCode::Home), &mut controller, &NoChrome, SCREEN_WIDTH);
    controller.settle().await;
    assert_eq!(controller.current_index(), 0);
    assert!(controller.surface().last_ui().unwrap().prev_disabled);
}

fn terminal_controller(deck: &Deck) -> NavigationController<TerminalSurface> {
    let duration = TransitionEngine::default().duration();
    let mut controller = NavigationController::new(
        TerminalSurface::new(deck.len(), duration),
        deck.len(),
        TransitionEngine::new(duration),
    );
    controller.start();
    controller
}

/// Clicking a rendered indicator dot jumps to that slide
#[tokio::test(start_paused = true)]
async fn test_indicator_click_on_rendered_frame() {
    let deck = numbered_deck(5);
    let mut controller = terminal_controller(&deck);
    let mut dispatcher = InputDispatcher::default();

    let (_, layout) = render_frame(&deck, controller.surface(), Instant::now(), 80, 24, true);
    let column = layout.indicator_column(3).unwrap();
    let row = layout.indicator_row().unwrap();

    let down = mouse(MouseEventKind::Down(MouseButton::Left), column, row);
    let up = mouse(MouseEventKind::Up(MouseButton::Left), column, row);
    dispatcher.dispatch(&down, &mut controller, &layout, 80);
    let outcome = dispatcher.dispatch(&up, &mut controller, &layout, 80);
    assert_eq!(outcome, DispatchOutcome::Navigated);

    controller.settle().await;
    assert_eq!(controller.current_index(), 3);
    assert_eq!(controller.surface().ui().counter, "4 / 5");
    assert!(controller.surface().is_active(3));
    assert!(!controller.surface().is_active(0));
}

/// The rendered prev and next buttons navigate, but prev is inert on the first slide
#[tokio::test(start_paused = true)]
async fn test_prev_next_buttons_on_rendered_frame() {
    let deck = numbered_deck(3);
    let mut controller = terminal_controller(&deck);
    let mut dispatcher = InputDispatcher::default();

    let (_, layout) = render_frame(&deck, controller.surface(), Instant::now(), 80, 24, true);
    let (prev_col, prev_row) = layout.prev_column().unwrap();
    let (next_col, next_row) = layout.next_column().unwrap();

    let click = |dispatcher: &mut InputDispatcher,
                 controller: &mut NavigationController<TerminalSurface>,
                 column: u16,
                 row: u16| {
        dispatcher.dispatch(
            &mouse(MouseEventKind::Down(MouseButton::Left), column, row),
            controller,
            &layout,
            80,
        );
        dispatcher.dispatch(
            &mouse(MouseEventKind::Up(MouseButton::Left), column, row),
            controller,
            &layout,
            80,
        )
    };

    assert_eq!(
        click(&mut dispatcher, &mut controller, prev_col, prev_row),
        DispatchOutcome::Ignored
    );
    assert_eq!(
        click(&mut dispatcher, &mut controller, next_col, next_row),
        DispatchOutcome::Navigated
    );
    controller.settle().await;
    assert_eq!(controller.current_index(), 1);
}

/// Mid-transition both panels are on screen, and only the target remains afterwards
#[tokio::test(start_paused = true)]
async fn test_terminal_surface_animates_both_panels() {
    let deck = numbered_deck(3);
    let mut controller = terminal_controller(&deck);

    controller.request_relative(1);
    tokio::time::advance(Duration::from_millis(290)).await;
    let now = Instant::now();
    let visible: Vec<usize> = controller
        .surface()
        .visible_panels(now)
        .into_iter()
        .map(|(slide, _)| slide)
        .collect();
    assert!(visible.contains(&0));
    assert!(visible.contains(&1));
    assert!(controller.surface().is_animating_at(now));

    tokio::time::advance(Duration::from_millis(290)).await;
    assert!(controller.poll_completion(Instant::now()));
    let visible: Vec<usize> = controller
        .surface()
        .visible_panels(Instant::now())
        .into_iter()
        .map(|(slide, _)| slide)
        .collect();
    assert_eq!(visible, vec![1]);
}
