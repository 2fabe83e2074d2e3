//! Frame rendering for the terminal surface.
//!
//! The whole screen is composed into a cell grid and written out as one
//! string (double buffering), in the same teletext layout on every frame:
//!
//! ```text
//! row 0          deck title / counter header
//! row 1          progress bar
//! row 2          indicator dots
//! rows 3..h-2    slide panels
//! row h-2        prev button, counter, next button
//! row h-1        footer with key help
//! ```

use super::colors::*;
use super::surface::TerminalSurface;
use crate::constants::ui::{
    BOTTOM_CHROME_ROWS, CONTENT_MARGIN, NEXT_LABEL, PREV_LABEL, TOP_CHROME_ROWS,
};
use crate::deck::{Deck, Slide};
use crate::input::{HitTarget, HitTest};
use crate::presentation::{Placement, UiSnapshot};
use tokio::time::Instant;

const PROGRESS_FILLED: char = '█';
const PROGRESS_EMPTY: char = '░';
const DOT_ACTIVE: char = '●';
const DOT_INACTIVE: char = '○';

/// Column span `[start, end)` on one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    row: u16,
    start: u16,
    end: u16,
}

impl Span {
    fn contains(&self, column: u16, row: u16) -> bool {
        row == self.row && column >= self.start && column < self.end
    }
}

/// Screen positions of the clickable chrome from the last rendered frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChromeLayout {
    indicators: Vec<Span>,
    prev: Option<Span>,
    next: Option<Span>,
}

impl ChromeLayout {
    /// Column of the dot drawn for `slide`, if it fit on screen
    pub fn indicator_column(&self, slide: usize) -> Option<u16> {
        self.indicators.get(slide).map(|span| span.start)
    }

    pub fn indicator_row(&self) -> Option<u16> {
        self.indicators.first().map(|span| span.row)
    }

    pub fn prev_column(&self) -> Option<(u16, u16)> {
        self.prev.map(|span| (span.start, span.row))
    }

    pub fn next_column(&self) -> Option<(u16, u16)> {
        self.next.map(|span| (span.start, span.row))
    }
}

impl HitTest for ChromeLayout {
    fn hit_test(&self, column: u16, row: u16) -> Option<HitTarget> {
        if let Some(index) = self
            .indicators
            .iter()
            .position(|span| span.contains(column, row))
        {
            return Some(HitTarget::Indicator(index));
        }
        if self.prev.is_some_and(|span| span.contains(column, row)) {
            return Some(HitTarget::Previous);
        }
        if self.next.is_some_and(|span| span.contains(column, row)) {
            return Some(HitTarget::Next);
        }
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    fg: u8,
    bg: Option<u8>,
}

impl Cell {
    const BLANK: Cell = Cell {
        ch: ' ',
        fg: 231,
        bg: None,
    };
}

struct Grid {
    width: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    fn new(width: u16, height: u16) -> Self {
        Self {
            width: width as usize,
            cells: vec![vec![Cell::BLANK; width as usize]; height as usize],
        }
    }

    fn height(&self) -> usize {
        self.cells.len()
    }

    /// Writes text starting at a (possibly negative) column, clipping at both edges.
    /// Control characters become blanks so every char occupies exactly one cell.
    fn put_str(&mut self, row: usize, column: isize, text: &str, fg: u8, bg: Option<u8>) {
        let Some(line) = self.cells.get_mut(row) else {
            return;
        };
        for (i, ch) in text.chars().enumerate() {
            let col = column + i as isize;
            if col < 0 {
                continue;
            }
            let Some(cell) = line.get_mut(col as usize) else {
                break;
            };
            let ch = if ch.is_control() { ' ' } else { ch };
            *cell = Cell { ch, fg, bg };
        }
    }

    fn fill_row(&mut self, row: usize, bg: u8) {
        if let Some(line) = self.cells.get_mut(row) {
            for cell in line.iter_mut() {
                cell.bg = Some(bg);
            }
        }
    }

    /// Serializes the grid. `positioned` emits absolute cursor moves for an
    /// interactive screen; otherwise rows are newline separated.
    fn to_ansi(&self, positioned: bool) -> String {
        let mut buffer = String::with_capacity(self.height() * (self.width * 4 + 16));
        if positioned {
            buffer.push_str("\x1b[H"); // Move to home position
            buffer.push_str("\x1b[0J"); // Clear from cursor down
        }

        for (row, line) in self.cells.iter().enumerate() {
            if positioned {
                buffer.push_str(&format!("\x1b[{};1H", row + 1));
            } else if row > 0 {
                buffer.push('\n');
            }

            let mut current: Option<(u8, Option<u8>)> = None;
            for cell in line {
                if current != Some((cell.fg, cell.bg)) {
                    buffer.push_str("\x1b[0m");
                    if let Some(bg) = cell.bg {
                        buffer.push_str(&format!("\x1b[48;5;{bg}m"));
                    }
                    buffer.push_str(&format!("\x1b[38;5;{}m", cell.fg));
                    current = Some((cell.fg, cell.bg));
                }
                buffer.push(cell.ch);
            }
            buffer.push_str("\x1b[0m");
        }
        buffer
    }
}

/// Renders one frame of the presentation.
///
/// Returns the ANSI text to write and the chrome layout for hit testing.
pub fn render_frame(
    deck: &Deck,
    surface: &TerminalSurface,
    now: Instant,
    width: u16,
    height: u16,
    positioned: bool,
) -> (String, ChromeLayout) {
    let mut grid = Grid::new(width, height);
    let ui = surface.ui();
    let mut layout = ChromeLayout::default();

    if height < TOP_CHROME_ROWS + BOTTOM_CHROME_ROWS + 1 || width < 20 {
        grid.put_str(0, 0, "Terminal too small", get_ansi_code(text_fg(), 231), None);
        return (grid.to_ansi(positioned), layout);
    }

    render_header(&mut grid, deck.name(), ui);
    render_progress(&mut grid, ui);
    layout.indicators = render_indicators(&mut grid, ui);

    let content_top = TOP_CHROME_ROWS as usize;
    let content_height = (height - TOP_CHROME_ROWS - BOTTOM_CHROME_ROWS) as usize;
    for (index, placement) in surface.visible_panels(now) {
        if let Some(slide) = deck.get(index) {
            render_panel(&mut grid, slide, placement, content_top, content_height);
        }
    }

    let (prev, next) = render_controls(&mut grid, ui, height as usize - 2);
    layout.prev = Some(prev);
    layout.next = Some(next);
    render_footer(&mut grid, ui, height as usize - 1);

    (grid.to_ansi(positioned), layout)
}

fn render_header(grid: &mut Grid, deck_name: &str, ui: &UiSnapshot) {
    let title_bg = get_ansi_code(title_bg(), 46);
    let header_bg = get_ansi_code(header_bg(), 21);
    let width = grid.width;

    grid.fill_row(0, header_bg);
    let title: String = deck_name.chars().take(20).collect();
    grid.put_str(0, 0, &format!("{title:<20}"), get_ansi_code(title_fg(), 21), Some(title_bg));

    let counter = format!("SIVU {} ", ui.counter);
    let column = width.saturating_sub(counter.chars().count()) as isize;
    grid.put_str(0, column.max(20), &counter, get_ansi_code(text_fg(), 231), Some(header_bg));
}

fn render_progress(grid: &mut Grid, ui: &UiSnapshot) {
    let width = grid.width;
    let filled = ((ui.progress_percent / 100.0) * width as f64).round() as usize;
    let bar: String = (0..width)
        .map(|i| if i < filled { PROGRESS_FILLED } else { PROGRESS_EMPTY })
        .collect();
    grid.put_str(1, 0, &bar, get_ansi_code(progress_fg(), 51), None);
}

fn render_indicators(grid: &mut Grid, ui: &UiSnapshot) -> Vec<Span> {
    let count = ui.indicators.len();
    if count == 0 {
        return Vec::new();
    }
    // Dots are two cells apart; drop the ones that do not fit
    let needed = count * 2 - 1;
    let start = grid.width.saturating_sub(needed) / 2;
    let row = 2u16;

    let mut spans = Vec::with_capacity(count);
    for (i, &active) in ui.indicators.iter().enumerate() {
        let column = start + i * 2;
        if column >= grid.width {
            break;
        }
        let (ch, fg) = if active {
            (DOT_ACTIVE, get_ansi_code(indicator_active_fg(), 201))
        } else {
            (DOT_INACTIVE, get_ansi_code(text_fg(), 231))
        };
        grid.put_str(row as usize, column as isize, &ch.to_string(), fg, None);
        spans.push(Span {
            row,
            start: column as u16,
            end: column as u16 + 1,
        });
    }
    spans
}

fn render_panel(
    grid: &mut Grid,
    slide: &Slide,
    placement: Placement,
    content_top: usize,
    content_height: usize,
) {
    let offset = (placement.offset_percent / 100.0 * grid.width as f64).round() as isize;
    let left = offset + CONTENT_MARGIN as isize;
    let body_fg = faded(get_ansi_code(text_fg(), 231), placement.opacity);
    let title_fg = faded(get_ansi_code(slide_title_fg(), 226), placement.opacity);

    let mut row = content_top + 1;
    let last_row = content_top + content_height;

    if let Some(title) = &slide.title {
        if let Some(fg) = title_fg {
            grid.put_str(row, left, &title.to_uppercase(), fg, None);
        }
        row += 2;
    }

    let Some(fg) = body_fg else {
        return;
    };
    for line in &slide.body {
        if row >= last_row {
            break;
        }
        grid.put_str(row, left, line, fg, None);
        row += 1;
    }
}

fn render_controls(grid: &mut Grid, ui: &UiSnapshot, row: usize) -> (Span, Span) {
    let width = grid.width;
    let enabled = get_ansi_code(control_fg(), 46);
    let disabled = get_ansi_code(disabled_fg(), 240);

    let prev_fg = if ui.prev_disabled { disabled } else { enabled };
    let next_fg = if ui.next_disabled { disabled } else { enabled };

    let prev_start = 1usize;
    grid.put_str(row, prev_start as isize, PREV_LABEL, prev_fg, None);

    let counter_len = ui.counter.chars().count();
    let counter_start = width.saturating_sub(counter_len) / 2;
    grid.put_str(row, counter_start as isize, &ui.counter, get_ansi_code(text_fg(), 231), None);

    let next_len = NEXT_LABEL.chars().count();
    let next_start = width.saturating_sub(next_len + 1);
    grid.put_str(row, next_start as isize, NEXT_LABEL, next_fg, None);

    let row = row as u16;
    (
        Span {
            row,
            start: prev_start as u16,
            end: (prev_start + PREV_LABEL.chars().count()) as u16,
        },
        Span {
            row,
            start: next_start as u16,
            end: (next_start + next_len) as u16,
        },
    )
}

fn render_footer(grid: &mut Grid, ui: &UiSnapshot, row: usize) {
    let header_bg = get_ansi_code(header_bg(), 21);
    grid.fill_row(row, header_bg);

    let text = format!("q=Lopeta ←→=Sivut Home/End  {}", ui.counter);
    let column = grid.width.saturating_sub(text.chars().count()) / 2;
    grid.put_str(row, column as isize, &text, get_ansi_code(text_fg(), 231), Some(header_bg));
}
