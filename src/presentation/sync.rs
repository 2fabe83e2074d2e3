//! Presentation UI sync: progress, counters, indicators and control state
//! derived from the navigation state.

use super::state::NavigationState;

#[derive(Debug, Clone, PartialEq)]
pub struct UiSnapshot {
    /// `(current + 1) / total * 100`
    pub progress_percent: f64,
    /// `"{current + 1} / {total}"`
    pub counter: String,
    /// One entry per slide, true only for the current one
    pub indicators: Vec<bool>,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl UiSnapshot {
    pub fn from_state(state: &NavigationState) -> Self {
        let current = state.current_index();
        let total = state.total_slides();

        // An empty deck has no current slide to count
        let (position, progress_percent) = if total == 0 {
            (0, 0.0)
        } else {
            (current + 1, (current + 1) as f64 / total as f64 * 100.0)
        };

        Self {
            progress_percent,
            counter: format!("{position} / {total}"),
            indicators: (0..total).map(|i| i == current).collect(),
            prev_disabled: state.is_first(),
            next_disabled: state.is_last(),
        }
    }

    /// Index of the active indicator
    pub fn active_indicator(&self) -> Option<usize> {
        self.indicators.iter().position(|&active| active)
    }
}

impl Default for UiSnapshot {
    fn default() -> Self {
        Self {
            progress_percent: 0.0,
            counter: String::new(),
            indicators: Vec::new(),
            prev_disabled: true,
            next_disabled: true,
        }
    }
}
