use crate::deck::{Deck, Slide};
use crate::presentation::{Placement, PresentationSurface, UiSnapshot};

/// One recorded call on a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    SetAnimated(usize, bool),
    Place(usize, Placement),
    FlushLayout,
    SetActive(usize, bool),
    Reset(usize),
    RenderUi(UiSnapshot),
}

/// Presentation surface that records every call and tracks the resulting
/// per-slide state, for testing navigation without a terminal.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
    active: Vec<bool>,
    placements: Vec<Option<Placement>>,
    last_ui: Option<UiSnapshot>,
}

impl RecordingSurface {
    pub fn new(slides: usize) -> Self {
        Self {
            ops: Vec::new(),
            active: vec![false; slides],
            placements: vec![None; slides],
            last_ui: None,
        }
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    pub fn is_active(&self, slide: usize) -> bool {
        self.active.get(slide).copied().unwrap_or(false)
    }

    /// Indices of all slides currently carrying the active marker
    pub fn active_slides(&self) -> Vec<usize> {
        self.active
            .iter()
            .enumerate()
            .filter_map(|(i, &active)| active.then_some(i))
            .collect()
    }

    /// Placement override of a slide, `None` after a reset
    pub fn placement(&self, slide: usize) -> Option<Placement> {
        self.placements.get(slide).copied().flatten()
    }

    pub fn last_ui(&self) -> Option<&UiSnapshot> {
        self.last_ui.as_ref()
    }
}

impl PresentationSurface for RecordingSurface {
    fn set_animated(&mut self, slide: usize, animated: bool) {
        self.ops.push(SurfaceOp::SetAnimated(slide, animated));
    }

    fn place(&mut self, slide: usize, placement: Placement) {
        if let Some(slot) = self.placements.get_mut(slide) {
            *slot = Some(placement);
        }
        self.ops.push(SurfaceOp::Place(slide, placement));
    }

    fn flush_layout(&mut self) {
        self.ops.push(SurfaceOp::FlushLayout);
    }

    fn set_active(&mut self, slide: usize, active: bool) {
        if let Some(slot) = self.active.get_mut(slide) {
            *slot = active;
        }
        self.ops.push(SurfaceOp::SetActive(slide, active));
    }

    fn reset(&mut self, slide: usize) {
        if let Some(slot) = self.placements.get_mut(slide) {
            *slot = None;
        }
        self.ops.push(SurfaceOp::Reset(slide));
    }

    fn render_ui(&mut self, ui: &UiSnapshot) {
        self.last_ui = Some(ui.clone());
        self.ops.push(SurfaceOp::RenderUi(ui.clone()));
    }
}

/// Builds a deck of `count` numbered slides
pub fn numbered_deck(count: usize) -> Deck {
    let slides = (1..=count)
        .map(|i| {
            Slide::new(
                Some(format!("Slide {i}")),
                vec![format!("Body of slide {i}")],
            )
        })
        .collect();
    Deck::new("test", slides)
}
