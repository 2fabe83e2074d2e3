//! Slide navigation core
//!
//! This module is organized into focused submodules:
//! - `state`: current index and animating flag with the debounce rules
//! - `transition`: the stateless slide/fade transition engine
//! - `surface`: the abstract presentation surface the engine draws through
//! - `sync`: progress, counter and indicator state derived after each commit
//! - `controller`: the session-owned controller tying them together

mod controller;
mod state;
mod surface;
mod sync;
mod transition;

pub use controller::{NavigationController, TransitionHandle};
pub use state::{NavigationState, Rejection};
pub use surface::{Placement, PresentationSurface};
pub use sync::UiSnapshot;
pub use transition::{Direction, TransitionEngine};
