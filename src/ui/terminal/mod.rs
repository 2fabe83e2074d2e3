//! Terminal implementation of the presentation surface
//!
//! - `surface`: interpolating [`TerminalSurface`]
//! - `render`: frame composition and chrome hit testing
//! - `manager`: raw mode, alternate screen and mouse capture
//! - `colors`: teletext palette

pub mod colors;
mod manager;
mod render;
mod surface;

pub use manager::{TerminalOptions, TerminalSession};
pub use render::{ChromeLayout, render_frame};
pub use surface::TerminalSurface;
