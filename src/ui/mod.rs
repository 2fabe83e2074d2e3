pub mod interactive;
pub mod terminal;

pub use interactive::{SessionOptions, render_static, run_interactive_ui};
pub use terminal::{ChromeLayout, TerminalSurface, render_frame};
