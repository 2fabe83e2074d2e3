//! Terminal session for the interactive presenter
//!
//! Entering a session switches to raw mode and the alternate screen, hides
//! the cursor and turns on mouse capture (press/release pairs drive swipes,
//! taps and clicks). The terminal is restored by [`TerminalSession::restore`]
//! or, on early exit, when the session is dropped.

use crate::error::AppError;
use crossterm::{
    cursor::{Hide, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use std::io::{Stdout, stdout};

#[derive(Debug, Clone, Default)]
pub struct TerminalOptions {
    /// Stay on the normal screen without raw mode so output can be inspected
    pub debug_mode: bool,
    pub title: Option<String>,
}

pub struct TerminalSession {
    stdout: Stdout,
    options: TerminalOptions,
    active: bool,
}

impl TerminalSession {
    pub fn enter(options: TerminalOptions) -> Result<Self, AppError> {
        let mut out = stdout();

        if let Some(title) = &options.title {
            execute!(out, SetTitle(title))?;
        }

        // From here on Drop undoes whatever was switched on
        let mut session = Self {
            stdout: out,
            options,
            active: true,
        };

        if !session.options.debug_mode {
            enable_raw_mode()?;
            execute!(session.stdout, EnterAlternateScreen, Hide)?;
        }
        execute!(session.stdout, EnableMouseCapture)?;

        tracing::debug!(
            "Terminal session entered (debug mode: {})",
            session.options.debug_mode
        );
        Ok(session)
    }

    /// Writer for rendered frames
    pub fn writer(&mut self) -> &mut Stdout {
        &mut self.stdout
    }

    /// Restores the terminal and reports any failure doing so.
    pub fn restore(mut self) -> Result<(), AppError> {
        self.leave()
    }

    fn leave(&mut self) -> Result<(), AppError> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        execute!(self.stdout, DisableMouseCapture)?;
        if !self.options.debug_mode {
            disable_raw_mode()?;
            execute!(self.stdout, Show, LeaveAlternateScreen)?;
        }
        tracing::debug!("Terminal session restored");
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = self.leave() {
            tracing::error!("Failed to restore terminal: {e}");
        }
    }
}
