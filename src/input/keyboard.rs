//! Keyboard mapping.

use super::NavCommand;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Maps a key press to a navigation command.
///
/// Returns `None` for keys the presenter does not claim; those are left
/// alone. Key release and repeat events are ignored so a held key cannot
/// queue transitions.
pub fn map_key(key_event: &KeyEvent) -> Option<NavCommand> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    match key_event.code {
        KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => Some(NavCommand::Relative(1)),
        KeyCode::Left | KeyCode::Up => Some(NavCommand::Relative(-1)),
        KeyCode::Home => Some(NavCommand::First),
        KeyCode::End => Some(NavCommand::Last),
        KeyCode::Char('q') | KeyCode::Esc => Some(NavCommand::Quit),
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(NavCommand::Quit)
        }
        _ => None,
    }
}
