use crate::app::{Screen, SessionState};
use crate::message::Message;
use crossterm::event::{KeyCode, KeyModifiers};

/// Converts keyboard input to a Message based on the current screen.
pub fn key_to_message(
    state: &SessionState,
    key: KeyCode,
    modifiers: KeyModifiers,
) -> Option<Message> {
    // Ctrl+C force-quits from any screen.
    if modifiers.contains(KeyModifiers::CONTROL) && matches!(key, KeyCode::Char('c' | 'C')) {
        return Some(Message::Quit);
    }

    match state.screen() {
        Screen::Browse => browse_key_to_message(key),
        Screen::Help => help_key_to_message(key),
        Screen::Error => error_key_to_message(key),
    }
}

fn browse_key_to_message(key: KeyCode) -> Option<Message> {
    match key {
        KeyCode::Char('q') => Some(Message::Quit),
        KeyCode::Char('?') => Some(Message::ShowHelp),
        KeyCode::Char('r') => Some(Message::Refresh),
        KeyCode::Tab => Some(Message::SwitchPanel),
        KeyCode::Up => Some(Message::MoveUp),
        KeyCode::Down => Some(Message::MoveDown),
        KeyCode::Enter => Some(Message::Confirm),
        // Reserved for search; not active yet.
        KeyCode::Char('/') => None,
        _ => None,
    }
}

fn help_key_to_message(key: KeyCode) -> Option<Message> {
    match key {
        KeyCode::Esc | KeyCode::Char('q') => Some(Message::DismissHelp),
        _ => None,
    }
}

fn error_key_to_message(key: KeyCode) -> Option<Message> {
    match key {
        KeyCode::Char('r') => Some(Message::Retry),
        KeyCode::Char('q') => Some(Message::Quit),
        _ => None,
    }
}
