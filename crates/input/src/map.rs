//! Key mapping from terminal events to player intents.

use crate::types::Intent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key to the intent it stands for.
pub fn map_key(key: KeyEvent) -> Option<Intent> {
    if should_quit(key) {
        return Some(Intent::Quit);
    }
    match key.code {
        KeyCode::Char(' ')
        | KeyCode::Up
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('k')
        | KeyCode::Char('K') => Some(Intent::Jump),
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => Some(Intent::Restart),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_keys() {
        for code in [KeyCode::Char(' '), KeyCode::Up, KeyCode::Char('W'), KeyCode::Char('k')] {
            assert_eq!(map_key(KeyEvent::from(code)), Some(Intent::Jump));
        }
    }

    #[test]
    fn test_restart_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('r'))),
            Some(Intent::Restart)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('R'))),
            Some(Intent::Restart)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Intent::Quit)
        );
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Left)), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }
}
