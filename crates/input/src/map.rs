//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a game action.
pub fn handle_key_event(key: KeyEvent) -> GameAction {
    if should_quit(key) {
        return GameAction::Quit;
    }

    match key.code {
        // Movement
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => GameAction::MoveLeft,
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => GameAction::MoveRight,
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => GameAction::SoftDrop,

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => GameAction::RotateCw,

        _ => GameAction::AnyKey,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            GameAction::MoveLeft
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            GameAction::MoveRight
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            GameAction::SoftDrop
        );

        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('H'))),
            GameAction::MoveLeft
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('d'))),
            GameAction::MoveRight
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('J'))),
            GameAction::SoftDrop
        );
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            GameAction::RotateCw
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('w'))),
            GameAction::RotateCw
        );
    }

    #[test]
    fn test_unmapped_keys_are_any_key() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            GameAction::AnyKey
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            GameAction::AnyKey
        );
        // Plain 'c' is not quit.
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('c'))),
            GameAction::AnyKey
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
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('Q'))),
            GameAction::Quit
        );
    }
}
