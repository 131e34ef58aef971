//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Player-configurable keys. Everything else is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub hold: char,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self { hold: 'c' }
    }
}

impl KeyBindings {
    /// Map a key event to an action, if it has one.
    ///
    /// Letters match in either case. The hold key wins over the fixed letters,
    /// so binding hold to `z` takes rotate-opposite off that key.
    pub fn action_for(&self, key: KeyEvent) -> Option<GameAction> {
        if let KeyCode::Char(ch) = key.code {
            if ch.eq_ignore_ascii_case(&self.hold) {
                return Some(GameAction::Hold);
            }
        }

        match key.code {
            KeyCode::Left => Some(GameAction::MoveLeft),
            KeyCode::Right => Some(GameAction::MoveRight),
            KeyCode::Down => Some(GameAction::SoftDrop),
            KeyCode::Up => Some(GameAction::RotateCw),
            KeyCode::Char(' ') => Some(GameAction::HardDrop),
            KeyCode::Enter => Some(GameAction::Start),
            KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                'z' => Some(GameAction::RotateCcw),
                'p' => Some(GameAction::Pause),
                'r' => Some(GameAction::Restart),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Map keyboard input to game actions using the default bindings.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    KeyBindings::default().action_for(key)
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
