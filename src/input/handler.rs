use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Direction, Speed};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Direction),
    Start,
    SelectSpeed(Speed),
    ToggleInstructions,
    Restart,
    Quit,
    None,
}

/// Maps raw key events to game actions. Context-free: which actions apply
/// on which screen is decided by the mode.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        if let Some(direction) = Self::direction_for(key.code) {
            return KeyAction::Steer(direction);
        }

        match key.code {
            KeyCode::Enter => KeyAction::Start,
            KeyCode::Char('1') => KeyAction::SelectSpeed(Speed::Fast),
            KeyCode::Char('2') => KeyAction::SelectSpeed(Speed::Medium),
            KeyCode::Char('3') => KeyAction::SelectSpeed(Speed::Slow),
            KeyCode::Char('i' | 'I') => KeyAction::ToggleInstructions,
            KeyCode::Char('r' | 'R') => KeyAction::Restart,
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    /// Arrow keys and WASD both steer.
    fn direction_for(code: KeyCode) -> Option<Direction> {
        match code {
            KeyCode::Up | KeyCode::Char('w' | 'W') => Some(Direction::Up),
            KeyCode::Down | KeyCode::Char('s' | 'S') => Some(Direction::Down),
            KeyCode::Left | KeyCode::Char('a' | 'A') => Some(Direction::Left),
            KeyCode::Right | KeyCode::Char('d' | 'D') => Some(Direction::Right),
            _ => None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
