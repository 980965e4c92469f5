//! Input event types and key matching.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Simplified key representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Tab,
    Up,
    Down,
    Other,
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Tab => Key::Tab,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            _ => Key::Other,
        }
    }
}

/// A processed input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub key: Key,
    pub ctrl: bool,
}

impl From<KeyEvent> for InputEvent {
    fn from(event: KeyEvent) -> Self {
        Self {
            key: Key::from(event.code),
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
        }
    }
}

impl InputEvent {
    /// Get the character if this is a character input.
    pub fn char(&self) -> Option<char> {
        match self.key {
            Key::Char(c) => Some(c),
            _ => None,
        }
    }

    /// Check if this matches a key binding string (e.g., "Ctrl+q", "Enter").
    pub fn matches(&self, binding: &str) -> bool {
        let (expected_ctrl, name) = match binding.split_once('+') {
            Some((modifier, rest)) if modifier.eq_ignore_ascii_case("ctrl") => (true, rest),
            _ => (false, binding),
        };

        if self.ctrl != expected_ctrl {
            return false;
        }

        match name.to_lowercase().as_str() {
            "enter" => self.key == Key::Enter,
            "esc" | "escape" => self.key == Key::Escape,
            "backspace" => self.key == Key::Backspace,
            "tab" => self.key == Key::Tab,
            "up" => self.key == Key::Up,
            "down" => self.key == Key::Down,
            s if s.chars().count() == 1 => {
                let c = s.chars().next().unwrap();
                self.key == Key::Char(c) || self.key == Key::Char(c.to_ascii_uppercase())
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_named_and_char_bindings() {
        let enter = InputEvent {
            key: Key::Enter,
            ctrl: false,
        };
        assert!(enter.matches("Enter"));
        assert!(!enter.matches("Esc"));

        let q = InputEvent {
            key: Key::Char('q'),
            ctrl: false,
        };
        assert!(q.matches("q"));
        assert!(!q.matches("Ctrl+q"));

        let ctrl_q = InputEvent {
            key: Key::Char('q'),
            ctrl: true,
        };
        assert!(ctrl_q.matches("Ctrl+q"));
    }
}
