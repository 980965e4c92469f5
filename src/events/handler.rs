//! Event handler for processing input events.

use crate::config::KeyBindings;
use crate::error::Result;
use crate::state::{Action, InputMode, Store};
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::time::Duration;

use super::InputEvent;

/// Handles input events and produces actions.
pub struct EventHandler {
    /// Key bindings.
    keybindings: KeyBindings,
    /// Input mode captured from the store before each poll.
    input_mode: InputMode,
}

impl EventHandler {
    /// Create a new event handler with the given bindings.
    pub fn new(keybindings: KeyBindings) -> Self {
        Self {
            keybindings,
            input_mode: InputMode::Normal,
        }
    }

    /// Update the captured input mode for mode-aware handling.
    pub fn update_store_snapshot(&mut self, store: &Store) {
        self.input_mode = store.app.input_mode;
    }

    /// Get the next action from user input.
    pub async fn next(&mut self) -> Result<Option<Action>> {
        if event::poll(Duration::from_millis(100))? {
            if let CrosstermEvent::Key(key) = event::read()? {
                return Ok(self.handle_key(key));
            }
        }
        Ok(None)
    }

    /// Handle a key event and return an optional action.
    fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        // Only process key press events
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match self.input_mode {
            InputMode::Normal => self.handle_normal_mode(key),
            InputMode::Editing => self.handle_editing_mode(key),
        }
    }

    fn handle_normal_mode(&self, key: KeyEvent) -> Option<Action> {
        let input = InputEvent::from(key);

        if input.matches(&self.keybindings.quit) {
            return Some(Action::Quit);
        }
        if input.matches(&self.keybindings.input) {
            return Some(Action::SetInputMode(InputMode::Editing));
        }
        if input.matches(&self.keybindings.analyze) {
            return Some(Action::SubmitAnalysis);
        }
        if input.matches(&self.keybindings.refresh) {
            return Some(Action::RefreshWatchlist);
        }
        if input.matches(&self.keybindings.portfolio) {
            return Some(Action::RefreshPortfolio);
        }

        None
    }

    fn handle_editing_mode(&self, key: KeyEvent) -> Option<Action> {
        let input = InputEvent::from(key);

        if input.matches(&self.keybindings.back) {
            return Some(Action::SetInputMode(InputMode::Normal));
        }
        if input.matches(&self.keybindings.analyze) {
            return Some(Action::SubmitAnalysis);
        }
        if input.matches("Backspace") {
            return Some(Action::InputBackspace);
        }

        input.char().map(Action::InputChar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn handler(mode: InputMode) -> EventHandler {
        let mut handler = EventHandler::new(KeyBindings::default());
        handler.input_mode = mode;
        handler
    }

    #[test]
    fn test_normal_mode_bindings() {
        let handler = handler(InputMode::Normal);
        assert!(matches!(
            handler.handle_key(press(KeyCode::Char('q'))),
            Some(Action::Quit)
        ));
        assert!(matches!(
            handler.handle_key(press(KeyCode::Char('r'))),
            Some(Action::RefreshWatchlist)
        ));
        assert!(matches!(
            handler.handle_key(press(KeyCode::Enter)),
            Some(Action::SubmitAnalysis)
        ));
    }

    #[test]
    fn test_editing_mode_captures_characters() {
        let handler = handler(InputMode::Editing);
        assert!(matches!(
            handler.handle_key(press(KeyCode::Char('q'))),
            Some(Action::InputChar('q'))
        ));
        assert!(matches!(
            handler.handle_key(press(KeyCode::Backspace)),
            Some(Action::InputBackspace)
        ));
        assert!(matches!(
            handler.handle_key(press(KeyCode::Esc)),
            Some(Action::SetInputMode(InputMode::Normal))
        ));
    }
}
