//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings alongside arrow and paging keys.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Only code and modifiers take part in the lookup. Terminals disagree on
    /// whether shifted symbols such as `+` or `?` carry SHIFT, so a character
    /// key that misses with SHIFT is retried without it.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        let normalized = KeyEvent::new(key.code, key.modifiers);
        if let Some(action) = self.bindings.get(&normalized) {
            return Some(*action);
        }

        match key.code {
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::SHIFT) => {
                let unshifted =
                    KeyEvent::new(key.code, key.modifiers.difference(KeyModifiers::SHIFT));
                self.bindings.get(&unshifted).copied()
            }
            _ => None,
        }
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };

        // Line scrolling
        keys.bind(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::ScrollDown);
        keys.bind(KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::ScrollUp);
        keys.bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::ScrollDown);
        keys.bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::ScrollUp);

        // Page navigation
        keys.bind(KeyCode::Char('d'), KeyModifiers::CONTROL, KeyAction::PageDown);
        keys.bind(KeyCode::Char('u'), KeyModifiers::CONTROL, KeyAction::PageUp);
        keys.bind(KeyCode::PageDown, KeyModifiers::NONE, KeyAction::PageDown);
        keys.bind(KeyCode::PageUp, KeyModifiers::NONE, KeyAction::PageUp);

        // Jumps
        keys.bind(KeyCode::Char('g'), KeyModifiers::NONE, KeyAction::ScrollToTop);
        keys.bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::ScrollToTop);
        keys.bind(
            KeyCode::Char('G'),
            KeyModifiers::SHIFT,
            KeyAction::ScrollToBottom,
        );
        keys.bind(KeyCode::Char('G'), KeyModifiers::NONE, KeyAction::ScrollToBottom);
        keys.bind(KeyCode::End, KeyModifiers::NONE, KeyAction::ScrollToBottom);

        // Tab navigation
        keys.bind(KeyCode::Tab, KeyModifiers::NONE, KeyAction::NextTab);
        keys.bind(KeyCode::Char(']'), KeyModifiers::NONE, KeyAction::NextTab);
        keys.bind(KeyCode::BackTab, KeyModifiers::SHIFT, KeyAction::PrevTab);
        keys.bind(KeyCode::Char('['), KeyModifiers::NONE, KeyAction::PrevTab);
        for (number, key) in ['1', '2', '3', '4'].into_iter().enumerate() {
            keys.bind(
                KeyCode::Char(key),
                KeyModifiers::NONE,
                KeyAction::SelectTab(number + 1),
            );
        }

        // Record count
        keys.bind(KeyCode::Char('+'), KeyModifiers::NONE, KeyAction::IncreaseCount);
        keys.bind(KeyCode::Char('='), KeyModifiers::NONE, KeyAction::IncreaseCount);
        keys.bind(KeyCode::Char('-'), KeyModifiers::NONE, KeyAction::DecreaseCount);

        // Product rows
        keys.bind(KeyCode::Char('n'), KeyModifiers::NONE, KeyAction::SelectNext);
        keys.bind(KeyCode::Char('p'), KeyModifiers::NONE, KeyAction::SelectPrev);
        keys.bind(KeyCode::Char('e'), KeyModifiers::NONE, KeyAction::EditItem);
        keys.bind(KeyCode::Char('d'), KeyModifiers::NONE, KeyAction::DeleteItem);

        // Application controls
        keys.bind(KeyCode::Char('?'), KeyModifiers::NONE, KeyAction::Help);
        keys.bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}
