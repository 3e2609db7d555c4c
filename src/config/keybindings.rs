//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Only non-printing keys and Ctrl chords are bound: plain characters are
/// field input.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Event kind and state are ignored so that terminals reporting
    /// keypad or lock state still match.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut bindings = HashMap::new();
        let mut bind = |code, modifiers, action| {
            bindings.insert(KeyEvent::new(code, modifiers), action);
        };

        // Search commands
        bind(KeyCode::Enter, KeyModifiers::NONE, KeyAction::Search);
        bind(KeyCode::Char('g'), KeyModifiers::CONTROL, KeyAction::Generate);
        bind(KeyCode::Char('r'), KeyModifiers::CONTROL, KeyAction::Reset);

        // Playback
        bind(KeyCode::Right, KeyModifiers::NONE, KeyAction::NextStep);
        bind(KeyCode::PageDown, KeyModifiers::NONE, KeyAction::NextStep);
        bind(KeyCode::Left, KeyModifiers::NONE, KeyAction::PrevStep);
        bind(KeyCode::PageUp, KeyModifiers::NONE, KeyAction::PrevStep);
        bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::FirstStep);
        bind(KeyCode::End, KeyModifiers::NONE, KeyAction::LastStep);
        bind(
            KeyCode::Char('a'),
            KeyModifiers::CONTROL,
            KeyAction::ToggleAutoPlay,
        );

        // Fields
        bind(KeyCode::Tab, KeyModifiers::NONE, KeyAction::CycleFocus);
        bind(KeyCode::BackTab, KeyModifiers::SHIFT, KeyAction::CycleFocusBack);
        bind(KeyCode::BackTab, KeyModifiers::NONE, KeyAction::CycleFocusBack);
        bind(KeyCode::Backspace, KeyModifiers::NONE, KeyAction::DeleteChar);
        bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::NextPreset);
        bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::PrevPreset);

        // Application controls
        bind(KeyCode::F(1), KeyModifiers::NONE, KeyAction::Help);
        bind(KeyCode::Char('h'), KeyModifiers::CONTROL, KeyAction::Help);
        bind(KeyCode::Esc, KeyModifiers::NONE, KeyAction::Cancel);
        bind(KeyCode::Char('q'), KeyModifiers::CONTROL, KeyAction::Quit);
        bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        Self { bindings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventKind, KeyEventState, KeyModifiers};

    #[test]
    fn enter_maps_to_search() {
        let bindings = KeyBindings::default();
        let key_event = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(bindings.get(key_event), Some(KeyAction::Search));
    }

    #[test]
    fn arrows_map_to_step_navigation() {
        let bindings = KeyBindings::default();

        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)),
            Some(KeyAction::NextStep)
        );
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)),
            Some(KeyAction::PrevStep)
        );
    }

    #[test]
    fn plain_characters_are_unbound() {
        let bindings = KeyBindings::default();

        for ch in ['a', 'q', 'r', '1', ',', '-'] {
            assert_eq!(
                bindings.get(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE)),
                None,
                "'{ch}' must stay available for field input"
            );
        }
    }

    #[test]
    fn ctrl_chords_map_to_commands() {
        let bindings = KeyBindings::default();

        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL)),
            Some(KeyAction::ToggleAutoPlay)
        );
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            Some(KeyAction::Reset)
        );
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('g'), KeyModifiers::CONTROL)),
            Some(KeyAction::Generate)
        );
    }

    #[test]
    fn lookup_ignores_event_kind_and_state() {
        let bindings = KeyBindings::default();
        let key_event = KeyEvent::new_with_kind_and_state(
            KeyCode::Esc,
            KeyModifiers::NONE,
            KeyEventKind::Repeat,
            KeyEventState::NUM_LOCK,
        );

        assert_eq!(bindings.get(key_event), Some(KeyAction::Cancel));
    }
}
