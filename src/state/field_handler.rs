//! Text editing for the focused input field.
//!
//! Each field accepts its own character set; rejected characters are
//! dropped without touching state.

use crate::input;
use crate::state::{AppState, FocusField};

/// Whether `ch` may be typed into `field`.
pub fn accepts(field: FocusField, ch: char) -> bool {
    match field {
        FocusField::Array => !ch.is_control(),
        FocusField::Target => ch.is_ascii_digit() || ch == '-' || ch == '+',
        FocusField::Length => ch.is_ascii_digit(),
    }
}

/// Append `ch` to the focused field. Returns whether the field changed.
pub fn handle_char_input(state: &mut AppState, ch: char) -> bool {
    if !accepts(state.focus, ch) {
        return false;
    }
    let mut text = state.focused_text().to_string();
    text.push(ch);
    write_focused(state, text);
    true
}

/// Delete the last character of the focused field.
pub fn handle_backspace(state: &mut AppState) -> bool {
    let mut text = state.focused_text().to_string();
    if text.pop().is_none() {
        return false;
    }
    write_focused(state, text);
    true
}

/// Cycle the length field through the presets. Only acts on the length field.
pub fn handle_preset(state: &mut AppState, forward: bool) -> bool {
    if state.focus != FocusField::Length {
        return false;
    }
    let current = state.length_input().trim().parse::<usize>().unwrap_or(0);
    let preset = if forward {
        input::next_preset(current)
    } else {
        input::prev_preset(current)
    };
    state.set_length_input(preset.to_string());
    true
}

fn write_focused(state: &mut AppState, text: String) {
    match state.focus {
        FocusField::Array => state.set_array_input(text),
        FocusField::Target => state.set_target_input(text),
        FocusField::Length => state.set_length_input(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(state: &mut AppState, text: &str) {
        for ch in text.chars() {
            handle_char_input(state, ch);
        }
    }

    #[test]
    fn typing_into_array_reparses() {
        let mut state = AppState::default();

        type_str(&mut state, "5, 1,x,3");

        assert_eq!(state.array_input(), "5, 1,x,3");
        assert_eq!(state.array(), &[1, 3, 5]);
    }

    #[test]
    fn target_field_rejects_letters() {
        let mut state = AppState::default();
        state.focus = FocusField::Target;

        type_str(&mut state, "-1a2");

        assert_eq!(state.target_input(), "-12");
    }

    #[test]
    fn length_field_accepts_digits_only() {
        let mut state = AppState::default();
        state.focus = FocusField::Length;
        handle_backspace(&mut state);
        handle_backspace(&mut state);

        type_str(&mut state, "2-0x0");

        assert_eq!(state.length_input(), "200");
    }

    #[test]
    fn typing_past_length_cap_clamps() {
        let mut state = AppState::default();
        state.focus = FocusField::Length;

        // "10" + "000" + "0" = 100000
        type_str(&mut state, "0000");

        assert_eq!(state.length_input(), "10000");
        assert!(state.length_error().is_some());
    }

    #[test]
    fn backspace_on_empty_field_is_noop() {
        let mut state = AppState::default();
        assert!(!handle_backspace(&mut state));
    }

    #[test]
    fn backspace_removes_last_char() {
        let mut state = AppState::default();
        type_str(&mut state, "1,23");

        assert!(handle_backspace(&mut state));

        assert_eq!(state.array(), &[1, 2]);
    }

    #[test]
    fn preset_only_cycles_in_length_field() {
        let mut state = AppState::default();
        assert!(!handle_preset(&mut state, true));

        state.focus = FocusField::Length;
        assert!(handle_preset(&mut state, true));
        assert_eq!(state.length_input(), "50");
        assert!(handle_preset(&mut state, false));
        assert!(handle_preset(&mut state, false));
        assert_eq!(state.length_input(), "10000");
    }

    #[test]
    fn control_chars_are_rejected_everywhere() {
        assert!(!accepts(FocusField::Array, '\u{7}'));
        assert!(!accepts(FocusField::Target, '\n'));
        assert!(!accepts(FocusField::Length, '\t'));
    }
}
