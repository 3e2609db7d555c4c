//! Crash Regression Tests
//!
//! Each test verifies that the app keeps running and renders after
//! operations at the edges of the input and terminal space.

use crate::state::SearchSettings;
use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::KeyCode;

#[test]
fn extreme_values_render() {
    let mut harness = AcceptanceTestHarness::new();
    harness.type_text(&format!("{}, 0, {}", i64::MIN, i64::MAX));
    harness.send_key(KeyCode::Tab);
    harness.type_text(&i64::MAX.to_string());
    harness.send_key(KeyCode::Enter);
    harness.send_key(KeyCode::End);

    let screen = harness.render_to_string();
    assert!(screen.contains("found at index 2"));
    assert!(harness.is_running());
}

#[test]
fn tiny_terminal_renders() {
    let mut harness = AcceptanceTestHarness::with_settings(SearchSettings::default(), 10, 5);
    harness.type_text("1,2,3,4,5,6,7,8,9,10,11,12");
    harness.send_key(KeyCode::Tab);
    harness.type_text("11");
    harness.send_key(KeyCode::Enter);

    let _ = harness.render_to_string();
    assert!(harness.is_running());
}

#[test]
fn max_length_array_renders_every_step() {
    let mut harness = AcceptanceTestHarness::new();
    harness.send_keys(&[KeyCode::Tab, KeyCode::Tab, KeyCode::Up]);
    assert_eq!(harness.state().length_input(), "10000");
    harness.send_key(KeyCode::Enter);
    harness.send_keys(&[KeyCode::Tab, KeyCode::Tab]);
    harness.type_text("-1");
    harness.send_key(KeyCode::Enter);

    let steps = harness.state().playback().trace().unwrap().len();
    for _ in 0..steps {
        let _ = harness.render_to_string();
        harness.send_key(KeyCode::Right);
    }
    assert!(harness.render_to_string().contains("Target -1 not found in the array"));
}

#[test]
fn mashing_navigation_without_trace() {
    let mut harness = AcceptanceTestHarness::new();
    harness.send_keys(&[
        KeyCode::Right,
        KeyCode::Left,
        KeyCode::Home,
        KeyCode::End,
        KeyCode::PageDown,
        KeyCode::PageUp,
        KeyCode::Backspace,
        KeyCode::Up,
        KeyCode::Down,
        KeyCode::Esc,
    ]);

    let _ = harness.render_to_string();
    assert!(harness.is_running());
}
