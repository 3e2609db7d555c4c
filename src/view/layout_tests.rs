//! Tests for main screen layout rendering.

use super::*;
use crate::view::styles::ColorConfig;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

// ===== Test Helpers =====

fn palette() -> Palette {
    Palette::new(ColorConfig::new(true))
}

fn render(state: &AppState, width: u16, height: u16) -> (Buffer, Option<ArrayGeometry>) {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let mut geometry = None;
    terminal
        .draw(|frame| geometry = render_layout(frame, state, palette()))
        .unwrap();
    (terminal.backend().buffer().clone(), geometry)
}

fn buffer_to_string(buffer: &Buffer) -> String {
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn searched_state(array: &str, target: &str) -> AppState {
    let mut state = AppState::default();
    state.set_array_input(array);
    state.set_target_input(target);
    state.search().unwrap();
    state
}

// ===== compute_areas =====

#[test]
fn areas_stack_top_to_bottom() {
    let areas = compute_areas(Rect::new(0, 0, 120, 40), true);

    assert_eq!(areas.header.y, 0);
    assert_eq!(areas.array_input.y, 1);
    assert_eq!(areas.array_input.height, INPUT_ROW_HEIGHT);
    assert_eq!(areas.message.y, 5);
    assert_eq!(areas.array.y, 6);
    let steps = areas.steps.expect("steps panel allotted with a trace");
    assert_eq!(steps.height, STEPS_PANEL_HEIGHT);
    assert_eq!(areas.status.y, 39);
    assert_eq!(steps.bottom(), areas.status.y);
}

#[test]
fn areas_without_trace_give_array_the_space() {
    let with = compute_areas(Rect::new(0, 0, 120, 40), true);
    let without = compute_areas(Rect::new(0, 0, 120, 40), false);

    assert!(without.steps.is_none());
    assert_eq!(without.array.height, with.array.height + STEPS_PANEL_HEIGHT);
}

#[test]
fn input_row_keeps_fixed_boxes() {
    let areas = compute_areas(Rect::new(0, 0, 120, 40), false);

    assert_eq!(areas.target.width, 16);
    assert_eq!(areas.actions.width, 24);
    assert_eq!(areas.random.width, 34);
    assert_eq!(areas.array_input.width, 120 - 16 - 24 - 34);
}

// ===== render_layout =====

#[test]
fn initial_screen_shows_titles_and_placeholder() {
    let (buffer, geometry) = render(&AppState::default(), 120, 30);
    let text = buffer_to_string(&buffer);

    assert!(text.contains("Binary Search Visualizer"));
    for title in ["Array Input", "Target", "Actions", "Random Array"] {
        assert!(text.contains(title), "missing box {title}");
    }
    assert!(text.contains("Array is empty."));
    assert!(!text.contains("Calculation Steps"));
    assert!(geometry.is_none());
}

#[test]
fn searched_screen_shows_message_and_steps() {
    let state = searched_state("1,3,5,7,9", "5");
    let (buffer, geometry) = render(&state, 120, 30);
    let text = buffer_to_string(&buffer);

    assert!(text.contains("low=0, high=4, mid=2, array[mid]=5 == 5"));
    assert!(text.contains("Calculation Steps"));
    assert!(text.contains("Step 1 / 2"));
    assert!(geometry.is_some());
}

#[test]
fn message_line_uses_outcome_color() {
    let mut state = searched_state("1,3,5,7,9", "4");
    state.last_step();
    let (buffer, _) = render(&state, 120, 30);
    let areas = compute_areas(buffer.area, true);

    assert_eq!(
        buffer[(areas.message.x, areas.message.y)].fg,
        ratatui::style::Color::Red
    );
}

#[test]
fn geometry_maps_into_array_box() {
    let state = searched_state("1,3,5,7,9", "5");
    let (_, geometry) = render(&state, 120, 30);
    let geometry = geometry.unwrap();
    let areas = compute_areas(Rect::new(0, 0, 120, 30), true);

    let mid = geometry.cell_rect(2).unwrap();
    assert!(mid.y > areas.array.y);
    assert!(mid.bottom() < areas.array.bottom());
}

#[test]
fn status_bar_shows_auto_badge_while_playing() {
    let mut state = searched_state("1,3,5,7,9", "4");
    state.toggle_autoplay(std::time::Instant::now());
    let (buffer, _) = render(&state, 120, 30);
    let areas = compute_areas(buffer.area, true);
    let status: String = (0..buffer.area.width)
        .map(|x| buffer[(x, areas.status.y)].symbol().to_string())
        .collect();

    assert!(status.starts_with(" AUTO "));
}

#[test]
fn length_error_shown_under_random_box() {
    let mut state = AppState::default();
    state.set_length_input("20000");
    let (buffer, _) = render(&state, 120, 30);

    assert!(buffer_to_string(&buffer).contains("The value cannot exceed 10,000"));
}

#[test]
fn renders_in_small_terminal_without_panic() {
    let state = searched_state("1,3,5,7,9", "5");
    let _ = render(&state, 20, 8);
}
