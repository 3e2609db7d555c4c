//! Main screen layout rendering.
//!
//! Pure layout logic: splits the screen into header, input row, message
//! line, array display, steps panel, and status bar, then renders each.

use super::array_display::{ArrayDisplay, ArrayGeometry};
use super::constants::{
    HEADER_HEIGHT, INPUT_ROW_HEIGHT, MESSAGE_HEIGHT, STATUS_BAR_HEIGHT, STEPS_PANEL_HEIGHT,
};
use super::input_fields::{ActionsBox, InputBox};
use super::steps_panel::StepsPanel;
use super::styles::Palette;
use crate::state::{AppState, FocusField};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Title line.
    pub header: Rect,
    /// Array text field.
    pub array_input: Rect,
    /// Target field.
    pub target: Rect,
    /// Command hints.
    pub actions: Rect,
    /// Random length field.
    pub random: Rect,
    /// Status message line.
    pub message: Rect,
    /// Array cells block.
    pub array: Rect,
    /// Present only while a trace is loaded.
    pub steps: Option<Rect>,
    /// Key hints and auto-play badge.
    pub status: Rect,
}

/// Split `area` into regions. The steps panel is only allotted space
/// when `has_trace` is set.
pub fn compute_areas(area: Rect, has_trace: bool) -> ScreenAreas {
    let steps_height = if has_trace { STEPS_PANEL_HEIGHT } else { 0 };
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(INPUT_ROW_HEIGHT),
            Constraint::Length(MESSAGE_HEIGHT),
            Constraint::Fill(1), // Array display
            Constraint::Length(steps_height),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    let input_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),    // Array input takes the slack
            Constraint::Length(16), // Target
            Constraint::Length(24), // Actions
            Constraint::Length(34), // Random array
        ])
        .split(vertical_chunks[1]);

    ScreenAreas {
        header: vertical_chunks[0],
        array_input: input_chunks[0],
        target: input_chunks[1],
        actions: input_chunks[2],
        random: input_chunks[3],
        message: vertical_chunks[2],
        array: vertical_chunks[3],
        steps: has_trace.then_some(vertical_chunks[4]),
        status: vertical_chunks[5],
    }
}

/// Render the whole screen. Returns the array cell geometry for mouse
/// hit testing, or `None` when no cells were drawn.
pub fn render_layout(frame: &mut Frame, state: &AppState, palette: Palette) -> Option<ArrayGeometry> {
    let areas = compute_areas(frame.area(), state.playback().has_trace());

    render_header(frame, areas.header, palette);
    render_inputs(frame, &areas, state, palette);
    render_message(frame, areas.message, state, palette);
    let geometry = render_array(frame, areas.array, state, palette);
    if let Some(steps_area) = areas.steps {
        frame.render_widget(StepsPanel::new(state.playback(), palette), steps_area);
    }
    render_status_bar(frame, areas.status, state, palette);

    geometry
}

fn render_header(frame: &mut Frame, area: Rect, palette: Palette) {
    let line = Line::from(vec![
        Span::styled("Binary Search Visualizer", palette.title()),
        Span::styled("  (F1 for information)", palette.muted()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_inputs(frame: &mut Frame, areas: &ScreenAreas, state: &AppState, palette: Palette) {
    let array = InputBox::new("Array Input", state.array_input(), palette)
        .focused(state.focus == FocusField::Array)
        .hint("comma-separated numbers");
    frame.render_widget(array, areas.array_input);

    let target = InputBox::new("Target", state.target_input(), palette)
        .focused(state.focus == FocusField::Target)
        .hint("number to find");
    frame.render_widget(target, areas.target);

    frame.render_widget(ActionsBox::new(palette), areas.actions);

    let key = palette.key_hint();
    let random = InputBox::new("Random Array", state.length_input(), palette)
        .focused(state.focus == FocusField::Length)
        .hint(Line::from(vec![
            Span::raw("length  "),
            Span::styled("^G", key),
            Span::raw(" generate  "),
            Span::styled("↑↓", key),
            Span::raw(" presets"),
        ]))
        .error(state.length_error().map(ToString::to_string));
    frame.render_widget(random, areas.random);
}

fn render_message(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette) {
    let Some((text, kind)) = state.status_message() else {
        return;
    };
    let line = Line::from(Span::styled(text, palette.message(kind)));
    frame.render_widget(Paragraph::new(line), area);
}

fn render_array(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    palette: Palette,
) -> Option<ArrayGeometry> {
    let block = Block::default().borders(Borders::ALL).title(" Array ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let display = ArrayDisplay::new(state.array(), state.highlight(), palette);
    let geometry = (!state.array().is_empty()).then(|| display.geometry(inner));
    frame.render_widget(display, inner);
    geometry
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette) {
    let key = palette.key_hint();
    let mut spans = Vec::new();
    if state.is_autoplaying() {
        spans.push(Span::styled(" AUTO ", palette.badge()));
        spans.push(Span::raw(" "));
    }
    spans.extend([
        Span::styled("Tab", key),
        Span::raw(" field  "),
        Span::styled("Enter", key),
        Span::raw(" search  "),
        Span::styled("←→", key),
        Span::raw(" step  "),
        Span::styled("^A", key),
        Span::raw(" auto  "),
        Span::styled("^Q", key),
        Span::raw(" quit"),
    ]);
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
