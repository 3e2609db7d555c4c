//! Info overlay: color legend and keyboard shortcuts.
//!
//! Shows a centered modal over the main screen. Toggled by F1 or Ctrl+h,
//! dismissed by Esc.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::{CellRole, Palette};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the info overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, palette: Palette) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    // Clear the background for the overlay
    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(palette))
        .block(
            Block::default()
                .title(" Information about Visualizer ")
                .borders(Borders::ALL)
                .border_style(palette.focused_border()),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    // Dismissal hint on the bottom border
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        " Press Esc or F1 to close ",
        palette.muted(),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate a Rect centered in `area` with the given percentage size.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn legend_line(palette: Palette, role: CellRole, label: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled("  ", palette.cell(role)),
        Span::raw(" "),
        Span::raw(label),
    ])
}

fn key_line(palette: Palette, keys: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {keys:<16}"), palette.key_hint()),
        Span::raw(description),
    ])
}

fn build_help_content(palette: Palette) -> Vec<Line<'static>> {
    let section = palette.title();
    vec![
        Line::from(Span::styled("Color Legend", section)),
        legend_line(palette, CellRole::Mid, "Mid Element"),
        legend_line(palette, CellRole::InRange, "Low-High Range"),
        legend_line(palette, CellRole::Default, "Default Element"),
        legend_line(palette, CellRole::Exhausted, "Not Found"),
        Line::default(),
        Line::from(Span::styled(
            "The index of each element is displayed above it.",
            Style::default(),
        )),
        Line::default(),
        Line::from(Span::styled("Input", section)),
        key_line(palette, "Tab/Shift+Tab", "Move between fields"),
        key_line(palette, "Backspace", "Delete last character"),
        key_line(palette, "Enter", "Search (Generate on length field)"),
        key_line(palette, "Up/Down", "Cycle length presets"),
        key_line(palette, "Ctrl+g", "Generate random array"),
        key_line(palette, "Ctrl+r", "Reset everything"),
        key_line(palette, "Click cell", "Use its value as target"),
        Line::default(),
        Line::from(Span::styled("Steps", section)),
        key_line(palette, "Right/PgDn", "Next step"),
        key_line(palette, "Left/PgUp", "Previous step"),
        key_line(palette, "Home/End", "First/last step"),
        key_line(palette, "Ctrl+a", "Toggle auto-play"),
        key_line(palette, "Esc", "Stop auto-play"),
        Line::default(),
        Line::from(Span::styled("Application", section)),
        key_line(palette, "F1/Ctrl+h", "Toggle this information"),
        key_line(palette, "Ctrl+q/Ctrl+c", "Quit"),
    ]
}

// ===== Tests =====

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
