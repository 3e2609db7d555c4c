//! Input box widgets for the top row.

use super::styles::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// A bordered text field with a hint line under the value.
pub struct InputBox<'a> {
    title: &'a str,
    value: &'a str,
    focused: bool,
    hint: Line<'a>,
    error: Option<String>,
    palette: Palette,
}

impl<'a> InputBox<'a> {
    /// Unfocused box with no hint.
    pub fn new(title: &'a str, value: &'a str, palette: Palette) -> Self {
        Self {
            title,
            value,
            focused: false,
            hint: Line::default(),
            error: None,
            palette,
        }
    }

    /// Highlight the border and show the cursor.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Line under the value, replaced by the error when one is set.
    pub fn hint(mut self, hint: impl Into<Line<'a>>) -> Self {
        self.hint = hint.into();
        self
    }

    /// Error text shown in place of the hint.
    pub fn error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }
}

/// Last `width` characters of `text`, so the end being typed stays visible.
pub fn visible_tail(text: &str, width: usize) -> &str {
    let count = text.chars().count();
    if count <= width {
        return text;
    }
    let skip = count - width;
    let start = text
        .char_indices()
        .nth(skip)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    &text[start..]
}

impl Widget for InputBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.palette.focused_border()
        } else {
            Style::default()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.title))
            .border_style(border_style);

        // Reserve one column for the cursor
        let inner_width = area.width.saturating_sub(3) as usize;
        let mut value_spans = vec![Span::raw(visible_tail(self.value, inner_width).to_string())];
        if self.focused {
            value_spans.push(Span::styled(" ", self.palette.cursor()));
        }

        let second = match self.error {
            Some(message) => Line::from(Span::styled(message, self.palette.error())),
            None => self.hint.style(self.palette.muted()),
        };

        Paragraph::new(vec![Line::from(value_spans), second])
            .block(block)
            .render(area, buf);
    }
}

/// Box listing the command keys.
pub struct ActionsBox {
    palette: Palette,
}

impl ActionsBox {
    /// Actions box in `palette` colors.
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }
}

impl Widget for ActionsBox {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let key = self.palette.key_hint();
        let lines = vec![
            Line::from(vec![
                Span::styled("Enter", key),
                Span::raw(" Search"),
            ]),
            Line::from(vec![
                Span::styled("^R", key),
                Span::raw(" Reset  "),
                Span::styled("^A", key),
                Span::raw(" Auto"),
            ]),
        ];
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Actions "))
            .render(area, buf);
    }
}
