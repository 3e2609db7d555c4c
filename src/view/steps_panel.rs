//! Calculation steps panel: step counter, narration, and playback hints.

use super::styles::Palette;
use crate::state::{MessageKind, PlaybackState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Bordered panel narrating the step under the cursor.
pub struct StepsPanel<'a> {
    playback: &'a PlaybackState,
    palette: Palette,
}

impl<'a> StepsPanel<'a> {
    /// Panel for `playback`.
    pub fn new(playback: &'a PlaybackState, palette: Palette) -> Self {
        Self { playback, palette }
    }

    fn hint_line(&self) -> Line<'static> {
        let key = self.palette.key_hint();
        let muted = self.palette.muted();
        let at_start = self.playback.is_at_start();
        let at_end = self.playback.is_at_end();
        // Unavailable directions are dimmed
        let dim_if = |disabled: bool| {
            if disabled {
                muted.add_modifier(Modifier::DIM)
            } else {
                ratatui::style::Style::default()
            }
        };
        Line::from(vec![
            Span::styled("←", key),
            Span::styled(" Previous  ", dim_if(at_start)),
            Span::styled("→", key),
            Span::styled(" Next  ", dim_if(at_end)),
            Span::styled("Home", key),
            Span::raw("/"),
            Span::styled("End", key),
            Span::raw(" First/Last"),
        ])
    }
}

impl Widget for StepsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Calculation Steps ");

        let lines = match (self.playback.position(), self.playback.current()) {
            (Some((position, total)), Some(step)) => vec![
                Line::from(Span::styled(
                    format!("Step {position} / {total}"),
                    self.palette.title(),
                )),
                Line::from(Span::styled(
                    step.message.clone(),
                    self.palette.message(MessageKind::from(step.outcome)),
                )),
                self.hint_line(),
            ],
            _ => vec![Line::from(Span::styled(
                "Enter an array and a target, then press Enter to search.",
                self.palette.muted(),
            ))],
        };

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
