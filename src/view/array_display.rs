//! Array cells widget.
//!
//! Draws the array as rows of cells, each showing its index above its
//! value, colored by its relation to the current step. Long arrays scroll
//! so the probed element stays on screen.

use super::constants::{ARRAY_CELL_GAP, ARRAY_ITEMS_PER_ROW, ARRAY_ROW_GAP, ARRAY_ROW_HEIGHT};
use super::styles::{CellRole, Palette};
use crate::state::Highlight;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Paragraph, Widget, Wrap},
};

/// Text shown instead of cells when there is nothing to search.
pub const EMPTY_ARRAY_PLACEHOLDER: &str =
    "Array is empty. Please enter comma-separated values or generate a random array to proceed.";

/// Classify a cell for coloring. Exhaustion wins over everything else.
pub fn classify(index: usize, highlight: &Highlight) -> CellRole {
    if highlight.is_exhausted() {
        CellRole::Exhausted
    } else if highlight.mid == Some(index) {
        CellRole::Mid
    } else if highlight.contains(index) {
        CellRole::InRange
    } else {
        CellRole::Default
    }
}

// ===== ArrayGeometry =====

/// Placement of every visible cell inside the display area.
///
/// Shared by rendering and mouse hit testing so both agree on where a
/// cell is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayGeometry {
    area: Rect,
    origin_x: u16,
    cell_width: u16,
    per_row: usize,
    first_row: usize,
    visible_rows: usize,
    len: usize,
}

impl ArrayGeometry {
    /// Lay out `array` in `area`, scrolled so the focus of `highlight`
    /// (mid, else low) is visible.
    pub fn compute(area: Rect, array: &[i64], highlight: &Highlight) -> Self {
        let len = array.len();
        let widest_value = array
            .iter()
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(1);
        let widest_index = len.saturating_sub(1).to_string().len();
        let cell_width = (widest_value.max(widest_index) + 2) as u16;

        let fit = (area.width + ARRAY_CELL_GAP) / (cell_width + ARRAY_CELL_GAP);
        let per_row = (fit as usize).min(len).clamp(1, ARRAY_ITEMS_PER_ROW);

        let total_rows = len.div_ceil(per_row);
        let row_pitch = ARRAY_ROW_HEIGHT + ARRAY_ROW_GAP;
        let visible_rows = ((area.height + ARRAY_ROW_GAP) / row_pitch).max(1) as usize;

        let focus = highlight
            .mid
            .unwrap_or_else(|| highlight.low.max(0) as usize)
            .min(len.saturating_sub(1));
        let focus_row = focus / per_row;
        let first_row = if total_rows <= visible_rows {
            0
        } else {
            focus_row
                .saturating_sub(visible_rows / 2)
                .min(total_rows - visible_rows)
        };

        let row_width = per_row as u16 * cell_width + (per_row as u16 - 1) * ARRAY_CELL_GAP;
        let origin_x = area.x + area.width.saturating_sub(row_width) / 2;

        Self {
            area,
            origin_x,
            cell_width,
            per_row,
            first_row,
            visible_rows,
            len,
        }
    }

    /// Cells in each full row.
    pub fn per_row(&self) -> usize {
        self.per_row
    }

    /// Width of one cell, borders included.
    pub fn cell_width(&self) -> u16 {
        self.cell_width
    }

    /// Total number of rows, visible or not.
    pub fn total_rows(&self) -> usize {
        self.len.div_ceil(self.per_row)
    }

    /// Visible row indices, half-open.
    pub fn visible_row_range(&self) -> std::ops::Range<usize> {
        let end = (self.first_row + self.visible_rows).min(self.total_rows());
        self.first_row..end
    }

    /// Screen rectangle of the cell at `index`, if it is on screen.
    pub fn cell_rect(&self, index: usize) -> Option<Rect> {
        if index >= self.len {
            return None;
        }
        let row = index / self.per_row;
        if !self.visible_row_range().contains(&row) {
            return None;
        }
        let col = (index % self.per_row) as u16;
        let slot = (row - self.first_row) as u16;
        let rect = Rect {
            x: self.origin_x + col * (self.cell_width + ARRAY_CELL_GAP),
            y: self.area.y + slot * (ARRAY_ROW_HEIGHT + ARRAY_ROW_GAP),
            width: self.cell_width,
            height: ARRAY_ROW_HEIGHT,
        };
        // Clip cells that would spill past the area
        if rect.right() > self.area.right() || rect.bottom() > self.area.bottom() {
            return None;
        }
        Some(rect)
    }

    /// Index of the cell drawn at screen position `(x, y)`.
    pub fn cell_at(&self, x: u16, y: u16) -> Option<usize> {
        if y < self.area.y || x < self.origin_x {
            return None;
        }
        let pitch_y = ARRAY_ROW_HEIGHT + ARRAY_ROW_GAP;
        let rel_y = y - self.area.y;
        if rel_y % pitch_y >= ARRAY_ROW_HEIGHT {
            return None;
        }
        let pitch_x = self.cell_width + ARRAY_CELL_GAP;
        let rel_x = x - self.origin_x;
        if rel_x % pitch_x >= self.cell_width {
            return None;
        }
        let col = (rel_x / pitch_x) as usize;
        if col >= self.per_row {
            return None;
        }
        let row = self.first_row + (rel_y / pitch_y) as usize;
        let index = row * self.per_row + col;
        self.cell_rect(index).map(|_| index)
    }
}

// ===== ArrayDisplay =====

/// Array cells widget.
pub struct ArrayDisplay<'a> {
    array: &'a [i64],
    highlight: Highlight,
    palette: Palette,
}

impl<'a> ArrayDisplay<'a> {
    /// Widget for `array` colored by `highlight`.
    pub fn new(array: &'a [i64], highlight: Highlight, palette: Palette) -> Self {
        Self {
            array,
            highlight,
            palette,
        }
    }

    /// Geometry this widget will use when rendered into `area`.
    pub fn geometry(&self, area: Rect) -> ArrayGeometry {
        ArrayGeometry::compute(area, self.array, &self.highlight)
    }
}

impl Widget for ArrayDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.array.is_empty() {
            Paragraph::new(Line::from(EMPTY_ARRAY_PLACEHOLDER))
                .style(self.palette.muted())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(area, buf);
            return;
        }

        let geometry = self.geometry(area);
        let width = geometry.cell_width() as usize;
        for row in geometry.visible_row_range() {
            let start = row * geometry.per_row();
            let end = (start + geometry.per_row()).min(self.array.len());
            for index in start..end {
                let Some(rect) = geometry.cell_rect(index) else {
                    continue;
                };
                let role = classify(index, &self.highlight);
                buf.set_string(
                    rect.x,
                    rect.y,
                    format!("{:^width$}", index),
                    self.palette.cell_index(),
                );
                buf.set_string(
                    rect.x,
                    rect.y + 1,
                    format!("{:^width$}", self.array[index]),
                    self.palette.cell(role),
                );
            }
        }
    }
}
