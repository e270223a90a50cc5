//! # Widget: HP Grid
//!
//! ## Responsibility
//! Paints each board cell as a solid block of its ramp color with the `HP:<n>`
//! label centered inside. Placeholder cells are light gray and unlabeled.
//!
//! ## Guarantees
//! - Cells are equal-sized and the grid is centered horizontally
//! - Areas too small for one character per cell render nothing

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::board::{Board, Cell};
use crate::color::{Rgb, LABEL_FG};

/// Converts a board color into a terminal truecolor.
pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Splits `area` into `rows × cols` equal cells, row-major.
///
/// Leftover columns are split evenly on both sides; leftover rows go below
/// the grid. Returns an empty list when any cell would be zero-sized.
pub fn cell_rects(area: Rect, rows: usize, cols: usize) -> Vec<Rect> {
    let (Ok(rows), Ok(cols)) = (u16::try_from(rows), u16::try_from(cols)) else {
        return Vec::new();
    };
    if rows == 0 || cols == 0 {
        return Vec::new();
    }
    let cell_w = area.width / cols;
    let cell_h = area.height / rows;
    if cell_w == 0 || cell_h == 0 {
        return Vec::new();
    }
    let offset_x = area.x + (area.width - cell_w * cols) / 2;

    (0..rows)
        .flat_map(|r| {
            (0..cols).map(move |c| {
                Rect::new(offset_x + c * cell_w, area.y + r * cell_h, cell_w, cell_h)
            })
        })
        .collect()
}

/// Builds the paragraph for one cell, label vertically centered.
fn cell_widget(cell: &Cell, height: u16) -> Paragraph<'_> {
    let mut lines = vec![Line::from(""); usize::from(height.saturating_sub(1) / 2)];
    if let Some(label) = cell.label.as_deref() {
        lines.push(Line::from(label));
    }
    Paragraph::new(lines)
        .style(
            Style::default()
                .bg(to_color(cell.color))
                .fg(to_color(LABEL_FG)),
        )
        .alignment(Alignment::Center)
}

/// Renders the grid of board cells into `area`.
pub fn render(f: &mut Frame, area: Rect, board: &Board) {
    let rects = cell_rects(area, board.rows(), board.cols());
    for (cell, rect) in board.cells().iter().zip(rects) {
        f.render_widget(cell_widget(cell, rect.height), rect);
    }
}
