//! # Widget: Toggle Button
//!
//! Renders the bordered toggle button. Its label names the arrangement a press
//! switches to: "Show Sorted" or "Show Unsorted".

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

/// Renders the toggle button with `label` centered inside.
pub fn render(f: &mut Frame, area: Rect, label: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::White));

    let para = Paragraph::new(Line::from(Span::styled(
        label,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .block(block)
    .alignment(Alignment::Center);

    f.render_widget(para, area);
}
