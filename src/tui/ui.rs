//! # Module: TUI Rendering
//!
//! ## Responsibility
//! Divides the terminal into the grid region and the button row, and delegates
//! to the widget renderers. Handles the minimum size guard and help overlay.
//!
//! ## Guarantees
//! - Minimum size guard displays a centered message if the terminal is too small
//! - Layout is a pure function of the terminal area, shared with mouse hit-testing
//! - No panics during rendering regardless of terminal dimensions

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::app::{App, BUTTON_HEIGHT, BUTTON_WIDTH};
use super::widgets;

/// Where the grid and the button sit inside the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Region holding the grid cells.
    pub grid: Rect,
    /// The toggle button, centered beneath the grid.
    pub button: Rect,
}

/// Computes the screen layout for a terminal of size `area`.
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let inner = Block::default().borders(Borders::ALL).inner(area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),                // Grid
            Constraint::Length(BUTTON_HEIGHT), // Button row
        ])
        .split(inner);

    let row = chunks[1];
    let width = BUTTON_WIDTH.min(row.width);
    let button = Rect::new(row.x + (row.width - width) / 2, row.y, width, row.height);

    ScreenLayout {
        grid: chunks[0],
        button,
    }
}

/// Returns true if the point (`column`, `row`) lies inside `rect`.
pub fn hit(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Renders the complete board screen into the given frame.
pub fn draw(f: &mut Frame, app: &App) {
    let size = f.area();
    let (min_cols, min_rows) = app.min_size();

    if !app.fits(size.width, size.height) {
        draw_too_small(f, size, min_cols, min_rows);
        return;
    }

    let title = format!(
        " hp-board \u{00b7} {} \u{00b7} {}\u{00d7}{} ",
        app.board.mode().name(),
        app.board.rows(),
        app.board.cols(),
    );

    let outer_block = Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(Span::styled(
            " [space] toggle  [q]uit  [h]elp ",
            Style::default().fg(Color::DarkGray),
        )))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(outer_block, size);

    let layout = screen_layout(size);
    widgets::grid::render(f, layout.grid, &app.board);
    widgets::button::render(f, layout.button, app.board.button_label());

    if app.show_help {
        draw_help_overlay(f, size);
    }
}

/// Renders the "terminal too small" warning.
fn draw_too_small(f: &mut Frame, area: Rect, min_cols: u16, min_rows: u16) {
    let msg = format!("Terminal too small: resize to at least {min_cols}x{min_rows}");
    let current_size = format!("Current size: {}x{}", area.width, area.height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let para = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            msg,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            current_size,
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(block)
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    f.render_widget(para, area);
}

/// Centers a `width`×`height` popup inside `area`, shrinking it to fit.
pub fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(4));
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

/// Renders the help overlay.
fn draw_help_overlay(f: &mut Frame, area: Rect) {
    let popup = popup_area(area, 44, 11);
    f.render_widget(Clear, popup);

    let dim = Style::default().fg(Color::DarkGray);
    let help_text = vec![
        Line::from(Span::styled(
            "  HP board",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("    [space] [enter] [t]  Toggle order", dim)),
        Line::from(Span::styled("    click button         Toggle order", dim)),
        Line::from(Span::styled("    [q] [Esc]            Quit", dim)),
        Line::from(Span::styled("    [Ctrl+C]             Force quit", dim)),
        Line::from(Span::styled("    [h]                  Close help", dim)),
        Line::from(""),
        Line::from(Span::styled(
            "  Green = low HP, red = high HP",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(Paragraph::new(help_text).block(block), popup);
}
