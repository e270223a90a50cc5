//! Rendering the board screen into a test backend.

use hp_board::generator::board_rng;
use hp_board::tui::app::App;
use hp_board::tui::events::{apply_event, InputEvent};
use hp_board::tui::ui::{self, screen_layout};
use hp_board::{Board, Entry};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::Terminal;

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buf = terminal.backend().buffer();
    let width = usize::from(buf.area.width);
    buf.content
        .chunks(width)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn draw(terminal: &mut Terminal<TestBackend>, app: &App) {
    terminal
        .draw(|f| ui::draw(f, app))
        .expect("test: draw should not fail");
}

#[test]
fn test_initial_screen_shows_unsorted_and_button() {
    let mut terminal = Terminal::new(TestBackend::new(82, 30)).expect("test: terminal");
    let entries = [300, 100, 500, 1].into_iter().map(Entry::new).collect();
    let app = App::new(Board::from_entries(entries, 2, 2, 500));

    draw(&mut terminal, &app);
    let text = screen_text(&terminal);

    assert!(text.contains("Show Sorted"));
    assert!(text.contains("HP:300"));
    assert!(text.contains("HP:1"));
    let first_row = text.lines().find(|l| l.contains("HP:300")).unwrap_or("");
    assert!(first_row.find("HP:300") < first_row.find("HP:100"));
}

#[test]
fn test_toggle_redraws_sorted_and_button_text() {
    let mut terminal = Terminal::new(TestBackend::new(82, 30)).expect("test: terminal");
    let entries = [300, 100, 500, 1].into_iter().map(Entry::new).collect();
    let mut app = App::new(Board::from_entries(entries, 2, 2, 500));

    apply_event(&mut app, InputEvent::Toggle);
    draw(&mut terminal, &app);
    let text = screen_text(&terminal);

    assert!(text.contains("Show Unsorted"));
    let first_row = text.lines().find(|l| l.contains("HP:1 ")).unwrap_or("");
    assert!(first_row.contains("HP:100"));
    assert!(!first_row.contains("HP:300"));
}

#[test]
fn test_full_board_renders_every_label() {
    let mut terminal = Terminal::new(TestBackend::new(82, 30)).expect("test: terminal");
    let app = App::new(Board::with_defaults(&mut board_rng(Some(9))));

    draw(&mut terminal, &app);
    let text = screen_text(&terminal);

    for entry in app.board.unsorted() {
        assert!(text.contains(entry.label()), "missing {}", entry.label());
    }
}

#[test]
fn test_cell_background_uses_ramp_color() {
    let mut terminal = Terminal::new(TestBackend::new(82, 30)).expect("test: terminal");
    let entries = vec![Entry::new(500)];
    let app = App::new(Board::from_entries(entries, 1, 1, 500));

    draw(&mut terminal, &app);
    let grid = screen_layout(Rect::new(0, 0, 82, 30)).grid;
    let buf = terminal.backend().buffer();
    let idx = usize::from(grid.y) * 82 + usize::from(grid.x);
    assert_eq!(buf.content[idx].bg, Color::Rgb(255, 0, 0));
}

#[test]
fn test_too_small_terminal_shows_guard() {
    let mut terminal = Terminal::new(TestBackend::new(40, 10)).expect("test: terminal");
    let app = App::new(Board::with_defaults(&mut board_rng(Some(1))));

    draw(&mut terminal, &app);
    let text = screen_text(&terminal);

    assert!(text.contains("Terminal too small"));
    assert!(!text.contains("Show Sorted"));
}

#[test]
fn test_help_overlay_renders() {
    let mut terminal = Terminal::new(TestBackend::new(82, 30)).expect("test: terminal");
    let mut app = App::new(Board::with_defaults(&mut board_rng(Some(1))));

    apply_event(&mut app, InputEvent::Help);
    draw(&mut terminal, &app);

    assert!(screen_text(&terminal).contains("Help"));
}

#[test]
fn test_click_on_rendered_button_toggles() {
    let mut terminal = Terminal::new(TestBackend::new(82, 30)).expect("test: terminal");
    let mut app = App::new(Board::with_defaults(&mut board_rng(Some(3))));
    apply_event(&mut app, InputEvent::Resize(82, 30));

    draw(&mut terminal, &app);
    let text = screen_text(&terminal);
    let (row, line) = text
        .lines()
        .enumerate()
        .find(|(_, l)| l.contains("Show Sorted"))
        .expect("test: button rendered");
    let column = line
        .find("Show Sorted")
        .map(|byte| line[..byte].chars().count())
        .expect("test: button column");

    apply_event(
        &mut app,
        InputEvent::Click {
            column: column as u16,
            row: row as u16,
        },
    );
    draw(&mut terminal, &app);

    assert!(screen_text(&terminal).contains("Show Unsorted"));
}

#[test]
fn test_render_survives_tiny_and_huge_sizes() {
    let app = App::new(Board::with_defaults(&mut board_rng(Some(1))));
    for (w, h) in [(1, 1), (66, 13), (250, 80)] {
        let mut terminal = Terminal::new(TestBackend::new(w, h)).expect("test: terminal");
        draw(&mut terminal, &app);
    }
}
