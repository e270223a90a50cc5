//! # Module: TUI App State
//!
//! ## Responsibility
//! Owns the board plus the screen-level flags (quit, help overlay, viewport).
//! State transitions are deterministic and testable without a terminal.
//!
//! ## Guarantees
//! - `toggle()` always changes the board's display mode exactly once
//! - `min_size()` is derived from the grid dimensions, never hard-coded

use crate::board::Board;

/// Narrowest cell that still fits a `HP:<n>` label with padding.
pub const MIN_CELL_WIDTH: u16 = 8;

/// Shortest cell (one text line).
pub const MIN_CELL_HEIGHT: u16 = 1;

/// Height of the toggle button row, including its border.
pub const BUTTON_HEIGHT: u16 = 3;

/// Width of the toggle button, including its border.
pub const BUTTON_WIDTH: u16 = 21;

/// Primary application state for the board screen.
#[derive(Debug)]
pub struct App {
    /// The board being displayed.
    pub board: Board,
    /// Whether the application should exit.
    pub should_quit: bool,
    /// Whether the help overlay is visible.
    pub show_help: bool,
    /// Last known terminal size (columns, rows), used for mouse hit-testing.
    pub viewport: (u16, u16),
    /// Number of toggles performed since startup.
    pub toggle_count: u64,
}

impl App {
    /// Creates a new `App` showing `board` in its initial arrangement.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            should_quit: false,
            show_help: false,
            viewport: (0, 0),
            toggle_count: 0,
        }
    }

    /// Toggles the board between unsorted and sorted arrangements.
    pub fn toggle(&mut self) {
        self.board.toggle();
        self.toggle_count += 1;
    }

    /// Smallest terminal size (columns, rows) that renders the whole grid.
    ///
    /// Grid cells plus the outer border, with the button row beneath.
    pub fn min_size(&self) -> (u16, u16) {
        let cols = u16::try_from(self.board.cols()).unwrap_or(u16::MAX);
        let rows = u16::try_from(self.board.rows()).unwrap_or(u16::MAX);
        let width = cols
            .saturating_mul(MIN_CELL_WIDTH)
            .max(BUTTON_WIDTH)
            .saturating_add(2);
        let height = rows
            .saturating_mul(MIN_CELL_HEIGHT)
            .saturating_add(BUTTON_HEIGHT)
            .saturating_add(2);
        (width, height)
    }

    /// Whether a `width` × `height` screen is large enough to draw the board.
    pub fn fits(&self, width: u16, height: u16) -> bool {
        let (min_cols, min_rows) = self.min_size();
        width >= min_cols && height >= min_rows
    }
}
