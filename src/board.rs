//! # Module: Board
//!
//! ## Responsibility
//! Owns both collections and the display mode, and derives the grid cells from
//! whichever collection is selected. This is the single source of truth for
//! what the screen shows; the `tui` module only reads from it.
//!
//! ## Guarantees
//! - `unsorted` and `sorted` never change after construction
//! - `cells` always has exactly `rows × cols` elements, in row-major order
//! - Every toggle performs a full re-render of `cells`
//! - Toggling twice restores the previous cells and button label
//!
//! ## NOT Responsible For
//! - Drawing to a terminal (that belongs to `tui`)
//! - Choosing magnitudes (that belongs to `generator`)

use rand::Rng;
use tracing::{debug, info};

use crate::color::{hp_color, Rgb, DEFAULT_HP_MAX, PLACEHOLDER};
use crate::config::BoardConfig;
use crate::entry::Entry;
use crate::generator::generate_entries;
use crate::sort::sorted_by_magnitude;

/// Default number of grid rows.
pub const DEFAULT_ROWS: usize = 8;

/// Default number of grid columns.
pub const DEFAULT_COLS: usize = 8;

/// Which collection the grid is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Generation order.
    #[default]
    Unsorted,
    /// Ascending by magnitude.
    Sorted,
}

impl DisplayMode {
    /// The mode after one toggle.
    pub fn toggled(self) -> Self {
        match self {
            Self::Unsorted => Self::Sorted,
            Self::Sorted => Self::Unsorted,
        }
    }

    /// Label for the toggle button: names the mode a press would switch to.
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Unsorted => "Show Sorted",
            Self::Sorted => "Show Unsorted",
        }
    }

    /// Short name used in logs and the title bar.
    pub fn name(self) -> &'static str {
        match self {
            Self::Unsorted => "unsorted",
            Self::Sorted => "sorted",
        }
    }
}

/// Visual content of one grid position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Background color.
    pub color: Rgb,
    /// Label text, absent for placeholder positions.
    pub label: Option<String>,
}

impl Cell {
    /// The cell shown where the selected collection has no entry.
    pub fn placeholder() -> Self {
        Self {
            color: PLACEHOLDER,
            label: None,
        }
    }
}

/// Display controller for the HP grid.
#[derive(Debug, Clone)]
pub struct Board {
    unsorted: Vec<Entry>,
    sorted: Vec<Entry>,
    mode: DisplayMode,
    rows: usize,
    cols: usize,
    hp_max: u32,
    cells: Vec<Cell>,
}

impl Board {
    /// Builds a board from a fixed collection, sorting it once and rendering
    /// the unsorted arrangement.
    ///
    /// `hp_max` is the top of the color ramp.
    pub fn from_entries(entries: Vec<Entry>, rows: usize, cols: usize, hp_max: u32) -> Self {
        let sorted = sorted_by_magnitude(&entries);
        let mut board = Self {
            unsorted: entries,
            sorted,
            mode: DisplayMode::Unsorted,
            rows,
            cols,
            hp_max,
            cells: Vec::with_capacity(rows * cols),
        };
        board.render();
        board
    }

    /// Generates a full board of random entries according to `config`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, config: &BoardConfig) -> Self {
        let (rows, cols) = (config.grid.rows, config.grid.cols);
        let entries = generate_entries(rng, rows * cols, config.hp.min..=config.hp.max);
        info!(
            rows,
            cols,
            hp_min = config.hp.min,
            hp_max = config.hp.max,
            entries = entries.len(),
            "board generated"
        );
        Self::from_entries(entries, rows, cols, config.hp.max)
    }

    /// Builds the default 8×8 board over HP 1–500.
    pub fn with_defaults<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::generate(rng, &BoardConfig::default())
    }

    /// Flips the display mode and re-renders every cell.
    pub fn toggle(&mut self) {
        self.mode = self.mode.toggled();
        self.render();
        debug!(mode = self.mode.name(), "board toggled");
    }

    /// Recomputes every cell from the selected collection, row-major.
    fn render(&mut self) {
        let hp_max = self.hp_max;
        let selected = self.selected();
        let cells = (0..self.rows * self.cols)
            .map(|i| match selected.get(i) {
                Some(entry) => Cell {
                    color: hp_color(entry.magnitude(), hp_max),
                    label: Some(entry.label().to_string()),
                },
                None => Cell::placeholder(),
            })
            .collect();
        self.cells = cells;
    }

    /// The collection the grid currently shows.
    pub fn selected(&self) -> &[Entry] {
        match self.mode {
            DisplayMode::Unsorted => &self.unsorted,
            DisplayMode::Sorted => &self.sorted,
        }
    }

    /// Entries in generation order.
    pub fn unsorted(&self) -> &[Entry] {
        &self.unsorted
    }

    /// Entries ascending by magnitude.
    pub fn sorted(&self) -> &[Entry] {
        &self.sorted
    }

    /// Current display mode.
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Current toggle button text.
    pub fn button_label(&self) -> &'static str {
        self.mode.button_label()
    }

    /// Number of grid rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of grid columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cell at (`row`, `col`), or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col)
    }

    /// Iterates the grid one row at a time.
    pub fn grid_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols.max(1))
    }

    /// Renders the current arrangement as plain text, one grid row per line.
    pub fn to_text(&self) -> String {
        let width = self
            .cells
            .iter()
            .filter_map(|c| c.label.as_deref().map(str::len))
            .max()
            .unwrap_or(0);
        self.grid_rows()
            .map(|row| {
                row.iter()
                    .map(|c| format!("{:<width$}", c.label.as_deref().unwrap_or("-")))
                    .collect::<Vec<_>>()
                    .join(" ")
                    .trim_end()
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::from_entries(Vec::new(), DEFAULT_ROWS, DEFAULT_COLS, DEFAULT_HP_MAX)
    }
}
