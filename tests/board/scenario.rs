//! End-to-end board scenarios without a terminal.

use hp_board::board::DEFAULT_ROWS;
use hp_board::generator::board_rng;
use hp_board::{hp_color, Board, BoardConfig, Cell, DisplayMode, Entry};

fn labels(board: &Board) -> Vec<String> {
    board
        .cells()
        .iter()
        .map(|c| c.label.clone().unwrap_or_default())
        .collect()
}

#[test]
fn test_fixed_input_sorts_and_toggles() {
    let entries = [300, 100, 500, 1].into_iter().map(Entry::new).collect();
    let mut board = Board::from_entries(entries, 2, 2, 500);

    assert_eq!(labels(&board), ["HP:300", "HP:100", "HP:500", "HP:1"]);
    assert_eq!(board.button_label(), "Show Sorted");

    board.toggle();

    assert_eq!(labels(&board), ["HP:1", "HP:100", "HP:300", "HP:500"]);
    assert_eq!(board.button_label(), "Show Unsorted");
    let magnitudes: Vec<u32> = board.sorted().iter().map(Entry::magnitude).collect();
    assert_eq!(magnitudes, vec![1, 100, 300, 500]);
}

#[test]
fn test_cell_colors_follow_selected_collection() {
    let mut rng = board_rng(Some(2024));
    let mut board = Board::with_defaults(&mut rng);

    for _ in 0..2 {
        for (cell, entry) in board.cells().iter().zip(board.selected()) {
            assert_eq!(cell.color, hp_color(entry.magnitude(), 500));
            assert_eq!(cell.label.as_deref(), Some(entry.label()));
        }
        board.toggle();
    }
}

#[test]
fn test_double_toggle_is_identity_across_seeds() {
    for seed in 0..50 {
        let mut board = Board::with_defaults(&mut board_rng(Some(seed)));
        let cells: Vec<Cell> = board.cells().to_vec();
        let button = board.button_label();
        board.toggle();
        board.toggle();
        assert_eq!(board.cells(), cells.as_slice(), "seed {seed}");
        assert_eq!(board.button_label(), button);
        assert_eq!(board.mode(), DisplayMode::Unsorted);
    }
}

#[test]
fn test_sorted_view_is_ascending_row_major() {
    let mut board = Board::with_defaults(&mut board_rng(Some(77)));
    board.toggle();
    let shown: Vec<u32> = board
        .cells()
        .iter()
        .filter_map(|c| c.label.as_deref())
        .filter_map(|l| hp_board::parse_hp_label(l).ok())
        .collect();
    assert_eq!(shown.len(), 64);
    assert!(shown.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_collections_do_not_change_on_toggle() {
    let mut board = Board::with_defaults(&mut board_rng(Some(5)));
    let unsorted = board.unsorted().to_vec();
    let sorted = board.sorted().to_vec();
    for _ in 0..5 {
        board.toggle();
    }
    assert_eq!(board.unsorted(), unsorted.as_slice());
    assert_eq!(board.sorted(), sorted.as_slice());
}

#[test]
fn test_custom_grid_from_config() {
    let mut config = BoardConfig::default();
    config.grid.rows = 3;
    config.grid.cols = 5;
    config.hp.min = 10;
    config.hp.max = 20;
    let board = Board::generate(&mut board_rng(Some(1)), &config);

    assert_eq!(board.cells().len(), 15);
    assert_eq!(board.grid_rows().count(), 3);
    assert!(board
        .unsorted()
        .iter()
        .all(|e| (10..=20).contains(&e.magnitude())));
    assert_ne!(board.rows(), DEFAULT_ROWS);
}
