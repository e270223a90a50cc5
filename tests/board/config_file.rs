//! Config files driving board construction.

use std::io::Write;

use hp_board::config::loader::load_from_file;
use hp_board::config::validation::ConfigError;
use hp_board::generator::board_rng;
use hp_board::{Board, BoardError};

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("test: tempfile");
    file.write_all(content.as_bytes()).expect("test: write");
    file
}

#[test]
fn test_seeded_config_reproduces_board() {
    let file = write_config("[hp]\nseed = 31337\n");
    let config = load_from_file(file.path()).expect("test: load");

    let a = Board::generate(&mut board_rng(config.hp.seed), &config);
    let b = Board::generate(&mut board_rng(config.hp.seed), &config);
    assert_eq!(a.unsorted(), b.unsorted());
    assert_eq!(a.cells(), b.cells());
}

#[test]
fn test_invalid_config_surfaces_as_board_error() {
    let file = write_config("[hp]\nmin = 9\nmax = 3\n");
    let err: BoardError = load_from_file(file.path())
        .expect_err("test: invalid range")
        .into();
    assert!(matches!(err, BoardError::Config(ConfigError::Validation(_))));
    assert!(err.to_string().contains("hp.min"));
}

#[test]
fn test_small_grid_config_builds_small_board() {
    let file = write_config("[grid]\nrows = 2\ncols = 3\n\n[hp]\nseed = 4\n");
    let config = load_from_file(file.path()).expect("test: load");
    let board = Board::generate(&mut board_rng(config.hp.seed), &config);
    assert_eq!(board.unsorted().len(), 6);
    assert_eq!(board.cells().len(), 6);
}
