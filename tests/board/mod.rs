//! Integration tests for the HP board.
//!
//! These tests verify cross-module behavior: generation feeding the sorter,
//! sort and color properties over arbitrary inputs, config files driving board
//! construction, and end-to-end toggling through the terminal front end.

mod config_file;
mod properties;
mod scenario;
#[cfg(feature = "tui")]
mod screen;
