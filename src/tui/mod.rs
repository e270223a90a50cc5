//! # Module: Terminal Board
//!
//! ## Responsibility
//! Presents the [`Board`](crate::board::Board) in a terminal using Ratatui: the
//! colored grid in the upper portion of the screen and a toggle button beneath
//! it. Keyboard and mouse input are translated into board toggles.
//!
//! ## Guarantees
//! - No panics in any rendering or update path
//! - Clean terminal restore on exit, including on panic (see the binary)
//! - Minimum size guard instead of a garbled grid on tiny terminals
//!
//! ## NOT Responsible For
//! - Generating or sorting entries (read-only view over `Board`)

pub mod app;
pub mod events;
pub mod ui;
pub mod widgets;
