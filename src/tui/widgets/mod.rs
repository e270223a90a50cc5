//! # Module: TUI Widgets
//!
//! ## Responsibility
//! Rendering widgets for the board screen. Each widget is a pure function that
//! takes state and a layout rect, and renders into a frame.
//!
//! ## Guarantees
//! - All widgets handle zero-size areas without panicking
//! - Cell colors come straight from the board's derived cells

pub mod button;
pub mod grid;
