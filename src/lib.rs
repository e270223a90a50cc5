//! # hp-board
//!
//! A terminal board of randomly generated "HP" values. Each of the 8×8 cells
//! is colored on a green-to-red ramp by its magnitude, and a toggle switches
//! the board between generation order and a stable merge-sorted order.
//!
//! ## Architecture
//!
//! ```text
//! generator ──► unsorted ──► sort ──► sorted
//!                   │                   │
//!                   └──────► Board ◄────┘ ──► cells (color + label) ──► tui
//! ```
//!
//! Both collections are built once at startup and never mutated. The only
//! mutable state is the [`board::DisplayMode`] held by [`board::Board`]; the
//! grid cells are re-derived from the selected collection on every toggle.

// ── Lint policy ───────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(missing_docs)]

use std::path::Path;

use thiserror::Error;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

pub mod board;
pub mod color;
pub mod config;
pub mod entry;
pub mod generator;
pub mod sort;

#[cfg(feature = "tui")]
pub mod tui;

// Re-exports for convenience
pub use board::{Board, Cell, DisplayMode};
pub use color::{hp_color, Rgb};
pub use config::BoardConfig;
pub use entry::{parse_hp_label, Entry};
pub use generator::generate_entries;
pub use sort::{merge_sort_by_key, sorted_by_magnitude};

/// Where log output is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Standard error. Only safe while the interactive screen is not active.
    Stderr,
    /// Append to the given file, so logs never corrupt the terminal UI.
    File(&'a Path),
}

/// Initialise the global tracing subscriber.
///
/// `format` selects the output style:
/// - [`config::LogFormat::Json`] — structured JSON output for log aggregators
/// - [`config::LogFormat::Pretty`] — human-readable output for local use
///
/// The `LOG_FORMAT` environment variable (`"json"` or `"pretty"`) overrides
/// `format` when set. Filter level is controlled by `RUST_LOG`
/// (e.g. `RUST_LOG=debug`) and defaults to `info`.
///
/// # Errors
///
/// Returns [`BoardError::Other`] if the global subscriber has already been set
/// (e.g. by a previous call or a test harness), if `target` names a path
/// with no file name component, or if the log file's directory cannot be
/// created or opened for writing.
///
/// # Panics
///
/// This function never panics.
pub fn init_tracing(format: config::LogFormat, target: LogTarget<'_>) -> Result<(), BoardError> {
    let format = match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => config::LogFormat::Json,
        Ok("pretty") => config::LogFormat::Pretty,
        _ => format,
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let result = match target {
        LogTarget::Stderr => match format {
            config::LogFormat::Json => tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
            config::LogFormat::Pretty => tracing_subscriber::fmt()
                .pretty()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
        },
        LogTarget::File(path) => {
            let file_name = path.file_name().ok_or_else(|| {
                BoardError::Other(format!("log file path has no file name: {}", path.display()))
            })?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(file_name.to_string_lossy())
                .build(dir)
                .map_err(|e| {
                    BoardError::Other(format!("cannot open log file {}: {e}", path.display()))
                })?;
            match format {
                config::LogFormat::Json => tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_ansi(false)
                    .with_writer(appender)
                    .try_init(),
                config::LogFormat::Pretty => tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_ansi(false)
                    .with_writer(appender)
                    .try_init(),
            }
        }
    };

    result.map_err(|e| BoardError::Other(format!("tracing init failed: {e}")))
}

/// Top-level errors.
///
/// All variants implement `std::error::Error` via [`thiserror`].
#[derive(Error, Debug)]
pub enum BoardError {
    /// A display label did not match the `HP:<integer>` format.
    #[error("malformed HP label: {0:?}")]
    MalformedLabel(String),

    /// The configuration file could not be loaded or failed validation.
    #[error("configuration error: {0}")]
    Config(#[from] config::validation::ConfigError),

    /// Terminal setup, drawing, or restore failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Catch-all for errors that do not fit a specific variant.
    #[error("{0}")]
    Other(String),
}
