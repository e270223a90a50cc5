//! # Module: Board Configuration
//!
//! ## Responsibility
//! Parse and validate the optional TOML configuration file:
//! ```text
//! hp-board --config board.toml
//! ```
//!
//! ## Guarantees
//! - Every key is optional; an empty file yields [`BoardConfig::default`]
//! - Validated: semantic constraints are checked before a config is accepted
//! - Schema-exportable: JSON Schema output enables IDE autocomplete
//!
//! ## NOT Responsible For
//! - Building the board from config (that belongs to `board`)
//! - Installing the log subscriber (that belongs to `init_tracing`)

pub mod loader;
pub mod validation;

use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::board::{DEFAULT_COLS, DEFAULT_ROWS};
use crate::color::DEFAULT_HP_MAX;

// ── Default value functions ──────────────────────────────────────────────

fn default_rows() -> usize {
    DEFAULT_ROWS
}

fn default_cols() -> usize {
    DEFAULT_COLS
}

fn default_hp_min() -> u32 {
    1
}

fn default_hp_max() -> u32 {
    DEFAULT_HP_MAX
}

fn default_log_file() -> PathBuf {
    PathBuf::from("hp-board.log")
}

// ── Top-level config ─────────────────────────────────────────────────────

/// Root configuration.
///
/// # Example
///
/// ```toml
/// [grid]
/// rows = 8
/// cols = 8
///
/// [hp]
/// min = 1
/// max = 500
/// seed = 42
///
/// [observability]
/// log_format = "json"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BoardConfig {
    /// Grid dimensions.
    #[serde(default)]
    pub grid: GridConfig,
    /// HP value range and RNG seed.
    #[serde(default)]
    pub hp: HpConfig,
    /// Logging settings.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Grid dimensions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GridConfig {
    /// Number of rows (1–32).
    #[serde(default = "default_rows")]
    pub rows: usize,
    /// Number of columns (1–32).
    #[serde(default = "default_cols")]
    pub cols: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
        }
    }
}

/// HP range and randomness.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct HpConfig {
    /// Smallest magnitude, inclusive. Must be at least 1.
    #[serde(default = "default_hp_min")]
    pub min: u32,
    /// Largest magnitude, inclusive. Also the top of the color ramp.
    #[serde(default = "default_hp_max")]
    pub max: u32,
    /// RNG seed for a reproducible board. `None` seeds from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for HpConfig {
    fn default() -> Self {
        Self {
            min: default_hp_min(),
            max: default_hp_max(),
            seed: None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ObservabilityConfig {
    /// Log output format.
    #[serde(default)]
    pub log_format: LogFormat,
    /// File receiving logs while the interactive screen is active.
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::default(),
            log_file: default_log_file(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable log output.
    #[default]
    Pretty,
    /// Structured JSON log output for machine consumption.
    Json,
}

/// Export the JSON Schema for [`BoardConfig`].
///
/// # Errors
///
/// Returns `serde_json::Error` if schema serialization fails.
pub fn export_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(BoardConfig);
    serde_json::to_string_pretty(&schema)
}
