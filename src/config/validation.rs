//! Configuration validation engine.
//!
//! ## Responsibility
//! Validate semantic constraints on a parsed [`BoardConfig`] that the type
//! system cannot express (range checks, cross-field invariants).
//!
//! ## Guarantees
//! - Validation collects *all* errors before returning (no short-circuit)
//! - Error messages include the field path and the invalid value

use super::BoardConfig;

/// Largest allowed row or column count.
pub const MAX_GRID_DIM: usize = 32;

/// Largest allowed HP magnitude; keeps labels within the cell width.
pub const MAX_HP: u32 = 9999;

/// Errors arising from configuration parsing, validation, or I/O.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parsing failed.
    #[error("Parse error in {file}: {source}")]
    Parse {
        /// Path of the file that failed to parse.
        file: String,
        /// Underlying TOML deserialization error.
        #[source]
        source: toml::de::Error,
    },

    /// One or more semantic validation rules failed.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A specific field has an out-of-range or contradictory value.
    #[error("Field '{field}' has invalid value {value}: {reason}")]
    InvalidField {
        /// Dot-separated field path (e.g., "hp.min").
        field: String,
        /// String representation of the invalid value.
        value: String,
        /// Human-readable explanation of the constraint.
        reason: String,
    },

    /// File I/O error.
    #[error("IO error reading {file}: {source}")]
    Io {
        /// Path of the file that could not be read.
        file: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ConfigError {
    ConfigError::InvalidField {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Validate all semantic constraints on a [`BoardConfig`].
///
/// # Errors
///
/// Returns every violation found.
pub fn validate(config: &BoardConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    for (field, value) in [("grid.rows", config.grid.rows), ("grid.cols", config.grid.cols)] {
        if value == 0 {
            errors.push(invalid(field, value, "must be at least 1"));
        } else if value > MAX_GRID_DIM {
            errors.push(invalid(field, value, "must be at most 32"));
        }
    }

    if config.hp.min == 0 {
        errors.push(invalid("hp.min", config.hp.min, "must be at least 1"));
    }
    if config.hp.max > MAX_HP {
        errors.push(invalid("hp.max", config.hp.max, "must be at most 9999"));
    }
    if config.hp.min > config.hp.max {
        errors.push(invalid(
            "hp.min",
            config.hp.min,
            &format!("must not exceed hp.max ({})", config.hp.max),
        ));
    }

    if config.observability.log_file.file_name().is_none() {
        errors.push(invalid(
            "observability.log_file",
            config.observability.log_file.display(),
            "must name a file",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
