//! # Module: Entry
//!
//! ## Responsibility
//! The value shown in one grid cell: an HP magnitude and its display label.
//!
//! ## Guarantees
//! - `label` is always `"HP:<magnitude>"` for entries built with [`Entry::new`]
//! - Entries are immutable once constructed (fields are private)
//!
//! ## NOT Responsible For
//! - Choosing magnitudes (that belongs to `generator`)
//! - Ordering (that belongs to `sort`)

use std::fmt;

use crate::BoardError;

/// Prefix of every display label.
pub const HP_PREFIX: &str = "HP:";

/// One (magnitude, label) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    magnitude: u32,
    label: String,
}

impl Entry {
    /// Creates an entry with the canonical `"HP:<magnitude>"` label.
    pub fn new(magnitude: u32) -> Self {
        Self {
            magnitude,
            label: format!("{HP_PREFIX}{magnitude}"),
        }
    }

    /// Builds an entry from an existing display label.
    ///
    /// # Errors
    /// Returns [`BoardError::MalformedLabel`] if `label` is not `"HP:<integer>"`.
    pub fn from_label(label: &str) -> Result<Self, BoardError> {
        parse_hp_label(label).map(Self::new)
    }

    /// The HP magnitude.
    pub fn magnitude(&self) -> u32 {
        self.magnitude
    }

    /// The display label, e.g. `"HP:137"`.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Extracts the magnitude from an `"HP:<integer>"` label.
///
/// The digits must follow the prefix directly; signs and whitespace are rejected.
///
/// # Errors
/// Returns [`BoardError::MalformedLabel`] for anything else.
pub fn parse_hp_label(label: &str) -> Result<u32, BoardError> {
    let digits = label
        .strip_prefix(HP_PREFIX)
        .filter(|d| !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()))
        .ok_or_else(|| BoardError::MalformedLabel(label.to_string()))?;
    digits
        .parse()
        .map_err(|_| BoardError::MalformedLabel(label.to_string()))
}
