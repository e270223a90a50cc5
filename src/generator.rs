//! # Module: Generator
//!
//! ## Responsibility
//! Produces the startup collection of entries with uniformly random magnitudes.
//!
//! ## Guarantees
//! - Exactly `count` entries are returned
//! - Every magnitude lies inside the requested inclusive range
//! - The RNG is injected, so a seeded `StdRng` yields a reproducible board

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::entry::Entry;

/// Default inclusive HP range.
pub const DEFAULT_HP_RANGE: RangeInclusive<u32> = 1..=500;

/// Generates `count` entries with magnitudes drawn uniformly from `range`.
///
/// An empty range (start > end) yields no entries rather than panicking.
pub fn generate_entries<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    range: RangeInclusive<u32>,
) -> Vec<Entry> {
    if range.is_empty() {
        return Vec::new();
    }
    (0..count)
        .map(|_| Entry::new(rng.gen_range(range.clone())))
        .collect()
}

/// Builds the RNG used at startup: seeded when `seed` is given, from OS
/// entropy otherwise.
pub fn board_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
