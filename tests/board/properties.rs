//! Property tests for the generator, sorter, and color ramp.

use std::collections::HashMap;

use hp_board::generator::{board_rng, DEFAULT_HP_RANGE};
use hp_board::{generate_entries, hp_color, merge_sort_by_key, sorted_by_magnitude, Entry};
use proptest::prelude::*;

fn multiset(entries: &[Entry]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for e in entries {
        *counts.entry(e.label()).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #[test]
    fn generated_magnitudes_stay_in_range(seed in any::<u64>()) {
        let entries = generate_entries(&mut board_rng(Some(seed)), 64, DEFAULT_HP_RANGE);
        prop_assert_eq!(entries.len(), 64);
        for e in &entries {
            prop_assert!((1..=500).contains(&e.magnitude()), "{}", e);
        }
    }

    #[test]
    fn sorted_is_ascending_permutation(magnitudes in prop::collection::vec(1u32..=500, 0..200)) {
        let input: Vec<Entry> = magnitudes.into_iter().map(Entry::new).collect();
        let sorted = sorted_by_magnitude(&input);

        prop_assert_eq!(sorted.len(), input.len());
        prop_assert_eq!(multiset(&sorted), multiset(&input));
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].magnitude() <= pair[1].magnitude());
        }
    }

    #[test]
    fn sort_is_stable(keys in prop::collection::vec(0u8..8, 0..200)) {
        // Tag each key with its input position; few distinct keys forces ties.
        let tagged: Vec<(u8, usize)> = keys.into_iter().zip(0..).collect();
        let sorted = merge_sort_by_key(&tagged, |&(k, _)| k);
        for pair in sorted.windows(2) {
            if pair[0].0 == pair[1].0 {
                prop_assert!(pair[0].1 < pair[1].1, "tie order broken: {:?}", pair);
            }
        }
    }

    #[test]
    fn sort_matches_std_stable_sort(keys in prop::collection::vec(any::<i16>(), 0..300)) {
        let tagged: Vec<(i16, usize)> = keys.into_iter().zip(0..).collect();
        let mut expected = tagged.clone();
        expected.sort_by_key(|&(k, _)| k);
        prop_assert_eq!(merge_sort_by_key(&tagged, |&(k, _)| k), expected);
    }

    #[test]
    fn color_ramp_is_monotonic(a in 0u32..=600, b in 0u32..=600) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let (c_lo, c_hi) = (hp_color(lo, 500), hp_color(hi, 500));
        prop_assert!(c_lo.r <= c_hi.r);
        prop_assert!(c_lo.g >= c_hi.g);
        prop_assert_eq!(c_hi.b, 0);
    }
}
