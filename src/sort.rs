//! # Module: Sort
//!
//! ## Responsibility
//! Stable top-down merge sort used to build the sorted view of the board.
//!
//! ## Guarantees
//! - Output is a permutation of the input
//! - Output is ascending by key
//! - Equal keys keep their input order (ties are taken from the left run)
//! - The input slice is never modified
//!
//! ## NOT Responsible For
//! - Parsing labels; keys come from typed fields

use crate::entry::Entry;

/// Returns a sorted copy of `items`, ascending by `key`, using a stable merge sort.
///
/// Runs in O(n log n) time with O(n) scratch space per merge level.
pub fn merge_sort_by_key<T, K, F>(items: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K + Copy,
{
    if items.len() <= 1 {
        return items.to_vec();
    }
    let mid = items.len() / 2;
    let left = merge_sort_by_key(&items[..mid], key);
    let right = merge_sort_by_key(&items[mid..], key);
    merge(left, right, key)
}

/// Merges two runs already sorted by `key`.
fn merge<T, K, F>(left: Vec<T>, right: Vec<T>, key: F) -> Vec<T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => key(l) <= key(r),
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        out.extend(next);
    }
    out
}

/// Returns the entries sorted ascending by magnitude, stable on ties.
pub fn sorted_by_magnitude(entries: &[Entry]) -> Vec<Entry> {
    merge_sort_by_key(entries, Entry::magnitude)
}
