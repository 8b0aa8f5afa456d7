//! In-place Fisher–Yates shuffling.
//!
//! Walks the slice from the back, swapping each position with a uniformly
//! chosen earlier (or equal) position. Produces a permutation uniform over
//! all `L!` orderings, assuming the unit draws are uniform and independent.
//!
//! Notes:
//! - This module provides `shuffle_with_rng` for deterministic testing/benchmarking.

use crate::source;
use rand::prelude::*;

/// Shuffle a slice in place.
///
/// Convenience wrapper over [`shuffle_with_rng`]; not deterministic across
/// processes by design.
pub fn shuffle<T>(items: &mut [T]) {
    let mut rng = rand::rng();
    shuffle_with_rng(items, &mut rng);
}

/// Shuffle a slice in place using a caller-supplied RNG.
///
/// Consumes one uniform draw per position except the last (`len - 1` draws
/// total); slices of length 0 or 1 consume none.
pub fn shuffle_with_rng<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    let mut remaining = items.len();
    while remaining > 1 {
        // u * remaining can round up to exactly `remaining`.
        let j = ((source::unit(rng) * remaining as f64) as usize).min(remaining - 1);
        items.swap(remaining - 1, j);
        remaining -= 1;
    }
}
