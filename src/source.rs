//! Unit-interval draws.
//!
//! Every sampler in this crate consumes randomness exclusively through these
//! helpers, so “one draw” means the same thing everywhere and draw counts per
//! operation are well defined (relevant for deterministic tests).
//!
//! Notes:
//! - Callers thread an explicit `Rng` through the `*_with_rng` entrypoints of
//!   the other modules; this module never owns an RNG of its own.

use rand::prelude::*;

/// One uniform draw in `[0, 1)`.
#[inline]
pub fn unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random::<f64>()
}

/// One uniform draw in `(0, 1)`, clamped away from zero.
///
/// Use this where the draw feeds a logarithm or a negative power, so a
/// zero draw cannot produce an infinity.
#[inline]
pub fn unit_positive<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    unit(rng).max(f64::MIN_POSITIVE)
}
