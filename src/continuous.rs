//! Continuous-distribution samplers.
//!
//! Each function is inverse-CDF sampling: a closed-form transform of a single
//! uniform draw from [`crate::source`]. For the bounded Pareto with CDF
//! \( F \) truncated to \([low, high]\), the variate is \( F^{-1}(u) \):
//!
//! \[
//! \left( \frac{h + u (l - h)}{l h} \right)^{-1/\alpha},
//! \quad l = low^\alpha, \; h = high^\alpha
//! \]
//!
//! ## References
//!
//! - Devroye (1986): *Non-Uniform Random Variate Generation*, ch. 2 (inversion).
//!
//! Notes:
//! - This module provides `*_with_rng` variants where determinism matters (tests/benches).
//! - Functions that call `rand::rng()` internally are convenience wrappers and are not
//!   deterministic across processes by design.
//! - Invalid parameters are caller errors and panic rather than quietly
//!   returning NaN or infinity.

use crate::source;
use rand::prelude::*;

/// Sample uniformly from `[min, max)`.
///
/// `min > max` is not an error; the draw is simply mapped onto the reversed
/// range `(max, min]`.
pub fn uniform(min: f64, max: f64) -> f64 {
    let mut rng = rand::rng();
    uniform_with_rng(min, max, &mut rng)
}

/// Uniform-in-range with a caller-supplied RNG (for tests/benchmarks).
pub fn uniform_with_rng<R: Rng + ?Sized>(min: f64, max: f64, rng: &mut R) -> f64 {
    source::unit(rng) * (max - min) + min
}

/// Sample from an exponential distribution with rate `lambda`.
///
/// # Panics
///
/// Panics if `lambda <= 0`.
pub fn exponential(lambda: f64) -> f64 {
    let mut rng = rand::rng();
    exponential_with_rng(lambda, &mut rng)
}

/// Exponential with a caller-supplied RNG (for tests/benchmarks).
///
/// # Panics
///
/// Panics if `lambda <= 0`.
pub fn exponential_with_rng<R: Rng + ?Sized>(lambda: f64, rng: &mut R) -> f64 {
    assert!(lambda > 0.0, "exponential: lambda must be > 0");
    -source::unit_positive(rng).ln() / lambda
}

/// Sample from a Pareto distribution with scale `x_min` and shape `alpha`.
///
/// # Panics
///
/// Panics if `x_min <= 0` or `alpha <= 0`.
pub fn pareto(x_min: f64, alpha: f64) -> f64 {
    let mut rng = rand::rng();
    pareto_with_rng(x_min, alpha, &mut rng)
}

/// Pareto with a caller-supplied RNG (for tests/benchmarks).
///
/// # Panics
///
/// Panics if `x_min <= 0` or `alpha <= 0`.
pub fn pareto_with_rng<R: Rng + ?Sized>(x_min: f64, alpha: f64, rng: &mut R) -> f64 {
    assert!(x_min > 0.0, "pareto: x_min must be > 0");
    assert!(alpha > 0.0, "pareto: alpha must be > 0");
    x_min * source::unit_positive(rng).powf(-1.0 / alpha)
}

/// Sample from a Pareto distribution truncated to `[low, high]`.
///
/// # Panics
///
/// Panics if `low <= 0`, `low > high`, or `alpha <= 0`.
pub fn pareto_bounded(low: f64, high: f64, alpha: f64) -> f64 {
    let mut rng = rand::rng();
    pareto_bounded_with_rng(low, high, alpha, &mut rng)
}

/// Bounded Pareto with a caller-supplied RNG (for tests/benchmarks).
///
/// # Panics
///
/// Panics if `low <= 0`, `low > high`, or `alpha <= 0`.
pub fn pareto_bounded_with_rng<R: Rng + ?Sized>(
    low: f64,
    high: f64,
    alpha: f64,
    rng: &mut R,
) -> f64 {
    assert!(low > 0.0, "pareto_bounded: low must be > 0");
    assert!(low <= high, "pareto_bounded: low must be <= high");
    assert!(alpha > 0.0, "pareto_bounded: alpha must be > 0");

    let u = source::unit(rng);
    let l = low.powf(alpha);
    let h = high.powf(alpha);
    ((h + u * (l - h)) / (l * h)).powf(-1.0 / alpha)
}
