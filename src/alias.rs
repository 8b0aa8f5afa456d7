//! Alias-table discrete sampling.
//!
//! Samples an index from an arbitrary weighted discrete distribution in O(1)
//! per draw after an O(n) build, using **Vose's method**.
//!
//! Each slot `i` holds a biased-coin probability `prob[i]` and a fallback
//! index `alias[i]`. A draw picks a slot uniformly, then flips the slot's coin
//! to choose between the slot itself and its alias. Construction pairs
//! under-full slots with over-full ones via two FIFO worklists; leftover
//! entries near the 1.0 boundary are rounding artifacts and get clamped to
//! the always-accept state.
//!
//! ## References
//!
//! - Walker (1977): alias method.
//! - Vose (1991): *A linear algorithm for generating random numbers with a
//!   given distribution*.
//!
//! Notes:
//! - This module provides `sample_with_rng` for deterministic testing/benchmarking.

use crate::source;
use rand::prelude::*;
use std::collections::VecDeque;

/// Errors for alias-table construction.
#[derive(Debug, Clone, PartialEq)]
pub enum AliasError {
    /// Weight is not finite (NaN/inf).
    NonFiniteWeight(f64),
    /// Weight is negative.
    NegativeWeight(f64),
    /// Weights sum to zero, so no distribution exists.
    ZeroWeightSum,
}

impl std::fmt::Display for AliasError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFiniteWeight(w) => write!(f, "weight must be finite (got {w})"),
            Self::NegativeWeight(w) => write!(f, "weight must be >= 0 (got {w})"),
            Self::ZeroWeightSum => write!(f, "weights must not sum to zero"),
        }
    }
}

impl std::error::Error for AliasError {}

/// An alias table for O(1) weighted index sampling.
///
/// Build once with [`AliasTable::from_weights`] (or [`AliasTable::init`] to
/// replace an existing table), then call [`AliasTable::sample`] repeatedly.
/// Sampling draws over the limit reproduce each index `i` with frequency
/// `weights[i] / sum(weights)`.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    prob: Vec<f64>,
    alias: Vec<usize>,
}

impl AliasTable {
    /// Create an empty table. Sampling it always returns 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from non-negative weights. **O(n)**.
    ///
    /// Weights need not sum to 1; they are normalized internally.
    ///
    /// # Errors
    ///
    /// * [`AliasError::NonFiniteWeight`] if any weight is NaN or infinite
    /// * [`AliasError::NegativeWeight`] if any weight is negative
    /// * [`AliasError::ZeroWeightSum`] if the weights sum to zero
    pub fn from_weights(weights: &[f64]) -> Result<Self, AliasError> {
        let mut table = Self::new();
        table.init(weights)?;
        Ok(table)
    }

    /// Replace the table's distribution with one built from `weights`.
    ///
    /// The build is all-or-nothing: on error the previous distribution is
    /// left untouched. An empty slice yields a degenerate single-slot table
    /// whose samples are always 0; this mirrors the empty-input fallback of
    /// the alias method rather than treating emptiness as an error.
    ///
    /// # Errors
    ///
    /// Same as [`AliasTable::from_weights`].
    pub fn init(&mut self, weights: &[f64]) -> Result<(), AliasError> {
        let n = weights.len();

        if n == 0 {
            self.prob = vec![0.0];
            self.alias = vec![0];
            return Ok(());
        }

        let mut sum = 0.0_f64;
        for &w in weights {
            if !w.is_finite() {
                return Err(AliasError::NonFiniteWeight(w));
            }
            if w < 0.0 {
                return Err(AliasError::NegativeWeight(w));
            }
            sum += w;
        }
        if sum == 0.0 {
            return Err(AliasError::ZeroWeightSum);
        }

        // Scale so the average is 1: p[i] = n * w[i] / sum.
        let mut scaled: Vec<f64> = weights.iter().map(|&w| w * n as f64 / sum).collect();

        // Defaults: always accept, alias to self.
        let mut prob = vec![1.0_f64; n];
        let mut alias: Vec<usize> = (0..n).collect();

        // FIFO worklists keep the pairing order deterministic for a given
        // weight vector, which the tests rely on.
        let mut small: VecDeque<usize> = VecDeque::new();
        let mut large: VecDeque<usize> = VecDeque::new();
        for (i, &p) in scaled.iter().enumerate() {
            if p < 1.0 {
                small.push_back(i);
            } else {
                large.push_back(i);
            }
        }

        // Pair an under-full slot with an over-full one; the small slot keeps
        // its own mass and redirects the remainder to the large one, which
        // donates and gets re-classified.
        while let (Some(&s), Some(&l)) = (small.front(), large.front()) {
            small.pop_front();
            large.pop_front();
            prob[s] = scaled[s];
            alias[s] = l;
            scaled[l] += scaled[s] - 1.0;
            if scaled[l] < 1.0 {
                small.push_back(l);
            } else {
                large.push_back(l);
            }
        }

        // Residual entries sit within rounding error of 1.0; clamp them to
        // the always-accept state.
        for i in large.drain(..).chain(small.drain(..)) {
            prob[i] = 1.0;
            alias[i] = i;
        }

        self.prob = prob;
        self.alias = alias;
        Ok(())
    }

    /// Sample one index in `[0, len)`.
    ///
    /// Convenience wrapper over [`AliasTable::sample_with_rng`]; not
    /// deterministic across processes by design.
    #[inline]
    pub fn sample(&self) -> usize {
        let mut rng = rand::rng();
        self.sample_with_rng(&mut rng)
    }

    /// Sample one index in `[0, len)` using a caller-supplied RNG.
    ///
    /// Consumes exactly two uniform draws, except for tables with at most one
    /// slot, which always return 0 and consume no draws.
    #[inline]
    pub fn sample_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let n = self.prob.len();
        if n <= 1 {
            return 0;
        }

        // u * n can round up to exactly n when u is just below 1.0.
        let i = ((source::unit(rng) * n as f64) as usize).min(n - 1);
        if source::unit(rng) < self.prob[i] {
            i
        } else {
            self.alias[i]
        }
    }

    /// Number of slots in the table.
    pub fn len(&self) -> usize {
        self.prob.len()
    }

    /// Whether the table has no slots (freshly constructed, never initialized).
    pub fn is_empty(&self) -> bool {
        self.prob.is_empty()
    }

    /// Per-slot acceptance probabilities, for diagnostics/testing.
    pub fn probabilities(&self) -> &[f64] {
        &self.prob
    }

    /// Per-slot alias targets, for diagnostics/testing.
    pub fn aliases(&self) -> &[usize] {
        &self.alias
    }
}
