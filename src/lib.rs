//! `variate`: random-variate generation primitives.
//!
//! This crate is meant to be a low-level “variate toolbox” that other crates can
//! depend on without pulling in domain-specific machinery. Every sampler draws
//! from a single uniform-[0,1) source (see [`source`]).
//!
//! Exposed modules:
//! - `alias`: O(1) discrete weighted sampling via an alias table (Vose's method).
//! - `continuous`: uniform-in-range, exponential, Pareto, bounded Pareto.
//! - `shuffle`: in-place Fisher–Yates permutation.
//! - `source`: the unit-interval draw every other module consumes.

#![forbid(unsafe_code)]

pub mod alias;
pub mod continuous;
pub mod shuffle;
pub mod source;

pub use alias::{AliasError, AliasTable};
pub use continuous::{
    exponential, exponential_with_rng, pareto, pareto_bounded, pareto_bounded_with_rng,
    pareto_with_rng, uniform, uniform_with_rng,
};
pub use shuffle::{shuffle, shuffle_with_rng};
