//! Core numeric traits used throughout planar_shapes.
mod fuzzy_eq;
mod fuzzy_ord;
mod real;

pub use fuzzy_eq::{FuzzyEq, DEFAULT_DECIMAL_PRECISION, F32_DECIMAL_PRECISION};
pub use fuzzy_ord::FuzzyOrd;
pub use real::Real;
