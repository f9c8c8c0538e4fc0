//! Core/common math functions and the 2D point type.
mod base_math;
mod point;

pub use base_math::*;
pub use point::{point, Point};
