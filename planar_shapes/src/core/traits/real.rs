use super::FuzzyOrd;
use static_aabb2d_index::IndexableNum;

/// Trait representing a real number coordinate type (`f32` or `f64`) that can be fuzzy compared,
/// ordered, and stored in a spatial index.
pub trait Real:
    num_traits::real::Real
    + num_traits::Bounded
    + FuzzyOrd
    + std::default::Default
    + std::fmt::Debug
    + std::fmt::Display
    + IndexableNum
    + Send
    + Sync
    + 'static
{
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

impl Real for f32 {
    #[inline]
    fn two() -> Self {
        2.0f32
    }
}

impl Real for f64 {
    #[inline]
    fn two() -> Self {
        2.0f64
    }
}
