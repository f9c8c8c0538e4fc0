/// Number of decimal places used for the default `f64` fuzzy epsilon (`10^-6`).
pub const DEFAULT_DECIMAL_PRECISION: i32 = 6;

/// Number of decimal places used for the `f32` fuzzy epsilon (`10^-3`). A single `f32` ulp is
/// already above `10^-6` for magnitudes past 64.
pub const F32_DECIMAL_PRECISION: i32 = 3;

/// Trait for fuzzy equality comparisons with floating point numbers.
///
/// All shape comparisons (equality, containment) go through this trait so that rounding error
/// introduced by transformations is absorbed. Values are considered equal when their difference is
/// strictly less than the epsilon. Note this relation is not transitive: `a ~ b` and `b ~ c` does
/// not imply `a ~ c`.
///
/// # Examples
///
/// ```
/// # use planar_shapes::core::traits::*;
/// let a = 0.1 + 0.2;
/// let b = 0.3;
///
/// // Direct comparison would fail due to floating point precision
/// assert_ne!(a, b);
///
/// // Fuzzy comparison succeeds
/// assert!(a.fuzzy_eq(b));
/// ```
pub trait FuzzyEq: Sized + Copy {
    /// Returns the default epsilon value for fuzzy comparisons.
    fn fuzzy_epsilon() -> Self;

    /// Returns the epsilon for the given number of decimal places, e.g. `3` gives `0.001`.
    fn epsilon_for_precision(decimal_places: i32) -> Self;

    /// Returns `true` is this object is approximately equal to the other one, using
    /// a provided epsilon value.
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// Returns `true` is this object is approximately equal to the other one, using
    /// the implemented [FuzzyEq::fuzzy_epsilon] value.
    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, Self::fuzzy_epsilon())
    }

    /// Returns `true` if this value is approximately equal to zero, using
    /// a provided epsilon value.
    fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool;

    /// Returns `true` if this value is approximately equal to zero, using
    /// the implemented [FuzzyEq::fuzzy_epsilon] value.
    #[inline]
    fn fuzzy_eq_zero(&self) -> bool {
        self.fuzzy_eq_zero_eps(Self::fuzzy_epsilon())
    }
}

macro_rules! impl_fuzzy_eq {
    ($ty:ty, $precision:expr) => {
        impl FuzzyEq for $ty {
            #[inline]
            fn fuzzy_epsilon() -> Self {
                Self::epsilon_for_precision($precision)
            }
            #[inline]
            fn epsilon_for_precision(decimal_places: i32) -> Self {
                (10.0 as $ty).powi(-decimal_places)
            }
            #[inline]
            fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                (*self - other).abs() < fuzzy_epsilon
            }
            #[inline]
            fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool {
                self.abs() < fuzzy_epsilon
            }
        }
    };
}

impl_fuzzy_eq!(f32, F32_DECIMAL_PRECISION);
impl_fuzzy_eq!(f64, DEFAULT_DECIMAL_PRECISION);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_epsilon_matches_precision() {
        assert!((f64::fuzzy_epsilon() - 1e-6).abs() < 1e-18);
        assert!((f64::epsilon_for_precision(3) - 1e-3).abs() < 1e-15);
        assert!((f32::fuzzy_epsilon() - 1e-3).abs() < 1e-9);
    }

    #[test]
    fn f32_epsilon_covers_rounding_at_large_magnitude() {
        let a = 300.0f32;
        let b = a + 4.0 * f32::EPSILON * a;
        assert_ne!(a, b);
        assert!(a.fuzzy_eq(b));
    }

    #[test]
    fn not_transitive() {
        let a = 0.0f64;
        let b = 0.6e-6;
        let c = 1.2e-6;
        assert!(a.fuzzy_eq(b));
        assert!(b.fuzzy_eq(c));
        assert!(!a.fuzzy_eq(c));
    }
}
