use super::FuzzyEq;

/// Ordering checks that treat values within the epsilon as touching.
///
/// `a.fuzzy_lt(b)` reads as "`a` is below `b` or close enough to count as on it", which is what
/// border-inclusive tests against rectangles need.
pub trait FuzzyOrd: FuzzyEq {
    /// `true` when `self < other + fuzzy_epsilon`.
    fn fuzzy_lt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    #[inline]
    fn fuzzy_lt(&self, other: Self) -> bool {
        self.fuzzy_lt_eps(other, Self::fuzzy_epsilon())
    }

    /// `true` when `self` lies in `[min, max]` with both ends widened by `fuzzy_epsilon`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_shapes::core::traits::*;
    /// assert!(4.0f64.fuzzy_in_range_eps(0.0, 4.0, 1e-6));
    /// assert!(4.0000001f64.fuzzy_in_range_eps(0.0, 4.0, 1e-6));
    /// assert!(!(-0.1f64).fuzzy_in_range_eps(0.0, 4.0, 1e-6));
    /// ```
    #[inline]
    fn fuzzy_in_range_eps(&self, min: Self, max: Self, fuzzy_epsilon: Self) -> bool {
        min.fuzzy_lt_eps(*self, fuzzy_epsilon) && self.fuzzy_lt_eps(max, fuzzy_epsilon)
    }

    #[inline]
    fn fuzzy_in_range(&self, min: Self, max: Self) -> bool {
        self.fuzzy_in_range_eps(min, max, Self::fuzzy_epsilon())
    }
}

impl FuzzyOrd for f32 {
    #[inline]
    fn fuzzy_lt_eps(&self, other: f32, fuzzy_epsilon: f32) -> bool {
        *self - other < fuzzy_epsilon
    }
}

impl FuzzyOrd for f64 {
    #[inline]
    fn fuzzy_lt_eps(&self, other: f64, fuzzy_epsilon: f64) -> bool {
        *self - other < fuzzy_epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lt_includes_values_within_epsilon() {
        assert!(1.0f64.fuzzy_lt(2.0));
        assert!(2.0000001f64.fuzzy_lt(2.0));
        assert!(!2.1f64.fuzzy_lt(2.0));
    }

    #[test]
    fn in_range_is_closed() {
        assert!(0.0f64.fuzzy_in_range(0.0, 1.0));
        assert!(1.0f64.fuzzy_in_range(0.0, 1.0));
        assert!(!1.5f64.fuzzy_in_range(0.0, 1.0));
        assert!(100.0005f32.fuzzy_in_range(0.0, 100.0));
    }
}
