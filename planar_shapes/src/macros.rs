/// Panics unless `$left.fuzzy_eq($right)` holds, or `fuzzy_eq_eps` when an epsilon is given.
/// `FuzzyEq` must be in scope at the call site.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr $(,)?) => {{
        let (left, right) = ($left, $right);
        assert!(
            left.fuzzy_eq(right),
            "expected fuzzy equal values, got {:?} and {:?}",
            left,
            right
        );
    }};
    ($left:expr, $right:expr, $eps:expr $(,)?) => {{
        let (left, right, eps) = ($left, $right, $eps);
        assert!(
            left.fuzzy_eq_eps(right, eps),
            "expected {:?} and {:?} to be within {:?}",
            left,
            right,
            eps
        );
    }};
}

/// Construct a polyline with the points given as a list of (x, y) tuples.
///
/// # Examples
///
/// ```
/// # use planar_shapes::polyline;
/// # use planar_shapes::core::math::*;
/// let polyline = polyline![(0.0, 1.0), (2.0, 0.0)];
/// assert_eq!(polyline.point_count(), 2);
/// assert_eq!(polyline[0], Point::new(0.0, 1.0));
/// assert_eq!(polyline[1], Point::new(2.0, 0.0));
/// ```
#[macro_export]
macro_rules! polyline {
    ($( $x:expr ),* $(,)?) => {
        $crate::shapes::Polyline::from(::std::vec![
            $($crate::core::math::Point::new($x.0, $x.1)),*
        ])
    };
}
