use super::Point;
use crate::core::traits::Real;

/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use planar_shapes::core::math::*;
/// let (min_val, max_val) = min_max(8, 4);
/// assert_eq!(min_val, 4);
/// assert_eq!(max_val, 8);
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}

/// Distance squared between the points `p0` and `p1`.
#[inline]
pub fn dist_squared<T>(p0: Point<T>, p1: Point<T>) -> T
where
    T: Real,
{
    let d = p0 - p1;
    d.dot(d)
}

/// Midpoint of a line segment defined by `p0` to `p1`.
#[inline]
pub fn midpoint<T>(p0: Point<T>, p1: Point<T>) -> Point<T>
where
    T: Real,
{
    Point::new((p0.x + p1.x) / T::two(), (p0.y + p1.y) / T::two())
}

/// Returns the point on the line segment going from `p0` to `p1` at parametric value `t`.
#[inline]
pub fn point_from_parametric<T>(p0: Point<T>, p1: Point<T>, t: T) -> Point<T>
where
    T: Real,
{
    p0 + (p1 - p0).scale(t)
}

/// Returns the closest point on the line segment from `p0` to `p1` to the `point` given.
///
/// A degenerate segment (`p0 == p1`) returns `p0`.
///
/// # Examples
///
/// ```
/// # use planar_shapes::core::math::*;
/// let p0 = Point::new(0.0, 0.0);
/// let p1 = Point::new(4.0, 0.0);
/// assert!(line_seg_closest_point(p0, p1, Point::new(2.0, 3.0)).fuzzy_eq(Point::new(2.0, 0.0)));
/// assert!(line_seg_closest_point(p0, p1, Point::new(-1.0, 1.0)).fuzzy_eq(p0));
/// assert!(line_seg_closest_point(p0, p1, Point::new(9.0, 1.0)).fuzzy_eq(p1));
/// ```
#[inline]
pub fn line_seg_closest_point<T>(p0: Point<T>, p1: Point<T>, point: Point<T>) -> Point<T>
where
    T: Real,
{
    // Dot product used to find angles
    // See: http://geomalgorithms.com/a02-_lines.html
    let v = p1 - p0;
    let w = point - p0;
    let c1 = w.dot(v);
    if c1 <= T::zero() {
        return p0;
    }

    let c2 = v.length_squared();
    if c2 <= c1 {
        return p1;
    }

    let b = c1 / c2;
    p0 + v.scale(b)
}

/// Orientation test value, positive if `point` is left of the direction vector `p1 - p0`, negative
/// if right and zero if collinear.
#[inline]
fn perp_dot_test_value<T>(p0: Point<T>, p1: Point<T>, point: Point<T>) -> T
where
    T: Real,
{
    (p1.x - p0.x) * (point.y - p0.y) - (p1.y - p0.y) * (point.x - p0.x)
}

/// Returns true if `point` lies on the segment `p0` to `p1` within `epsilon`.
#[inline]
pub fn point_on_line_seg_eps<T>(p0: Point<T>, p1: Point<T>, point: Point<T>, epsilon: T) -> bool
where
    T: Real,
{
    line_seg_closest_point(p0, p1, point).fuzzy_eq_eps(point, epsilon)
}

/// Returns true if the segments `a0 -> a1` and `b0 -> b1` cross or touch (fuzzy inclusive using
/// `epsilon`).
///
/// # Examples
///
/// ```
/// # use planar_shapes::core::math::*;
/// let p = Point::new;
/// assert!(line_segs_intersect_eps(p(0.0, 0.0), p(2.0, 2.0), p(0.0, 2.0), p(2.0, 0.0), 1e-6));
/// // touching at an end point counts
/// assert!(line_segs_intersect_eps(p(0.0, 0.0), p(1.0, 1.0), p(1.0, 1.0), p(2.0, 0.0), 1e-6));
/// assert!(!line_segs_intersect_eps(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), 1e-6));
/// ```
pub fn line_segs_intersect_eps<T>(
    a0: Point<T>,
    a1: Point<T>,
    b0: Point<T>,
    b1: Point<T>,
    epsilon: T,
) -> bool
where
    T: Real,
{
    let opposite_sides =
        |d1: T, d2: T| (d1 > epsilon && d2 < -epsilon) || (d1 < -epsilon && d2 > epsilon);

    let crosses = opposite_sides(
        perp_dot_test_value(b0, b1, a0),
        perp_dot_test_value(b0, b1, a1),
    ) && opposite_sides(
        perp_dot_test_value(a0, a1, b0),
        perp_dot_test_value(a0, a1, b1),
    );

    crosses
        || point_on_line_seg_eps(b0, b1, a0, epsilon)
        || point_on_line_seg_eps(b0, b1, a1, epsilon)
        || point_on_line_seg_eps(a0, a1, b0, epsilon)
        || point_on_line_seg_eps(a0, a1, b1, epsilon)
}

/// Convert a coordinate to `i32` by truncating toward zero.
///
/// Values beyond the `i32` range saturate to `i32::MIN`/`i32::MAX` and NaN maps to `0`, matching
/// the semantics of an `as` cast.
///
/// # Examples
///
/// ```
/// # use planar_shapes::core::math::*;
/// assert_eq!(truncate_to_i32(1.6), 1);
/// assert_eq!(truncate_to_i32(-1.6), -1);
/// assert_eq!(truncate_to_i32(1e12), i32::MAX);
/// ```
#[inline]
pub fn truncate_to_i32<T>(value: T) -> i32
where
    T: Real,
{
    value.to_f64().map_or(0, |v| v as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    #[test]
    fn midpoint_and_parametric_agree() {
        let p0 = Point::new(1.0, 1.0);
        let p1 = Point::new(3.0, 5.0);
        assert!(midpoint(p0, p1).fuzzy_eq(point_from_parametric(p0, p1, 0.5)));
        assert!(dist_squared(p0, p1).fuzzy_eq(20.0));
    }

    #[test]
    fn closest_point_on_degenerate_segment() {
        let p = Point::new(2.0, 2.0);
        assert!(line_seg_closest_point(p, p, Point::new(5.0, 5.0)).fuzzy_eq(p));
    }

    #[test]
    fn collinear_overlapping_segments_intersect() {
        let p = Point::new;
        assert!(line_segs_intersect_eps(p(0.0, 0.0), p(2.0, 0.0), p(1.0, 0.0), p(3.0, 0.0), 1e-6));
        assert!(!line_segs_intersect_eps(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), p(3.0, 0.0), 1e-6));
    }

    #[test]
    fn truncation_boundaries() {
        assert_eq!(truncate_to_i32(0.5), 0);
        assert_eq!(truncate_to_i32(-0.5), 0);
        assert_eq!(truncate_to_i32(0.999_999), 0);
        assert_eq!(truncate_to_i32(f64::NAN), 0);
        assert_eq!(truncate_to_i32(-1e12), i32::MIN);
    }
}
