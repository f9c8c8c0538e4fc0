//! Utility functions over ordered point sequences shared by the shapes.
use crate::{
    core::{
        math::{truncate_to_i32, Point},
        traits::Real,
    },
    shapes::{Line, Rectangle},
    transform::AffineTransform,
};

/// Build points from alternating x and y coordinates, `[x0, y0, x1, y1, ...]`.
///
/// An odd-length slice has its trailing unpaired value dropped.
///
/// # Examples
///
/// ```
/// # use planar_shapes::point_list::*;
/// # use planar_shapes::core::math::*;
/// let points = points_from_coordinates(&[1.0, 2.0, 3.0]);
/// assert_eq!(points, vec![Point::new(1.0, 2.0)]);
/// ```
pub fn points_from_coordinates<T>(coordinates: &[T]) -> Vec<Point<T>>
where
    T: Real,
{
    if coordinates.len() % 2 != 0 {
        log::debug!(
            "dropping trailing unpaired coordinate from sequence of length {}",
            coordinates.len()
        );
    }

    coordinates
        .chunks_exact(2)
        .map(|c| Point::new(c[0], c[1]))
        .collect()
}

/// Flatten points into alternating x and y coordinates.
pub fn to_coordinates<T>(points: &[Point<T>]) -> Vec<T>
where
    T: Real,
{
    let mut result = Vec::with_capacity(points.len() * 2);
    for p in points {
        result.push(p.x);
        result.push(p.y);
    }
    result
}

/// Convert coordinates to integers by truncating toward zero, see [truncate_to_i32].
pub fn to_integer_coordinates<T>(coordinates: &[T]) -> Vec<i32>
where
    T: Real,
{
    coordinates.iter().map(|&c| truncate_to_i32(c)).collect()
}

/// Minimal axis-aligned rectangle enclosing all `points`.
///
/// With no points a zero sized rectangle at the origin is returned. A single point yields a zero
/// sized rectangle located at that point.
///
/// # Examples
///
/// ```
/// # use planar_shapes::point_list::*;
/// # use planar_shapes::core::math::*;
/// # use planar_shapes::shapes::*;
/// let b = bounds(&[Point::new(0.0, 0.0), Point::new(4.0, 2.0), Point::new(1.0, 5.0)]);
/// assert_eq!(b, Rectangle::new(0.0, 0.0, 4.0, 5.0));
/// assert_eq!(bounds::<f64>(&[]), Rectangle::zero());
/// ```
pub fn bounds<T>(points: &[Point<T>]) -> Rectangle<T>
where
    T: Real,
{
    let Some(first) = points.first() else {
        return Rectangle::zero();
    };

    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
    for p in &points[1..] {
        min_x = num_traits::real::Real::min(min_x, p.x);
        min_y = num_traits::real::Real::min(min_y, p.y);
        max_x = num_traits::real::Real::max(max_x, p.x);
        max_y = num_traits::real::Real::max(max_y, p.y);
    }

    Rectangle::new(min_x, min_y, max_x - min_x, max_y - min_y)
}

/// Returns `true` if both sequences have the same length and every pair of corresponding points is
/// fuzzy equal using `eps`.
pub fn points_fuzzy_eq_eps<T>(points1: &[Point<T>], points2: &[Point<T>], eps: T) -> bool
where
    T: Real,
{
    points1.len() == points2.len()
        && points1
            .iter()
            .zip(points2)
            .all(|(p1, p2)| p1.fuzzy_eq_eps(*p2, eps))
}

/// Same as [points_fuzzy_eq_eps] using `T::fuzzy_epsilon()`.
#[inline]
pub fn points_fuzzy_eq<T>(points1: &[Point<T>], points2: &[Point<T>]) -> bool
where
    T: Real,
{
    points_fuzzy_eq_eps(points1, points2, T::fuzzy_epsilon())
}

/// Lines joining each consecutive pair of points. If `closed` is true and there are more than two
/// points a final line from the last point back to the first is added.
pub fn to_segments<T>(points: &[Point<T>], closed: bool) -> Vec<Line<T>>
where
    T: Real,
{
    let mut result: Vec<_> = points.windows(2).map(|w| Line::new(w[0], w[1])).collect();
    if closed && points.len() > 2 {
        result.push(Line::new(points[points.len() - 1], points[0]));
    }
    result
}

/// Apply `transform` to every point, see [AffineTransform::apply].
#[inline]
pub fn transform_points<T>(points: &[Point<T>], transform: &AffineTransform<T>) -> Vec<Point<T>>
where
    T: Real,
{
    transform.apply(points)
}
