use crate::{
    core::{
        math::{line_segs_intersect_eps, midpoint, point_on_line_seg_eps, Point},
        traits::Real,
    },
    error::GeometryResult,
    path::Path,
    point_list,
    shapes::{Geometry, Rectangle, Transformable},
    transform::AffineTransform,
};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Straight line segment between two points.
///
/// Equality is fuzzy and ignores direction, a line from `a` to `b` equals the line from `b` to `a`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone)]
pub struct Line<T = f64> {
    start: Point<T>,
    end: Point<T>,
}

impl<T> Line<T>
where
    T: Real,
{
    #[inline]
    pub fn new(start: Point<T>, end: Point<T>) -> Self {
        Line { start, end }
    }

    #[inline]
    pub fn from_xy(x1: T, y1: T, x2: T, y2: T) -> Self {
        Line::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[inline]
    pub fn start(&self) -> Point<T> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point<T> {
        self.end
    }

    #[inline]
    pub fn points(&self) -> [Point<T>; 2] {
        [self.start, self.end]
    }

    #[inline]
    pub fn length(&self) -> T {
        self.start.distance(self.end)
    }

    #[inline]
    pub fn midpoint(&self) -> Point<T> {
        midpoint(self.start, self.end)
    }

    /// Same line traversed from end to start.
    #[inline]
    pub fn reversed(&self) -> Self {
        Line::new(self.end, self.start)
    }

    /// Same as [Geometry::contains_point] using `eps` for the fuzzy comparison.
    #[inline]
    pub fn contains_point_eps(&self, point: Point<T>, eps: T) -> bool {
        point_on_line_seg_eps(self.start, self.end, point, eps)
    }

    /// Fuzzy compare with another line (in either direction) using `eps`.
    pub fn fuzzy_eq_eps(&self, other: &Line<T>, eps: T) -> bool {
        (self.start.fuzzy_eq_eps(other.start, eps) && self.end.fuzzy_eq_eps(other.end, eps))
            || (self.start.fuzzy_eq_eps(other.end, eps) && self.end.fuzzy_eq_eps(other.start, eps))
    }

    /// Same as [Line::fuzzy_eq_eps] using `T::fuzzy_epsilon()`.
    #[inline]
    pub fn fuzzy_eq(&self, other: &Line<T>) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

impl<T> PartialEq for Line<T>
where
    T: Real,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.fuzzy_eq(other)
    }
}

impl<T> fmt::Display for Line<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line: {} -> {}", self.start, self.end)
    }
}

impl<T> Geometry for Line<T>
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn contains_point(&self, point: Point<T>) -> bool {
        self.contains_point_eps(point, T::fuzzy_epsilon())
    }

    /// A line can only contain a degenerate rectangle, i.e. a single point lying on it.
    fn contains_rect(&self, rect: &Rectangle<T>) -> bool {
        rect.width.fuzzy_eq_zero() && rect.height.fuzzy_eq_zero() && self.contains_point(rect.min())
    }

    #[inline]
    fn bounds(&self) -> Rectangle<T> {
        point_list::bounds(&self.points())
    }

    fn intersects_rect(&self, rect: &Rectangle<T>) -> GeometryResult<bool> {
        if rect.contains_point(self.start) || rect.contains_point(self.end) {
            return Ok(true);
        }

        let eps = T::fuzzy_epsilon();
        let corners = rect.corners();
        let crosses_edge = (0..corners.len()).any(|i| {
            let next = (i + 1) % corners.len();
            line_segs_intersect_eps(self.start, self.end, corners[i], corners[next], eps)
        });

        Ok(crosses_edge)
    }

    fn to_path(&self) -> Path<T> {
        let mut path = Path::new();
        path.move_to(self.start.x, self.start.y)
            .line_to(self.end.x, self.end.y);
        path
    }
}

impl<T> Transformable for Line<T>
where
    T: Real,
{
    type Num = T;
    type Output = Line<T>;

    #[inline]
    fn transformed(&self, transform: &AffineTransform<T>) -> Line<T> {
        Line::new(
            transform.transform_point(self.start),
            transform.transform_point(self.end),
        )
    }
}
