use crate::{
    core::{
        math::{min_max, Point},
        traits::Real,
    },
    error::GeometryResult,
    path::Path,
    shapes::Geometry,
};
use static_aabb2d_index::AABB;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle given by its minimum corner (`x`, `y`) and its extent.
///
/// Point and region tests are fuzzy inclusive of the border.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rectangle<T = f64> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T> Rectangle<T>
where
    T: Real,
{
    #[inline]
    pub fn new(x: T, y: T, width: T, height: T) -> Self {
        Rectangle {
            x,
            y,
            width,
            height,
        }
    }

    /// Zero sized rectangle located at the origin.
    #[inline]
    pub fn zero() -> Self {
        Rectangle::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    /// Rectangle spanned by two opposite corners given in any order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_shapes::core::math::*;
    /// # use planar_shapes::shapes::*;
    /// let r = Rectangle::from_points(Point::new(3.0, 1.0), Point::new(1.0, 4.0));
    /// assert_eq!(r, Rectangle::new(1.0, 1.0, 2.0, 3.0));
    /// ```
    pub fn from_points(p1: Point<T>, p2: Point<T>) -> Self {
        let (min_x, max_x) = min_max(p1.x, p2.x);
        let (min_y, max_y) = min_max(p1.y, p2.y);
        Rectangle::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Minimum (top left in screen coordinates) corner.
    #[inline]
    pub fn min(&self) -> Point<T> {
        Point::new(self.x, self.y)
    }

    /// Maximum (bottom right in screen coordinates) corner.
    #[inline]
    pub fn max(&self) -> Point<T> {
        Point::new(self.x + self.width, self.y + self.height)
    }

    /// Corners in the order min, (max x, min y), max, (min x, max y).
    pub fn corners(&self) -> [Point<T>; 4] {
        let (min, max) = (self.min(), self.max());
        [
            min,
            Point::new(max.x, min.y),
            max,
            Point::new(min.x, max.y),
        ]
    }

    /// Returns `true` if the width or the height is (fuzzy) zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width.fuzzy_eq_zero() || self.height.fuzzy_eq_zero()
    }

    /// Returns the smallest rectangle containing both `self` and `point`.
    pub fn union_point(&self, point: Point<T>) -> Self {
        let (min, max) = (self.min(), self.max());
        Rectangle::from_points(
            Point::new(
                num_traits::real::Real::min(min.x, point.x),
                num_traits::real::Real::min(min.y, point.y),
            ),
            Point::new(
                num_traits::real::Real::max(max.x, point.x),
                num_traits::real::Real::max(max.y, point.y),
            ),
        )
    }

    /// Same as [Geometry::intersects_rect] without the result wrapper, rectangles always support
    /// the test. Touching borders count as intersecting.
    pub fn intersects(&self, other: &Rectangle<T>) -> bool {
        let (min, max) = (self.min(), self.max());
        let (other_min, other_max) = (other.min(), other.max());
        min.x.fuzzy_lt(other_max.x)
            && other_min.x.fuzzy_lt(max.x)
            && min.y.fuzzy_lt(other_max.y)
            && other_min.y.fuzzy_lt(max.y)
    }
}

impl<T> Geometry for Rectangle<T>
where
    T: Real,
{
    type Num = T;

    fn contains_point(&self, point: Point<T>) -> bool {
        let max = self.max();
        point.x.fuzzy_in_range(self.x, max.x) && point.y.fuzzy_in_range(self.y, max.y)
    }

    fn contains_rect(&self, rect: &Rectangle<T>) -> bool {
        self.contains_point(rect.min()) && self.contains_point(rect.max())
    }

    #[inline]
    fn bounds(&self) -> Rectangle<T> {
        *self
    }

    #[inline]
    fn intersects_rect(&self, rect: &Rectangle<T>) -> GeometryResult<bool> {
        Ok(self.intersects(rect))
    }

    fn to_path(&self) -> Path<T> {
        let [c0, c1, c2, c3] = self.corners();
        let mut path = Path::new();
        path.move_to(c0.x, c0.y)
            .line_to(c1.x, c1.y)
            .line_to(c2.x, c2.y)
            .line_to(c3.x, c3.y)
            .close();
        path
    }
}

impl<T> From<Rectangle<T>> for AABB<T>
where
    T: Real,
{
    #[inline]
    fn from(r: Rectangle<T>) -> Self {
        let max = r.max();
        AABB::new(r.x, r.y, max.x, max.y)
    }
}

impl<T> From<AABB<T>> for Rectangle<T>
where
    T: Real,
{
    #[inline]
    fn from(aabb: AABB<T>) -> Self {
        Rectangle::new(
            aabb.min_x,
            aabb.min_y,
            aabb.max_x - aabb.min_x,
            aabb.max_y - aabb.min_y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathSegment;

    #[test]
    fn contains_point_includes_border() {
        let r = Rectangle::new(0.0, 0.0, 2.0, 1.0);
        assert!(r.contains_xy(0.0, 0.0));
        assert!(r.contains_xy(2.0, 1.0));
        assert!(r.contains_xy(1.0, 0.5));
        assert!(r.contains_xy(2.0000001, 1.0));
        assert!(!r.contains_xy(2.1, 1.0));
        assert!(!r.contains_xy(-0.1, 0.5));
    }

    #[test]
    fn contains_and_intersects_rect() {
        let r = Rectangle::new(0.0, 0.0, 4.0, 4.0);
        assert!(r.contains_rect(&Rectangle::new(1.0, 1.0, 2.0, 2.0)));
        assert!(r.contains_rect(&r));
        assert!(!r.contains_rect(&Rectangle::new(3.0, 3.0, 2.0, 2.0)));

        assert_eq!(r.intersects_rect(&Rectangle::new(3.0, 3.0, 2.0, 2.0)), Ok(true));
        assert_eq!(r.intersects_rect(&Rectangle::new(4.0, 0.0, 1.0, 1.0)), Ok(true));
        assert_eq!(r.intersects_rect(&Rectangle::new(5.0, 0.0, 1.0, 1.0)), Ok(false));
    }

    #[test]
    fn union_point_grows() {
        let r = Rectangle::new(0.0, 0.0, 1.0, 1.0).union_point(Point::new(-1.0, 3.0));
        assert_eq!(r, Rectangle::new(-1.0, 0.0, 2.0, 3.0));
        assert!(!r.is_empty());
        assert!(Rectangle::new(1.0, 1.0, 0.0, 5.0).is_empty());
    }

    #[test]
    fn to_path_is_closed() {
        let path = Rectangle::new(0.0, 0.0, 1.0, 2.0).to_path();
        let segs = path.segments();
        assert_eq!(segs.len(), 5);
        assert_eq!(segs[0], PathSegment::MoveTo(Point::new(0.0, 0.0)));
        assert_eq!(segs[2], PathSegment::LineTo(Point::new(1.0, 2.0)));
        assert_eq!(segs[4], PathSegment::Close);
    }

    #[test]
    fn aabb_conversion() {
        let r = Rectangle::new(1.0, 2.0, 3.0, 4.0);
        let aabb: AABB<f64> = r.into();
        assert_eq!(
            (aabb.min_x, aabb.min_y, aabb.max_x, aabb.max_y),
            (1.0, 2.0, 4.0, 6.0)
        );
        assert_eq!(Rectangle::from(aabb), r);
    }
}
