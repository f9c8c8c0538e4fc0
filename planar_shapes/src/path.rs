use crate::{
    core::{math::Point, traits::Real},
    point_list,
    shapes::{Rectangle, Transformable},
    transform::AffineTransform,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One drawing instruction of a [Path].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathSegment<T = f64> {
    /// Start a new sub path at the point.
    MoveTo(Point<T>),
    /// Straight line from the current position to the point.
    LineTo(Point<T>),
    /// Straight line back to the start of the current sub path.
    Close,
}

impl<T> PathSegment<T>
where
    T: Real,
{
    /// End point of the segment, `None` for [PathSegment::Close].
    #[inline]
    pub fn point(&self) -> Option<Point<T>> {
        match *self {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => Some(p),
            PathSegment::Close => None,
        }
    }
}

/// Renderable path built from [PathSegment]s.
///
/// # Examples
///
/// ```
/// # use planar_shapes::path::*;
/// let mut path = Path::new();
/// path.move_to(0.0, 0.0).line_to(1.0, 0.0).line_to(1.0, 1.0).close();
/// assert_eq!(path.segments().len(), 4);
/// assert_eq!(path.segments()[3], PathSegment::Close);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Path<T = f64> {
    segments: Vec<PathSegment<T>>,
}

impl<T> Default for Path<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Path<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Path {
            segments: Vec::new(),
        }
    }

    #[inline]
    pub fn move_to(&mut self, x: T, y: T) -> &mut Self {
        self.segments.push(PathSegment::MoveTo(Point::new(x, y)));
        self
    }

    #[inline]
    pub fn line_to(&mut self, x: T, y: T) -> &mut Self {
        self.segments.push(PathSegment::LineTo(Point::new(x, y)));
        self
    }

    #[inline]
    pub fn close(&mut self) -> &mut Self {
        self.segments.push(PathSegment::Close);
        self
    }

    #[inline]
    pub fn segments(&self) -> &[PathSegment<T>] {
        &self.segments
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Bounding rectangle of all points referenced by the path.
    pub fn bounds(&self) -> Rectangle<T> {
        let points: Vec<_> = self.segments.iter().filter_map(PathSegment::point).collect();
        point_list::bounds(&points)
    }
}

impl<T> Transformable for Path<T>
where
    T: Real,
{
    type Num = T;
    type Output = Path<T>;

    fn transformed(&self, transform: &AffineTransform<T>) -> Path<T> {
        let segments = self
            .segments
            .iter()
            .map(|s| match *s {
                PathSegment::MoveTo(p) => PathSegment::MoveTo(transform.transform_point(p)),
                PathSegment::LineTo(p) => PathSegment::LineTo(transform.transform_point(p)),
                PathSegment::Close => PathSegment::Close,
            })
            .collect();

        Path { segments }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    #[test]
    fn bounds_skips_close() {
        let mut path = Path::new();
        path.move_to(1.0, 1.0).line_to(3.0, -1.0).close();
        let b = path.bounds();
        assert!(b.x.fuzzy_eq(1.0));
        assert!(b.y.fuzzy_eq(-1.0));
        assert!(b.width.fuzzy_eq(2.0));
        assert!(b.height.fuzzy_eq(2.0));
    }

    #[test]
    fn transformed_keeps_structure() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0).line_to(1.0, 0.0).close();
        let moved = path.transformed(&AffineTransform::translation(0.0, 2.0));
        assert_eq!(moved.segments()[0], PathSegment::MoveTo(Point::new(0.0, 2.0)));
        assert_eq!(moved.segments()[1], PathSegment::LineTo(Point::new(1.0, 2.0)));
        assert_eq!(moved.segments()[2], PathSegment::Close);
        // original untouched
        assert_eq!(path.segments()[0], PathSegment::MoveTo(Point::new(0.0, 0.0)));
    }
}
