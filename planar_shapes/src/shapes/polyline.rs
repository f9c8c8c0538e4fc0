use crate::{
    core::{
        math::Point,
        traits::Real,
    },
    error::{GeometryError, GeometryResult},
    path::Path,
    point_list,
    shapes::{Geometry, Line, Rectangle, Transformable},
    transform::AffineTransform,
};
use static_aabb2d_index::{
    IndexableNum, StaticAABB2DIndex, StaticAABB2DIndexBuildError, StaticAABB2DIndexBuilder,
};
use std::{fmt, ops::Index};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options for fuzzy polyline queries.
#[derive(Debug, Clone, Copy)]
pub struct PolylineQueryOptions<T> {
    /// Fuzzy comparison epsilon used when comparing point positions.
    pub pos_equal_eps: T,
}

impl<T> PolylineQueryOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            pos_equal_eps: T::fuzzy_epsilon(),
        }
    }
}

impl<T> Default for PolylineQueryOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable open polyline: an ordered sequence of points where a line segment joins each
/// consecutive pair. Unlike a polygon there is no segment from the last point back to the first.
///
/// The point buffer is owned exclusively by the polyline and never changes after construction.
/// Accessors either borrow it read only ([Polyline::as_points], [Polyline::iter_points]) or return
/// independent copies ([Polyline::points], [Polyline::coordinates]); derived polylines (e.g.
/// [Transformable::transformed]) are new instances.
///
/// Equality ([PartialEq]) is fuzzy, see [Polyline::fuzzy_eq_eps]. Because fuzzy equality is not
/// transitive the type implements neither `Eq` nor `Hash`.
///
/// # Examples
///
/// ```
/// # use planar_shapes::shapes::*;
/// # use planar_shapes::core::math::*;
/// let polyline = Polyline::from_coordinates(&[0.0, 0.0, 2.0, 0.0, 2.0, 2.0]);
/// assert_eq!(polyline.point_count(), 3);
/// assert_eq!(polyline.segment_count(), 2);
/// assert!(polyline.contains_point(Point::new(1.0, 0.0)));
/// // open, so no segment from (2, 2) back to (0, 0)
/// assert!(!polyline.contains_point(Point::new(1.0, 1.0)));
/// assert_eq!(polyline.to_string(), "Polyline: (0, 0) -> (2, 0) -> (2, 2)");
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone)]
pub struct Polyline<T = f64> {
    points: Vec<Point<T>>,
}

impl<T> Default for Polyline<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Polyline<T>
where
    T: Real,
{
    /// Create a new empty [Polyline].
    #[inline]
    pub fn new() -> Self {
        Polyline { points: Vec::new() }
    }

    /// Create a polyline from alternating x and y coordinates, `[x0, y0, x1, y1, ...]`.
    ///
    /// An odd-length slice is accepted, the trailing unpaired value is silently dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_shapes::shapes::*;
    /// # use planar_shapes::core::math::*;
    /// let polyline = Polyline::from_coordinates(&[1.0, 2.0, 3.0]);
    /// assert_eq!(polyline.points(), vec![Point::new(1.0, 2.0)]);
    /// ```
    pub fn from_coordinates(coordinates: &[T]) -> Self {
        Polyline {
            points: point_list::points_from_coordinates(coordinates),
        }
    }

    /// Create a polyline from a sequence of points, the points are copied.
    #[inline]
    pub fn from_points(points: &[Point<T>]) -> Self {
        Polyline {
            points: points.to_vec(),
        }
    }

    /// Total number of points.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Returns true if point count is 0.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total number of segments, `max(0, point_count - 1)`.
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Copy of the points.
    #[inline]
    pub fn points(&self) -> Vec<Point<T>> {
        self.points.clone()
    }

    /// Read only view of the points.
    #[inline]
    pub fn as_points(&self) -> &[Point<T>] {
        &self.points
    }

    /// Return iterator over the points.
    #[inline]
    pub fn iter_points(
        &self,
    ) -> impl DoubleEndedIterator<Item = Point<T>> + ExactSizeIterator + '_ {
        self.points.iter().copied()
    }

    /// Coordinates of the points flattened into `[x0, y0, x1, y1, ...]`.
    #[inline]
    pub fn coordinates(&self) -> Vec<T> {
        point_list::to_coordinates(&self.points)
    }

    /// Coordinates truncated toward zero to integers, for pixel grid consumers.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_shapes::shapes::*;
    /// let polyline = Polyline::from_coordinates(&[1.6, 2.4, -0.5, 0.5]);
    /// assert_eq!(polyline.to_integer_coordinates(), vec![1, 2, 0, 0]);
    /// ```
    #[inline]
    pub fn to_integer_coordinates(&self) -> Vec<i32> {
        point_list::to_integer_coordinates(&self.coordinates())
    }

    /// The segments joining each consecutive pair of points, there is no closing segment.
    #[inline]
    pub fn segments(&self) -> Vec<Line<T>> {
        point_list::to_segments(&self.points, false)
    }

    /// Return iterator over the segments, see [Polyline::segments].
    #[inline]
    pub fn iter_segments(
        &self,
    ) -> impl DoubleEndedIterator<Item = Line<T>> + ExactSizeIterator + '_ {
        self.points.windows(2).map(|w| Line::new(w[0], w[1]))
    }

    /// Sum of all segment lengths.
    pub fn path_length(&self) -> T {
        self.iter_segments().fold(T::zero(), |acc, seg| acc + seg.length())
    }

    /// Same as [Geometry::contains_point] with options.
    ///
    /// Segments are tested in order, returning as soon as one contains the point.
    pub fn contains_point_opt(&self, point: Point<T>, options: &PolylineQueryOptions<T>) -> bool {
        self.iter_segments()
            .any(|seg| seg.contains_point_eps(point, options.pos_equal_eps))
    }

    /// Fuzzy compare with another polyline using `eps` epsilon value for fuzzy comparison of
    /// points.
    ///
    /// Polylines are equal if they have the same number of points and each point fuzzy equals the
    /// point at the same position. This relation is symmetric but not transitive.
    #[inline]
    pub fn fuzzy_eq_eps(&self, other: &Polyline<T>, eps: T) -> bool {
        self.equals_points_eps(&other.points, eps)
    }

    /// Same as [Polyline::fuzzy_eq_eps] but uses default `T::fuzzy_epsilon()`.
    #[inline]
    pub fn fuzzy_eq(&self, other: &Polyline<T>) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }

    /// Same as [Polyline::fuzzy_eq_eps] comparing against a bare point sequence.
    #[inline]
    pub fn equals_points_eps(&self, points: &[Point<T>], eps: T) -> bool {
        point_list::points_fuzzy_eq_eps(&self.points, points, eps)
    }

    /// Same as [Polyline::equals_points_eps] but uses default `T::fuzzy_epsilon()`.
    #[inline]
    pub fn equals_points(&self, points: &[Point<T>]) -> bool {
        self.equals_points_eps(points, T::fuzzy_epsilon())
    }

    /// Creates a spatial index of all the segments.
    ///
    /// The start point index is used as the key to the segment bounding box in the
    /// `StaticAABB2DIndex`, so a query result `i` refers to the segment from point `i` to `i + 1`.
    ///
    /// # Panics
    ///
    /// Panics if `T` fails to cast to/from a `u16`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_shapes::shapes::*;
    /// let polyline = Polyline::from_coordinates(&[0.0, 0.0, 10.0, 0.0, 10.0, 10.0]);
    /// let index = polyline.create_segment_index();
    /// assert_eq!(index.query(9.0, 4.0, 11.0, 6.0), vec![1]);
    /// ```
    pub fn create_segment_index(&self) -> StaticAABB2DIndex<T> {
        let mut builder = StaticAABB2DIndexBuilder::new(self.segment_count());
        for seg in self.iter_segments() {
            let bounds = seg.bounds();
            let max = bounds.max();
            builder.add(bounds.x, bounds.y, max.x, max.y);
        }

        unwrap_spatial_index(builder)
    }
}

impl<T> Geometry for Polyline<T>
where
    T: Real,
{
    type Num = T;

    /// Returns `true` if `point` lies on at least one segment.
    #[inline]
    fn contains_point(&self, point: Point<T>) -> bool {
        self.contains_point_opt(point, &PolylineQueryOptions::new())
    }

    /// Always `false`, a polyline has no area so it can never contain a rectangle region.
    #[inline]
    fn contains_rect(&self, _rect: &Rectangle<T>) -> bool {
        false
    }

    /// Minimal rectangle enclosing all points. An empty polyline returns a zero sized rectangle at
    /// the origin, a single point polyline a zero sized rectangle at that point.
    #[inline]
    fn bounds(&self) -> Rectangle<T> {
        point_list::bounds(&self.points)
    }

    /// Not implemented for polylines, always returns [GeometryError::NotSupported].
    fn intersects_rect(&self, _rect: &Rectangle<T>) -> GeometryResult<bool> {
        log::debug!("intersects_rect requested on a polyline, which does not support it");
        Err(GeometryError::NotSupported {
            operation: "intersects_rect",
            shape: "Polyline",
        })
    }

    /// Move to the first point then line to each remaining point, the path is not closed. An empty
    /// polyline yields an empty path.
    fn to_path(&self) -> Path<T> {
        let mut path = Path::new();
        let mut iter = self.points.iter();
        if let Some(first) = iter.next() {
            path.move_to(first.x, first.y);
            for p in iter {
                path.line_to(p.x, p.y);
            }
        }
        path
    }
}

impl<T> Transformable for Polyline<T>
where
    T: Real,
{
    type Num = T;
    type Output = Polyline<T>;

    #[inline]
    fn transformed(&self, transform: &AffineTransform<T>) -> Polyline<T> {
        Polyline {
            points: point_list::transform_points(&self.points, transform),
        }
    }
}

impl<T> PartialEq for Polyline<T>
where
    T: Real,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.fuzzy_eq(other)
    }
}

impl<T> Index<usize> for Polyline<T> {
    type Output = Point<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<T> From<Vec<Point<T>>> for Polyline<T>
where
    T: Real,
{
    #[inline]
    fn from(points: Vec<Point<T>>) -> Self {
        Polyline { points }
    }
}

impl<T> FromIterator<Point<T>> for Polyline<T>
where
    T: Real,
{
    #[inline]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Point<T>>,
    {
        Polyline {
            points: iter.into_iter().collect(),
        }
    }
}

impl<T> fmt::Display for Polyline<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Polyline: ")?;
        if self.points.is_empty() {
            return f.write_str("<no points>");
        }

        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{p}")?;
        }

        Ok(())
    }
}

/// Helper function to unwrap a spatial index from a builder or panic for the unexpected case of
/// failure.
fn unwrap_spatial_index<T>(builder: StaticAABB2DIndexBuilder<T>) -> StaticAABB2DIndex<T>
where
    T: IndexableNum,
{
    match builder.build() {
        Ok(x) => x,
        Err(e) => match e {
            StaticAABB2DIndexBuildError::ItemCountError { .. } => {
                unreachable!("internal library error: count mismatch when building spatial index")
            }
            StaticAABB2DIndexBuildError::NumericCastError => {
                panic!("failed to cast coordinate type: {e}")
            }
        },
    }
}
