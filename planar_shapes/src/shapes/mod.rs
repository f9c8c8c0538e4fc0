//! The shape family: [Line], [Rectangle] and [Polyline] share the [Geometry] capability trait,
//! shapes that stay within their own kind under an affine map also implement [Transformable].
mod line;
mod polyline;
mod rectangle;

pub use line::*;
pub use polyline::*;
pub use rectangle::*;

use crate::{
    core::{math::Point, traits::Real},
    error::GeometryResult,
    path::Path,
    transform::AffineTransform,
};

/// Operations every shape supports.
///
/// All comparisons are fuzzy, using the default epsilon of
/// [FuzzyEq](crate::core::traits::FuzzyEq), so results are stable under the rounding error of
/// transformations.
pub trait Geometry {
    /// Numeric type used for the shape coordinates.
    type Num: Real;

    /// Returns `true` if `point` lies within (or on the border of) the shape.
    fn contains_point(&self, point: Point<Self::Num>) -> bool;

    /// Same as [Geometry::contains_point] with the point given by its coordinates.
    #[inline]
    fn contains_xy(&self, x: Self::Num, y: Self::Num) -> bool {
        self.contains_point(Point::new(x, y))
    }

    /// Returns `true` if the whole region of `rect` lies within the shape.
    fn contains_rect(&self, rect: &Rectangle<Self::Num>) -> bool;

    /// Minimal axis-aligned rectangle enclosing the shape.
    fn bounds(&self) -> Rectangle<Self::Num>;

    /// Returns whether the shape and `rect` overlap.
    ///
    /// Shapes which do not implement this test return
    /// [GeometryError::NotSupported](crate::error::GeometryError::NotSupported), never
    /// `Ok(false)`.
    fn intersects_rect(&self, rect: &Rectangle<Self::Num>) -> GeometryResult<bool>;

    /// Path tracing the outline of the shape.
    fn to_path(&self) -> Path<Self::Num>;
}

/// Shapes which stay the same kind of shape under any affine transform.
pub trait Transformable {
    /// Numeric type used for the transform.
    type Num: Real;

    /// Shape returned by [Transformable::transformed].
    type Output;

    /// Returns a new shape with `transform` applied to every point, `self` is left untouched.
    fn transformed(&self, transform: &AffineTransform<Self::Num>) -> Self::Output;
}
