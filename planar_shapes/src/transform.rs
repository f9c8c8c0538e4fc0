use crate::core::{math::Point, traits::Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D affine transform stored as the 2x3 matrix
///
/// ```text
/// | m00 m01 m02 |
/// | m10 m11 m12 |
/// ```
///
/// A point `(x, y)` maps to `(m00 * x + m01 * y + m02, m10 * x + m11 * y + m12)`.
///
/// # Examples
///
/// ```
/// # use planar_shapes::core::math::*;
/// # use planar_shapes::transform::*;
/// let t = AffineTransform::scale(2.0, 2.0).then(&AffineTransform::translation(1.0, 0.0));
/// assert!(t.transform_point(Point::new(1.0, 1.0)).fuzzy_eq(Point::new(3.0, 2.0)));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AffineTransform<T = f64> {
    pub m00: T,
    pub m10: T,
    pub m01: T,
    pub m11: T,
    pub m02: T,
    pub m12: T,
}

impl<T> Default for AffineTransform<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> AffineTransform<T>
where
    T: Real,
{
    /// Construct from matrix entries given in column order.
    #[inline]
    pub fn new(m00: T, m10: T, m01: T, m11: T, m02: T, m12: T) -> Self {
        AffineTransform {
            m00,
            m10,
            m01,
            m11,
            m02,
            m12,
        }
    }

    #[inline]
    pub fn identity() -> Self {
        let (o, z) = (T::one(), T::zero());
        Self::new(o, z, z, o, z, z)
    }

    #[inline]
    pub fn translation(tx: T, ty: T) -> Self {
        let (o, z) = (T::one(), T::zero());
        Self::new(o, z, z, o, tx, ty)
    }

    #[inline]
    pub fn scale(sx: T, sy: T) -> Self {
        let z = T::zero();
        Self::new(sx, z, z, sy, z, z)
    }

    /// Counter clockwise rotation about the origin by `angle` radians.
    #[inline]
    pub fn rotation(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let z = T::zero();
        Self::new(c, s, -s, c, z, z)
    }

    /// Counter clockwise rotation about `origin` by `angle` radians.
    pub fn rotation_about(origin: Point<T>, angle: T) -> Self {
        Self::translation(-origin.x, -origin.y)
            .then(&Self::rotation(angle))
            .then(&Self::translation(origin.x, origin.y))
    }

    /// Shear with `x' = x + shx * y` and `y' = y + shy * x`.
    #[inline]
    pub fn shear(shx: T, shy: T) -> Self {
        let (o, z) = (T::one(), T::zero());
        Self::new(o, shy, shx, o, z, z)
    }

    /// Returns the transform that applies `self` first and then `next`.
    pub fn then(&self, next: &Self) -> Self {
        Self::new(
            next.m00 * self.m00 + next.m01 * self.m10,
            next.m10 * self.m00 + next.m11 * self.m10,
            next.m00 * self.m01 + next.m01 * self.m11,
            next.m10 * self.m01 + next.m11 * self.m11,
            next.m00 * self.m02 + next.m01 * self.m12 + next.m02,
            next.m10 * self.m02 + next.m11 * self.m12 + next.m12,
        )
    }

    /// Fuzzy test against the identity matrix.
    pub fn is_identity(&self) -> bool {
        let (o, z) = (T::one(), T::zero());
        self.m00.fuzzy_eq(o)
            && self.m10.fuzzy_eq(z)
            && self.m01.fuzzy_eq(z)
            && self.m11.fuzzy_eq(o)
            && self.m02.fuzzy_eq(z)
            && self.m12.fuzzy_eq(z)
    }

    #[inline]
    pub fn transform_point(&self, p: Point<T>) -> Point<T> {
        Point::new(
            self.m00 * p.x + self.m01 * p.y + self.m02,
            self.m10 * p.x + self.m11 * p.y + self.m12,
        )
    }

    /// Transform every point, returning a new vector (input is left untouched).
    pub fn apply(&self, points: &[Point<T>]) -> Vec<Point<T>> {
        points.iter().map(|&p| self.transform_point(p)).collect()
    }
}
