//! Immutable 2D shape primitives for geometry consumers such as editors and renderers.
//!
//! The central type is the open [Polyline](shapes::Polyline). It shares the
//! [Geometry](shapes::Geometry) capability trait with [Line](shapes::Line) and
//! [Rectangle](shapes::Rectangle), converts to a [Path](path::Path), and is transformed by an
//! [AffineTransform](transform::AffineTransform).
//!
//! All comparisons between coordinates are fuzzy with a fixed decimal precision (see
//! [FuzzyEq](core::traits::FuzzyEq)) to absorb the rounding error of transformations.
//!
//! # Examples
//!
//! ```
//! # use planar_shapes::polyline;
//! # use planar_shapes::core::math::*;
//! # use planar_shapes::shapes::*;
//! # use planar_shapes::transform::*;
//! let polyline = polyline![(0.0, 0.0), (4.0, 2.0), (1.0, 5.0)];
//! assert_eq!(polyline.bounds(), Rectangle::new(0.0, 0.0, 4.0, 5.0));
//!
//! let moved = polyline.transformed(&AffineTransform::translation(1.0, 1.0));
//! assert!(moved.contains_point(Point::new(5.0, 3.0)));
//! assert!(polyline.intersects_rect(&Rectangle::new(0.0, 0.0, 1.0, 1.0)).is_err());
//! ```
#[macro_use]
mod macros;
pub mod core;
pub mod error;
pub mod path;
pub mod point_list;
pub mod shapes;
pub mod transform;

pub use static_aabb2d_index;
pub use static_aabb2d_index::AABB;

pub use crate::error::{GeometryError, GeometryResult};
