mod test_utils;

use planar_shapes::{
    core::math::Point,
    path::{Path, PathSegment},
    shapes::{Geometry, Line, Rectangle, Transformable},
    transform::AffineTransform,
    GeometryError, AABB,
};
use test_utils::rect_fuzzy_eq_eps;

#[test]
fn line_segments_decompose_to_path() {
    let line = Line::from_xy(1.0, 2.0, 3.0, 4.0);
    assert_eq!(
        line.to_path().segments(),
        &[
            PathSegment::MoveTo(Point::new(1.0, 2.0)),
            PathSegment::LineTo(Point::new(3.0, 4.0)),
        ]
    );
    assert_eq!(line.bounds(), Rectangle::new(1.0, 2.0, 2.0, 2.0));
}

#[test]
fn rectangle_transform_through_path() {
    // a rotated rectangle is no longer axis aligned, transform its outline instead
    let rect = Rectangle::new(0.0, 0.0, 2.0, 1.0);
    let rotated = rect
        .to_path()
        .transformed(&AffineTransform::rotation_about(Point::new(1.0, 0.5), std::f64::consts::PI));
    assert!(rect_fuzzy_eq_eps(&rotated.bounds(), &rect, 1e-9));
    assert_eq!(rotated.segments().last(), Some(&PathSegment::Close));
}

#[test]
fn supported_intersects_never_err() {
    let rect = Rectangle::new(0.0, 0.0, 1.0, 1.0);
    let shapes: [&dyn Geometry<Num = f64>; 2] = [&Line::from_xy(0.0, 0.0, 1.0, 1.0), &rect];
    for shape in shapes {
        assert_eq!(shape.intersects_rect(&rect), Ok(true));
    }
}

#[test]
fn error_is_std_error() {
    fn as_std_error(e: GeometryError) -> Box<dyn std::error::Error + Send + Sync> {
        Box::new(e)
    }

    let err = as_std_error(GeometryError::NotSupported {
        operation: "intersects_rect",
        shape: "Polyline",
    });
    assert_eq!(err.to_string(), "intersects_rect is not supported for Polyline");
}

#[test]
fn rectangle_aabb_round_trip() {
    let aabb = AABB::new(-1.0, -2.0, 3.0, 4.0);
    let rect = Rectangle::from(aabb);
    assert_eq!(rect, Rectangle::new(-1.0, -2.0, 4.0, 6.0));
    let back: AABB<f64> = rect.into();
    assert_eq!((back.min_x, back.max_y), (-1.0, 4.0));
}

#[test]
fn empty_path_bounds() {
    assert_eq!(Path::<f64>::new().bounds(), Rectangle::zero());
}
