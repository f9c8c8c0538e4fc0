use planar_shapes::{
    core::math::Point,
    point_list,
    shapes::{Geometry, Polyline, PolylineQueryOptions, Rectangle, Transformable},
    transform::AffineTransform,
};
use proptest::prelude::*;

fn arb_points() -> impl Strategy<Value = Vec<Point<f64>>> {
    prop::collection::vec((-1000.0f64..1000.0, -1000.0f64..1000.0), 0..40)
        .prop_map(|v| v.into_iter().map(Point::from).collect())
}

proptest! {
    #[test]
    fn points_round_trip(points in arb_points()) {
        let polyline = Polyline::from_points(&points);
        prop_assert_eq!(polyline.points(), points.clone());
        prop_assert_eq!(
            Polyline::from_coordinates(&polyline.coordinates()).points(),
            points
        );
    }

    #[test]
    fn segment_count_and_connectivity(points in arb_points()) {
        let polyline = Polyline::from_points(&points);
        let segments = polyline.segments();
        prop_assert_eq!(segments.len(), points.len().saturating_sub(1));
        for (i, seg) in segments.iter().enumerate() {
            prop_assert_eq!(seg.start(), points[i]);
            prop_assert_eq!(seg.end(), points[i + 1]);
        }
    }

    #[test]
    fn segment_points_are_contained(points in arb_points(), t in 0.0f64..=1.0) {
        let polyline = Polyline::from_points(&points);
        // interpolated points carry rounding error proportional to the coordinate magnitude
        let options = PolylineQueryOptions { pos_equal_eps: 1e-5 };
        for seg in polyline.iter_segments() {
            prop_assert!(polyline.contains_point(seg.start()));
            prop_assert!(polyline.contains_point(seg.end()));
            let on_seg = seg.start() + (seg.end() - seg.start()).scale(t);
            prop_assert!(polyline.contains_point_opt(on_seg, &options));
        }
    }

    #[test]
    fn never_contains_rect(
        points in arb_points(),
        x in -1000.0f64..1000.0,
        y in -1000.0f64..1000.0,
        w in 0.01f64..100.0,
        h in 0.01f64..100.0,
    ) {
        let polyline = Polyline::from_points(&points);
        prop_assert!(!polyline.contains_rect(&Rectangle::new(x, y, w, h)));
    }

    #[test]
    fn equality_is_symmetric_and_reflexive(points in arb_points()) {
        let a = Polyline::from_points(&points);
        let b = a.clone();
        prop_assert!(a == a);
        prop_assert!(a == b && b == a);
    }

    #[test]
    fn bounds_enclose_all_points(points in arb_points()) {
        let polyline = Polyline::from_points(&points);
        let bounds = polyline.bounds();
        prop_assert_eq!(bounds, point_list::bounds(&points));
        for p in &points {
            prop_assert!(bounds.contains_point(*p));
        }
    }

    #[test]
    fn identity_transform_preserves_polyline(points in arb_points()) {
        let polyline = Polyline::from_points(&points);
        prop_assert_eq!(polyline.transformed(&AffineTransform::identity()), polyline);
    }

    #[test]
    fn intersects_rect_always_errors(points in arb_points()) {
        let polyline = Polyline::from_points(&points);
        prop_assert!(polyline.intersects_rect(&Rectangle::new(0.0, 0.0, 1.0, 1.0)).is_err());
    }
}
