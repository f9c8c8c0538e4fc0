#![allow(dead_code)]
use planar_shapes::{
    core::{math::Point, traits::FuzzyEq},
    shapes::{Polyline, Rectangle},
};

/// Route library log records to the test output, safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Fuzzy compare rectangle values
pub fn rect_fuzzy_eq_eps(a: &Rectangle<f64>, b: &Rectangle<f64>, eps: f64) -> bool {
    a.x.fuzzy_eq_eps(b.x, eps)
        && a.y.fuzzy_eq_eps(b.y, eps)
        && a.width.fuzzy_eq_eps(b.width, eps)
        && a.height.fuzzy_eq_eps(b.height, eps)
}

/// Zig zag polyline along the x axis with `point_count` points and unit amplitude.
pub fn zig_zag(point_count: usize) -> Polyline<f64> {
    (0..point_count)
        .map(|i| Point::new(i as f64, if i % 2 == 0 { 0.0 } else { 1.0 }))
        .collect()
}

/// Helper function to create json string from polyline to be used for debugging.
pub fn to_debug_json_str(polyline: &Polyline<f64>) -> String {
    format!(
        r#"
{{
    "points": [
        {}
    ]
}}
"#,
        polyline
            .iter_points()
            .map(|p| format!("[{}, {}]", p.x, p.y))
            .collect::<Vec<_>>()
            .join(",\n        ")
    )
}
