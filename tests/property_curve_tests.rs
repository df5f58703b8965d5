use hill_chart_rs::core::{CanvasGeometry, map_progress};
use proptest::prelude::*;

proptest! {
    #[test]
    fn x_is_strictly_increasing_in_progress(
        a in 0.0f64..=100.0,
        b in 0.0f64..=100.0
    ) {
        prop_assume!((a - b).abs() > 1e-9);
        let (p1, p2) = if a < b { (a, b) } else { (b, a) };

        let geometry = CanvasGeometry::default();
        prop_assert!(map_progress(p1, geometry).x < map_progress(p2, geometry).x);
    }

    #[test]
    fn y_is_symmetric_around_the_midpoint(progress in 0.0f64..=100.0) {
        let geometry = CanvasGeometry::default();
        let left = map_progress(progress, geometry).y;
        let right = map_progress(100.0 - progress, geometry).y;
        prop_assert!((left - right).abs() <= 1e-9);
    }

    #[test]
    fn midpoint_is_the_highest_point(progress in 0.0f64..=100.0) {
        let geometry = CanvasGeometry::default();
        let peak = map_progress(50.0, geometry).y;
        let y = map_progress(progress, geometry).y;
        prop_assert!(peak <= y + 1e-9);
        prop_assert!(y <= geometry.base_y + 1e-9);
    }

    #[test]
    fn custom_geometry_keeps_points_inside_curve_bounds(
        width in 200.0f64..2_000.0,
        margin_ratio in 0.0f64..0.4,
        base_y in 100.0f64..1_000.0,
        amplitude in 1.0f64..90.0,
        progress in 0.0f64..=100.0
    ) {
        let geometry = CanvasGeometry::new(width, base_y + 50.0)
            .with_curve_heights(base_y, base_y - amplitude)
            .with_margin_x(width * margin_ratio);
        let point = map_progress(progress, geometry);

        prop_assert!(point.x >= geometry.margin_x - 1e-9);
        prop_assert!(point.x <= width - geometry.margin_x + 1e-9);
        prop_assert!(point.y >= geometry.peak_y - 1e-9);
        prop_assert!(point.y <= geometry.base_y + 1e-9);
    }
}
