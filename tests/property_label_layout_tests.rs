use hill_chart_rs::PlotPoint;
use hill_chart_rs::core::{CanvasGeometry, map_progress};
use hill_chart_rs::layout::{LabelLayoutConfig, layout_labels};
use hill_chart_rs::render::Color;
use proptest::prelude::*;

fn circle(id: String, x: f64, y: f64, radius: f64) -> PlotPoint {
    PlotPoint::new(id.clone(), id, x, y, radius, Color::rgb(0.1, 0.2, 0.3))
}

fn initial_offset(point: &PlotPoint, config: LabelLayoutConfig) -> f64 {
    point.y() - point.radius() - config.min_clearance
}

fn distance(dx: f64, dy: f64) -> f64 {
    (dx * dx + dy * dy).sqrt()
}

proptest! {
    #[test]
    fn layout_preserves_identity_and_sorts_by_x(
        samples in prop::collection::vec((0.0f64..=100.0, 6.0f64..=14.0), 0..24)
    ) {
        let geometry = CanvasGeometry::default();
        let points: Vec<PlotPoint> = samples
            .iter()
            .enumerate()
            .map(|(i, (progress, radius))| {
                let position = map_progress(*progress, geometry);
                circle(format!("p{i}"), position.x, position.y, *radius)
            })
            .collect();

        let laid_out = layout_labels(points.clone(), LabelLayoutConfig::default())
            .expect("layout");

        prop_assert_eq!(laid_out.len(), points.len());
        let mut input_ids: Vec<&str> = points.iter().map(PlotPoint::id).collect();
        let mut output_ids: Vec<&str> = laid_out.iter().map(PlotPoint::id).collect();
        input_ids.sort_unstable();
        output_ids.sort_unstable();
        prop_assert_eq!(input_ids, output_ids);

        for pair in laid_out.windows(2) {
            prop_assert!(pair[0].x() <= pair[1].x());
        }
        for point in &laid_out {
            prop_assert!(point.label_offset_y().is_finite());
        }
    }

    #[test]
    fn label_displacement_is_bounded_by_pass_budget(
        samples in prop::collection::vec((40.0f64..=60.0, 6.0f64..=14.0), 1..20)
    ) {
        let geometry = CanvasGeometry::default();
        let config = LabelLayoutConfig::default();
        let points: Vec<PlotPoint> = samples
            .iter()
            .enumerate()
            .map(|(i, (progress, radius))| {
                let position = map_progress(*progress, geometry);
                circle(format!("p{i}"), position.x, position.y, *radius)
            })
            .collect();
        let others = (points.len() - 1) as f64;
        let per_pass = others
            * (config.circle_push_step
                + config.label_box_height / 2.0
                + config.label_separation_buffer);
        let budget = config.iterations as f64 * per_pass;

        let laid_out = layout_labels(points, config).expect("layout");
        for point in &laid_out {
            let drift = (point.label_offset_y() - initial_offset(point, config)).abs();
            prop_assert!(drift <= budget + 1e-9, "drift {} budget {}", drift, budget);
        }
    }

    #[test]
    fn separated_pairs_are_left_alone(
        x1 in 0.0f64..800.0,
        dx in 90.0f64..400.0,
        y1 in 100.0f64..450.0,
        y2 in 100.0f64..450.0,
        r1 in 6.0f64..=14.0,
        r2 in 6.0f64..=14.0
    ) {
        let config = LabelLayoutConfig::default();
        let a = circle("a".to_owned(), x1, y1, r1);
        let b = circle("b".to_owned(), x1 + dx, y2, r2);
        let label_a = initial_offset(&a, config);
        let label_b = initial_offset(&b, config);
        let gap_x = b.x() - a.x();
        prop_assume!(gap_x >= config.label_box_width);
        prop_assume!(distance(gap_x, label_a - y2) >= r2 + config.min_clearance);
        prop_assume!(distance(gap_x, label_b - y1) >= r1 + config.min_clearance);

        let laid_out = layout_labels(vec![a, b], config).expect("layout");
        prop_assert_eq!(laid_out[0].label_offset_y(), label_a);
        prop_assert_eq!(laid_out[1].label_offset_y(), label_b);
    }

    #[test]
    fn stacked_pairs_end_at_least_one_label_apart(
        y in 80.0f64..460.0,
        dy in -16.0f64..16.0,
        r1 in 6.0f64..=14.0,
        r2 in 6.0f64..=14.0
    ) {
        let config = LabelLayoutConfig::default();
        let laid_out = layout_labels(
            vec![
                circle("a".to_owned(), 450.0, y, r1),
                circle("b".to_owned(), 450.0, y + dy, r2),
            ],
            config,
        )
        .expect("layout");

        let gap = (laid_out[0].label_offset_y() - laid_out[1].label_offset_y()).abs();
        prop_assert!(gap >= config.label_box_height, "gap {}", gap);
    }
}
