use approx::assert_relative_eq;
use hill_chart_rs::api::{
    ChartBuildConfig, ChartPointBuilder, OutputOrder, ProgressPolicy, StaticDataProvider,
};
use hill_chart_rs::core::{CanvasGeometry, NEUTRAL_COLOR, SizeCategory};
use hill_chart_rs::layout::LabelLayoutConfig;
use hill_chart_rs::{InputRecord, PlotPoint};

fn records() -> Vec<InputRecord> {
    vec![
        InputRecord::new("late", "Checkout")
            .with_progress(80.0)
            .with_size_label("gg")
            .with_weight(12.0),
        InputRecord::new("early", "Login")
            .with_progress(10.0)
            .with_size_label("P"),
        InputRecord::new("middle", "Search")
            .with_progress(50.0)
            .with_size_label("xgg")
            .with_weight(4.0),
    ]
}

fn ids(points: &[PlotPoint]) -> Vec<&str> {
    points.iter().map(PlotPoint::id).collect()
}

#[test]
fn single_record_is_positioned_colored_and_laid_out() {
    let builder = ChartPointBuilder::new(ChartBuildConfig::default()).expect("builder");
    let record = InputRecord::new("f-1", "Search")
        .with_progress(50.0)
        .with_size_label("m")
        .with_weight(4.0);

    let points = builder.build(&[record]).expect("build");
    assert_eq!(points.len(), 1);

    let point = &points[0];
    assert_eq!(point.id(), "f-1");
    assert_eq!(point.label(), "Search");
    assert_relative_eq!(point.x(), 450.0);
    assert_relative_eq!(point.y(), 120.0);
    assert_relative_eq!(point.radius(), 6.0);
    assert_eq!(point.color(), SizeCategory::M.color());
    assert_relative_eq!(point.label_offset_y(), 88.0);
    assert_eq!(point.source_index(), 0);
}

#[test]
fn default_output_is_sorted_by_x() {
    let builder = ChartPointBuilder::new(ChartBuildConfig::default()).expect("builder");
    let points = builder.build(&records()).expect("build");
    assert_eq!(ids(&points), ["early", "middle", "late"]);
}

#[test]
fn input_order_can_be_restored() {
    let config = ChartBuildConfig::default().with_output_order(OutputOrder::Input);
    let builder = ChartPointBuilder::new(config).expect("builder");

    let points = builder.build(&records()).expect("build");
    assert_eq!(ids(&points), ["late", "early", "middle"]);

    let sorted = ChartPointBuilder::new(ChartBuildConfig::default())
        .expect("builder")
        .build(&records())
        .expect("build");
    for point in &points {
        let twin = sorted
            .iter()
            .find(|candidate| candidate.id() == point.id())
            .expect("same ids in both orders");
        assert_eq!(point, twin);
    }
}

#[test]
fn missing_fields_fall_back_without_errors() {
    let builder = ChartPointBuilder::new(ChartBuildConfig::default()).expect("builder");
    let record = InputRecord {
        id: "bare".to_owned(),
        ..InputRecord::default()
    };

    let points = builder.build(&[record]).expect("build");
    let point = &points[0];
    assert_relative_eq!(point.x(), 30.0);
    assert_relative_eq!(point.y(), 450.0);
    assert_relative_eq!(point.radius(), 6.0);
    assert_eq!(point.color(), NEUTRAL_COLOR);
}

#[test]
fn nan_progress_is_read_as_zero() {
    let builder = ChartPointBuilder::new(ChartBuildConfig::default()).expect("builder");
    let points = builder
        .build(&[InputRecord::new("nan", "NaN").with_progress(f64::NAN)])
        .expect("build");
    assert_relative_eq!(points[0].x(), 30.0);
}

#[test]
fn infinite_progress_is_read_as_zero() {
    let builder = ChartPointBuilder::new(ChartBuildConfig::default()).expect("builder");
    let points = builder
        .build(&[
            InputRecord::new("pos", "Up").with_progress(f64::INFINITY),
            InputRecord::new("neg", "Down").with_progress(f64::NEG_INFINITY),
            InputRecord::new("mid", "Middle").with_progress(50.0),
        ])
        .expect("build");

    for point in &points {
        assert!(point.x().is_finite(), "{} x", point.id());
        assert!(point.y().is_finite(), "{} y", point.id());
        assert!(point.label_offset_y().is_finite(), "{} label", point.id());
    }
    let up = points.iter().find(|p| p.id() == "pos").expect("pos");
    assert_relative_eq!(up.x(), 30.0);
    assert_relative_eq!(up.y(), 450.0, epsilon = 1e-9);
}

#[test]
fn out_of_range_progress_passes_through_by_default() {
    let builder = ChartPointBuilder::new(ChartBuildConfig::default()).expect("builder");
    let points = builder
        .build(&[InputRecord::new("over", "Over").with_progress(150.0)])
        .expect("build");
    assert_relative_eq!(points[0].x(), 1_290.0);
    assert_relative_eq!(points[0].y(), 780.0, epsilon = 1e-9);
}

#[test]
fn clamp_policy_keeps_points_on_the_curve() {
    let config = ChartBuildConfig::default().with_progress_policy(ProgressPolicy::Clamp);
    let builder = ChartPointBuilder::new(config).expect("builder");
    let points = builder
        .build(&[
            InputRecord::new("under", "Under").with_progress(-20.0),
            InputRecord::new("over", "Over").with_progress(150.0),
        ])
        .expect("build");

    assert_relative_eq!(points[0].x(), 30.0);
    assert_relative_eq!(points[1].x(), 870.0);
    for point in &points {
        assert_relative_eq!(point.y(), 450.0, epsilon = 1e-9);
    }
}

#[test]
fn builds_are_independent() {
    let builder = ChartPointBuilder::new(ChartBuildConfig::default()).expect("builder");
    let input = records();
    let first = builder.build(&input).expect("first");
    let second = builder.build(&input).expect("second");
    assert_eq!(first, second);
}

#[test]
fn builder_reads_from_a_provider() {
    let builder = ChartPointBuilder::new(ChartBuildConfig::default()).expect("builder");
    let provider = StaticDataProvider::new(records());
    let points = builder.build_from(&provider).expect("build");
    assert_eq!(points.len(), 3);
}

#[test]
fn invalid_configs_are_rejected_up_front() {
    let bad_geometry = ChartBuildConfig::new(CanvasGeometry::new(-1.0, 550.0));
    assert!(ChartPointBuilder::new(bad_geometry).is_err());

    let bad_layout = ChartBuildConfig::default()
        .with_layout(LabelLayoutConfig::default().with_label_box(90.0, f64::INFINITY));
    assert!(ChartPointBuilder::new(bad_layout).is_err());
}

#[test]
fn config_round_trips_through_json_with_defaults() {
    let parsed: ChartBuildConfig = serde_json::from_str("{}").expect("defaults");
    assert_eq!(parsed, ChartBuildConfig::default());

    let config = ChartBuildConfig::default()
        .with_output_order(OutputOrder::Input)
        .with_progress_policy(ProgressPolicy::Clamp);
    let json = serde_json::to_string(&config).expect("serialize");
    let restored: ChartBuildConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, config);
}
