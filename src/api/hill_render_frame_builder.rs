use serde::{Deserialize, Serialize};

use crate::api::PlotPoint;
use crate::core::{CanvasGeometry, SizeCategory, Stage, sample_curve};
use crate::error::HillChartResult;
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, LineStrokeStyle, RectPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};

/// Visual constants for the hill chart scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HillFrameStyle {
    pub curve_segments: usize,
    pub curve_color: Color,
    pub curve_width: f64,
    pub divider_color: Color,
    pub stage_caption_color: Color,
    pub stage_caption_font_size_px: f64,
    pub circle_stroke_color: Color,
    pub circle_stroke_width: f64,
    pub connector_alpha: f64,
    pub label_box_width: f64,
    pub label_box_height: f64,
    pub label_box_color: Color,
    pub label_box_border_color: Color,
    pub label_text_color: Color,
    pub label_font_size_px: f64,
    pub show_legend: bool,
}

impl Default for HillFrameStyle {
    fn default() -> Self {
        Self {
            curve_segments: 100,
            curve_color: Color::from_rgb_hex(0x9CA3AF),
            curve_width: 3.0,
            divider_color: Color::from_rgb_hex(0xE5E7EB),
            stage_caption_color: Color::from_rgb_hex(0x9CA3AF),
            stage_caption_font_size_px: 12.0,
            circle_stroke_color: Color::rgb(1.0, 1.0, 1.0),
            circle_stroke_width: 2.0,
            connector_alpha: 0.5,
            label_box_width: 80.0,
            label_box_height: 16.0,
            label_box_color: Color::rgba(1.0, 1.0, 1.0, 0.95),
            label_box_border_color: Color::from_rgb_hex(0xD1D5DB),
            label_text_color: Color::from_rgb_hex(0x1F2937),
            label_font_size_px: 10.0,
            show_legend: true,
        }
    }
}

// Label box top edge relative to the label anchor.
const LABEL_BOX_TOP_OFFSET: f64 = 11.0;
// A connector is drawn once the label drifts this far from its resting spot.
const CONNECTOR_REST_LIFT: f64 = 15.0;
const CONNECTOR_MIN_DRIFT: f64 = 5.0;

const LEGEND_RIGHT_INSET: f64 = 60.0;
const LEGEND_TOP: f64 = 24.0;
const LEGEND_ROW_HEIGHT: f64 = 16.0;
const LEGEND_DOT_RADIUS: f64 = 5.0;

/// Builds the full scene for laid-out `points` on `geometry`.
///
/// The frame is validated before it is returned.
pub fn build_hill_render_frame(
    points: &[PlotPoint],
    geometry: CanvasGeometry,
    style: HillFrameStyle,
) -> HillChartResult<RenderFrame> {
    let geometry = geometry.validate()?;
    let mut frame = RenderFrame::new(geometry.chart_width, geometry.chart_height);

    push_stage_guides(&mut frame, geometry, style);
    push_curve(&mut frame, geometry, style);
    for point in points {
        push_point(&mut frame, point, style);
    }
    if style.show_legend {
        push_legend(&mut frame, geometry, style);
    }

    frame.validate()?;
    Ok(frame)
}

/// Builds the scene and hands it to `renderer`.
pub fn render_hill_chart<R: Renderer + ?Sized>(
    renderer: &mut R,
    points: &[PlotPoint],
    geometry: CanvasGeometry,
    style: HillFrameStyle,
) -> HillChartResult<()> {
    let frame = build_hill_render_frame(points, geometry, style)?;
    renderer.render(&frame)
}

fn push_curve(frame: &mut RenderFrame, geometry: CanvasGeometry, style: HillFrameStyle) {
    let samples = sample_curve(geometry, style.curve_segments);
    frame.lines.extend(samples.windows(2).map(|pair| {
        LinePrimitive::new(
            pair[0].x,
            pair[0].y,
            pair[1].x,
            pair[1].y,
            style.curve_width,
            style.curve_color,
        )
    }));
}

fn push_stage_guides(frame: &mut RenderFrame, geometry: CanvasGeometry, style: HillFrameStyle) {
    // Dividers sit on the band boundaries; the middle one reaches higher.
    for (fraction, rise) in [(0.25, 20.0), (0.5, 40.0), (0.75, 20.0)] {
        let x = geometry.chart_width * fraction;
        frame.lines.push(
            LinePrimitive::new(
                x,
                geometry.peak_y - rise,
                x,
                geometry.base_y,
                1.0,
                style.divider_color,
            )
            .with_stroke_style(LineStrokeStyle::Dashed),
        );
    }

    for (index, stage) in Stage::ALL.iter().enumerate() {
        let x = geometry.chart_width * (0.125 + 0.25 * index as f64);
        let rise = if matches!(stage, Stage::Refinar | Stage::Implementar) {
            50.0
        } else {
            30.0
        };
        frame.texts.push(
            TextPrimitive::new(
                stage.display_name(),
                x,
                geometry.peak_y - rise,
                style.stage_caption_font_size_px,
                style.stage_caption_color,
                TextHAlign::Center,
            )
            .bold(),
        );
    }
}

fn push_point(frame: &mut RenderFrame, point: &PlotPoint, style: HillFrameStyle) {
    let (x, y, radius) = (point.x(), point.y(), point.radius());
    let label_y = point.label_offset_y();

    if (label_y - (y - CONNECTOR_REST_LIFT)).abs() > CONNECTOR_MIN_DRIFT {
        frame.lines.push(LinePrimitive::new(
            x,
            y - radius - 2.0,
            x,
            label_y + 5.0,
            1.0,
            point.color().with_alpha(style.connector_alpha),
        ));
    }

    frame.circles.push(
        CirclePrimitive::new(x, y, radius, point.color())
            .with_stroke(style.circle_stroke_width, style.circle_stroke_color),
    );

    if point.label().is_empty() {
        return;
    }

    frame.rects.push(
        RectPrimitive::new(
            x - style.label_box_width / 2.0,
            label_y - LABEL_BOX_TOP_OFFSET,
            style.label_box_width,
            style.label_box_height,
            style.label_box_color,
        )
        .with_corner_radius(4.0)
        .with_border(0.5, style.label_box_border_color),
    );
    frame.texts.push(
        TextPrimitive::new(
            point.label(),
            x,
            label_y,
            style.label_font_size_px,
            style.label_text_color,
            TextHAlign::Center,
        )
        .bold(),
    );
}

fn push_legend(frame: &mut RenderFrame, geometry: CanvasGeometry, style: HillFrameStyle) {
    let dot_x = geometry.chart_width - LEGEND_RIGHT_INSET;
    for (row, category) in SizeCategory::ALL.iter().enumerate() {
        let y = LEGEND_TOP + row as f64 * LEGEND_ROW_HEIGHT;
        frame.circles.push(CirclePrimitive::new(
            dot_x,
            y,
            LEGEND_DOT_RADIUS,
            category.color(),
        ));
        frame.texts.push(TextPrimitive::new(
            category.label(),
            dot_x + LEGEND_DOT_RADIUS + 6.0,
            y,
            style.label_font_size_px,
            style.label_text_color,
            TextHAlign::Left,
        ));
    }
}
