//! Iterative label relaxation for plotted circles.
//!
//! Every circle gets one label anchored at its own `x`; only the label's
//! vertical position moves. Each pass visits circles in ascending `x` and
//! applies two rules:
//!
//! 1. *circle avoidance*: the label steps up by `circle_push_step` once per
//!    other circle whose center lies closer than that circle's radius plus
//!    `min_clearance`, re-measuring after every step;
//! 2. *label separation*: for every later circle whose label box overlaps,
//!    both labels are pushed apart around their midpoint by half the overlap
//!    plus `label_separation_buffer`.
//!
//! The pass count is fixed. There is no convergence check, so dense clusters
//! can keep residual overlap; `measure_overlaps` reports it.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::api::PlotPoint;
use crate::error::{HillChartError, HillChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelLayoutConfig {
    pub iterations: usize,
    pub label_box_width: f64,
    pub label_box_height: f64,
    /// Required gap between a label anchor and any other circle's edge.
    pub min_clearance: f64,
    pub circle_push_step: f64,
    pub label_separation_buffer: f64,
}

impl Default for LabelLayoutConfig {
    fn default() -> Self {
        Self {
            iterations: 12,
            label_box_width: 90.0,
            label_box_height: 28.0,
            min_clearance: 26.0,
            circle_push_step: 5.0,
            label_separation_buffer: 4.0,
        }
    }
}

impl LabelLayoutConfig {
    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    #[must_use]
    pub fn with_label_box(mut self, width: f64, height: f64) -> Self {
        self.label_box_width = width;
        self.label_box_height = height;
        self
    }

    #[must_use]
    pub fn with_min_clearance(mut self, min_clearance: f64) -> Self {
        self.min_clearance = min_clearance;
        self
    }

    #[must_use]
    pub fn with_steps(mut self, circle_push_step: f64, label_separation_buffer: f64) -> Self {
        self.circle_push_step = circle_push_step;
        self.label_separation_buffer = label_separation_buffer;
        self
    }

    pub fn validate(self) -> HillChartResult<Self> {
        for (value, name) in [
            (self.label_box_width, "label_box_width"),
            (self.label_box_height, "label_box_height"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(HillChartError::InvalidConfig(format!(
                    "layout `{name}` must be finite and > 0"
                )));
            }
        }
        for (value, name) in [
            (self.min_clearance, "min_clearance"),
            (self.circle_push_step, "circle_push_step"),
            (self.label_separation_buffer, "label_separation_buffer"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(HillChartError::InvalidConfig(format!(
                    "layout `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Residual overlap left after a layout run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LayoutDiagnostics {
    /// Unordered label pairs whose boxes still intersect.
    pub label_label_overlaps: usize,
    /// (label, other circle) pairs closer than radius plus clearance.
    pub label_circle_overlaps: usize,
}

impl LayoutDiagnostics {
    #[must_use]
    pub fn is_clear(self) -> bool {
        self.label_label_overlaps == 0 && self.label_circle_overlaps == 0
    }
}

#[derive(Debug, Clone, Copy)]
struct Anchor {
    x: f64,
    y: f64,
    radius: f64,
}

impl Anchor {
    fn of(point: &PlotPoint) -> Self {
        Self {
            x: point.x(),
            y: point.y(),
            radius: point.radius(),
        }
    }

    fn crowds_label(self, label_x: f64, label_y: f64, min_clearance: f64) -> bool {
        let dx = label_x - self.x;
        let dy = label_y - self.y;
        (dx * dx + dy * dy).sqrt() < self.radius + min_clearance
    }
}

/// Sorts `points` by ascending `x` and relaxes their label offsets.
///
/// The sort is stable, so points sharing an `x` keep their relative input
/// order, and the result comes back in that sorted order. Incoming
/// `label_offset_y` values are ignored: every label restarts directly above
/// its circle. Identical input always yields identical output.
pub fn layout_labels(
    points: Vec<PlotPoint>,
    config: LabelLayoutConfig,
) -> HillChartResult<Vec<PlotPoint>> {
    let config = config.validate()?;
    let mut points = points;
    points.sort_by(|a, b| OrderedFloat(a.x()).cmp(&OrderedFloat(b.x())));

    let anchors: Vec<Anchor> = points.iter().map(Anchor::of).collect();
    let mut label_y: Vec<f64> = anchors
        .iter()
        .map(|anchor| anchor.y - anchor.radius - config.min_clearance)
        .collect();

    for pass in 0..config.iterations {
        let mut circle_pushes = 0usize;
        let mut label_pushes = 0usize;

        for i in 0..anchors.len() {
            let own = anchors[i];

            let mut current = label_y[i];
            for (j, other) in anchors.iter().enumerate() {
                if j != i && other.crowds_label(own.x, current, config.min_clearance) {
                    current -= config.circle_push_step;
                    circle_pushes += 1;
                }
            }
            label_y[i] = current;

            // Pair tests keep using `current` even after label `i` moves.
            // Positive guards so a NaN label never moves its neighbours.
            for k in (i + 1)..anchors.len() {
                let gap = (current - label_y[k]).abs();
                let boxes_overlap = (own.x - anchors[k].x).abs() < config.label_box_width
                    && gap < config.label_box_height;
                if !boxes_overlap {
                    continue;
                }

                let shift = (config.label_box_height - gap) / 2.0 + config.label_separation_buffer;
                if current < label_y[k] {
                    label_y[i] -= shift;
                    label_y[k] += shift;
                } else {
                    label_y[i] += shift;
                    label_y[k] -= shift;
                }
                label_pushes += 1;
            }
        }

        trace!(pass, circle_pushes, label_pushes, "label relaxation pass");
    }

    for (point, offset) in points.iter_mut().zip(label_y) {
        point.set_label_offset_y(offset);
    }

    debug!(
        count = points.len(),
        iterations = config.iterations,
        "label layout complete"
    );
    Ok(points)
}

/// Counts label overlaps in an already laid-out set, using the same box and
/// clearance rules as `layout_labels`.
#[must_use]
pub fn measure_overlaps(points: &[PlotPoint], config: LabelLayoutConfig) -> LayoutDiagnostics {
    let mut diagnostics = LayoutDiagnostics::default();

    for (i, point) in points.iter().enumerate() {
        let (label_x, label_y) = (point.x(), point.label_offset_y());
        for (j, other) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            if Anchor::of(other).crowds_label(label_x, label_y, config.min_clearance) {
                diagnostics.label_circle_overlaps += 1;
            }
            let dx = (label_x - other.x()).abs();
            let dy = (label_y - other.label_offset_y()).abs();
            if j > i && dx < config.label_box_width && dy < config.label_box_height {
                diagnostics.label_label_overlaps += 1;
            }
        }
    }

    diagnostics
}
