use std::f64::consts::PI;

use crate::core::stage::{Stage, map_stage};
use crate::core::types::{CanvasGeometry, CurvePoint};

/// Maps a 0..=100 progress value onto the hill curve.
///
/// `x` is linear in progress across the effective width; `y` follows half a
/// sine period between `base_y` and `peak_y`. Values outside `[0, 100]` are
/// not clamped: they land outside the margins, and the sine turns negative,
/// putting `y` below the baseline (larger than `base_y`).
#[must_use]
pub fn map_progress(progress: f64, geometry: CanvasGeometry) -> CurvePoint {
    let t = progress / 100.0;
    let x = geometry.margin_x + t * geometry.effective_width();
    let curve_height = (t * PI).sin();
    let y = geometry.base_y - curve_height * geometry.curve_amplitude();
    CurvePoint::new(x, y)
}

/// Samples the curve at `segments + 1` evenly spaced progress values from 0
/// to 100 inclusive.
#[must_use]
pub fn sample_curve(geometry: CanvasGeometry, segments: usize) -> Vec<CurvePoint> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|step| {
            let progress = step as f64 * 100.0 / segments as f64;
            map_progress(progress, geometry)
        })
        .collect()
}

/// Geometry-bound convenience wrapper over `map_progress` and `map_stage`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    geometry: CanvasGeometry,
}

impl CoordinateMapper {
    #[must_use]
    pub fn new(geometry: CanvasGeometry) -> Self {
        Self { geometry }
    }

    #[must_use]
    pub fn geometry(self) -> CanvasGeometry {
        self.geometry
    }

    #[must_use]
    pub fn map_progress(self, progress: f64) -> CurvePoint {
        map_progress(progress, self.geometry)
    }

    #[must_use]
    pub fn map_stage(self, progress: f64) -> Stage {
        map_stage(progress)
    }

    #[must_use]
    pub fn sample_curve(self, segments: usize) -> Vec<CurvePoint> {
        sample_curve(self.geometry, segments)
    }
}
