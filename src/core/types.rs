use serde::{Deserialize, Serialize};

use crate::error::{HillChartError, HillChartResult};

/// Fixed coordinate system of one hill chart.
///
/// The curve starts at `(margin_x, base_y)`, peaks at `peak_y` halfway
/// across, and ends at `(chart_width - margin_x, base_y)`. Screen space: `y`
/// grows downward, so `peak_y < base_y` for an upright hill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasGeometry {
    pub chart_width: f64,
    pub chart_height: f64,
    pub base_y: f64,
    pub peak_y: f64,
    pub margin_x: f64,
}

impl Default for CanvasGeometry {
    fn default() -> Self {
        Self {
            chart_width: 900.0,
            chart_height: 550.0,
            base_y: 450.0,
            peak_y: 120.0,
            margin_x: 30.0,
        }
    }
}

impl CanvasGeometry {
    #[must_use]
    pub fn new(chart_width: f64, chart_height: f64) -> Self {
        Self {
            chart_width,
            chart_height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_curve_heights(mut self, base_y: f64, peak_y: f64) -> Self {
        self.base_y = base_y;
        self.peak_y = peak_y;
        self
    }

    #[must_use]
    pub fn with_margin_x(mut self, margin_x: f64) -> Self {
        self.margin_x = margin_x;
        self
    }

    /// Horizontal span covered by the curve.
    #[must_use]
    pub fn effective_width(self) -> f64 {
        self.chart_width - 2.0 * self.margin_x
    }

    /// Vertical distance between the baseline and the peak.
    #[must_use]
    pub fn curve_amplitude(self) -> f64 {
        self.base_y - self.peak_y
    }

    pub fn validate(self) -> HillChartResult<Self> {
        for (value, name) in [
            (self.chart_width, "chart_width"),
            (self.chart_height, "chart_height"),
            (self.base_y, "base_y"),
            (self.peak_y, "peak_y"),
            (self.margin_x, "margin_x"),
        ] {
            if !value.is_finite() {
                return Err(HillChartError::InvalidGeometry(format!(
                    "`{name}` must be finite"
                )));
            }
        }
        if self.chart_width <= 0.0 || self.chart_height <= 0.0 {
            return Err(HillChartError::InvalidGeometry(format!(
                "chart size must be > 0: width={}, height={}",
                self.chart_width, self.chart_height
            )));
        }
        if self.margin_x < 0.0 || self.effective_width() <= 0.0 {
            return Err(HillChartError::InvalidGeometry(format!(
                "margin_x={} leaves no room for the curve",
                self.margin_x
            )));
        }
        Ok(self)
    }
}

/// Canvas position of a progress value on the curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

impl CurvePoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
