use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HillChartError, HillChartResult};
use crate::render::Color;

/// Gray used for records without a recognized size label.
pub const NEUTRAL_COLOR: Color = Color::from_rgb_hex(0x9CA3AF);

/// Categorical size label attached to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeCategory {
    P,
    M,
    G,
    GG,
    XGG,
}

impl SizeCategory {
    pub const ALL: [SizeCategory; 5] = [
        SizeCategory::P,
        SizeCategory::M,
        SizeCategory::G,
        SizeCategory::GG,
        SizeCategory::XGG,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::P => "P",
            Self::M => "M",
            Self::G => "G",
            Self::GG => "GG",
            Self::XGG => "XGG",
        }
    }

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::P => Color::from_rgb_hex(0x34D399),
            Self::M => Color::from_rgb_hex(0x3B82F6),
            Self::G => Color::from_rgb_hex(0x8B5CF6),
            Self::GG => Color::from_rgb_hex(0xF59E0B),
            Self::XGG => Color::from_rgb_hex(0xEF4444),
        }
    }
}

impl FromStr for SizeCategory {
    type Err = HillChartError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.label().eq_ignore_ascii_case(value))
            .ok_or_else(|| HillChartError::InvalidData(format!("unknown size label `{value}`")))
    }
}

/// Linear weight-to-radius scaling with a hard floor and ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiusScale {
    pub factor: f64,
    pub min_radius: f64,
    pub max_radius: f64,
}

impl Default for RadiusScale {
    fn default() -> Self {
        Self {
            factor: 1.5,
            min_radius: 6.0,
            max_radius: 14.0,
        }
    }
}

impl RadiusScale {
    pub fn validate(self) -> HillChartResult<Self> {
        if !self.factor.is_finite() {
            return Err(HillChartError::InvalidConfig(
                "radius `factor` must be finite".to_owned(),
            ));
        }
        if !self.min_radius.is_finite()
            || !self.max_radius.is_finite()
            || self.min_radius <= 0.0
            || self.min_radius > self.max_radius
        {
            return Err(HillChartError::InvalidConfig(format!(
                "radius bounds must satisfy 0 < min <= max: min={}, max={}",
                self.min_radius, self.max_radius
            )));
        }
        Ok(self)
    }

    /// Scales `weight` into `[min_radius, max_radius]`.
    ///
    /// Missing, zero and NaN weights count as `1`. Negative weights are kept
    /// and end up on the floor.
    #[must_use]
    pub fn radius_for_weight(self, weight: Option<f64>) -> f64 {
        let weight = match weight {
            Some(value) if value != 0.0 && !value.is_nan() => value,
            _ => 1.0,
        };
        (weight * self.factor).clamp(self.min_radius, self.max_radius)
    }
}

/// Size label to color and weight to radius lookups.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SizeColorClassifier {
    pub radius_scale: RadiusScale,
}

impl SizeColorClassifier {
    #[must_use]
    pub fn new(radius_scale: RadiusScale) -> Self {
        Self { radius_scale }
    }

    #[must_use]
    pub fn color_for_size(self, label: Option<&str>) -> Color {
        color_for_size(label)
    }

    #[must_use]
    pub fn radius_for_weight(self, weight: Option<f64>) -> f64 {
        self.radius_scale.radius_for_weight(weight)
    }
}

/// Case-insensitive palette lookup; anything unrecognized gets `NEUTRAL_COLOR`.
#[must_use]
pub fn color_for_size(label: Option<&str>) -> Color {
    label
        .and_then(|value| value.parse::<SizeCategory>().ok())
        .map_or(NEUTRAL_COLOR, SizeCategory::color)
}

/// `radius_for_weight` with the default 1.5x scale clamped to `[6, 14]`.
#[must_use]
pub fn radius_for_weight(weight: Option<f64>) -> f64 {
    RadiusScale::default().radius_for_weight(weight)
}
