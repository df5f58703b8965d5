use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{HillChartError, HillChartResult};
use crate::render::Color;

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// One item to plot, as supplied by a `DataProvider`.
///
/// Field aliases accept the upstream webhook's property names, so provider
/// payloads deserialize without a mapping layer. Every field except `id` may
/// be missing or null.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InputRecord {
    pub id: String,
    #[serde(default, alias = "name", deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(default, alias = "property_progresso")]
    pub progress: Option<f64>,
    #[serde(default, alias = "property_tamanho", alias = "sizeLabel")]
    pub size_label: Option<String>,
    #[serde(default, alias = "property_f_tamanho")]
    pub weight: Option<f64>,
    #[serde(default, alias = "property_sistema", deserialize_with = "null_as_default")]
    pub project_ids: Vec<String>,
    #[serde(default, alias = "property_tipo")]
    pub kind: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl InputRecord {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_progress(mut self, progress: f64) -> Self {
        self.progress = Some(progress);
        self
    }

    #[must_use]
    pub fn with_size_label(mut self, size_label: impl Into<String>) -> Self {
        self.size_label = Some(size_label.into());
        self
    }

    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    #[must_use]
    pub fn with_project(mut self, project_id: impl Into<String>) -> Self {
        self.project_ids.push(project_id.into());
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Progress with missing and non-finite values read as `0`. Not clamped.
    #[must_use]
    pub fn progress_or_default(&self) -> f64 {
        match self.progress {
            Some(value) if value.is_finite() => value,
            _ => 0.0,
        }
    }

    #[must_use]
    pub fn belongs_to(&self, project_id: &str) -> bool {
        self.project_ids.iter().any(|id| id == project_id)
    }
}

/// A record positioned on the canvas, ready to draw.
///
/// Only `label_offset_y` changes after construction, and only inside the
/// label layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    id: String,
    label: String,
    x: f64,
    y: f64,
    radius: f64,
    color: Color,
    label_offset_y: f64,
    source_index: usize,
}

/// Distance above the circle center used before layout runs.
pub const DEFAULT_LABEL_LIFT: f64 = 25.0;

impl PlotPoint {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        x: f64,
        y: f64,
        radius: f64,
        color: Color,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            x,
            y,
            radius,
            color,
            label_offset_y: y - DEFAULT_LABEL_LIFT,
            source_index: 0,
        }
    }

    #[must_use]
    pub fn with_source_index(mut self, source_index: usize) -> Self {
        self.source_index = source_index;
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Vertical canvas position of the label's anchor.
    #[must_use]
    pub fn label_offset_y(&self) -> f64 {
        self.label_offset_y
    }

    /// Position of the originating record in the builder input.
    #[must_use]
    pub fn source_index(&self) -> usize {
        self.source_index
    }

    /// Checks that the point can be drawn: finite coordinates, a finite
    /// positive radius and a valid color.
    ///
    /// The radius is not held to the default `[6, 14]` range, since a custom
    /// `RadiusScale` can legitimately produce other sizes.
    pub fn validate(&self) -> HillChartResult<()> {
        for (value, name) in [
            (self.x, "x"),
            (self.y, "y"),
            (self.label_offset_y, "label_offset_y"),
        ] {
            if !value.is_finite() {
                return Err(HillChartError::InvalidData(format!(
                    "plot point `{}` has non-finite `{name}`",
                    self.id
                )));
            }
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(HillChartError::InvalidData(format!(
                "plot point `{}` radius must be finite and > 0",
                self.id
            )));
        }
        self.color.validate()
    }

    pub(crate) fn set_label_offset_y(&mut self, label_offset_y: f64) {
        self.label_offset_y = label_offset_y;
    }
}
