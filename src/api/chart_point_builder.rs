use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::api::{DataProvider, InputRecord, PlotPoint};
use crate::core::{CanvasGeometry, RadiusScale, SizeColorClassifier, map_progress};
use crate::error::HillChartResult;
use crate::layout::{LabelLayoutConfig, layout_labels};

/// Order of the points returned by `ChartPointBuilder::build`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputOrder {
    /// Ascending `x`, the order the layout pass works in.
    #[default]
    XAscending,
    /// Same order as the input records.
    Input,
}

/// Treatment of progress values outside `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProgressPolicy {
    /// Map the raw value; points may land off the curve's visible span.
    #[default]
    PassThrough,
    /// Clamp to `[0, 100]` before mapping.
    Clamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartBuildConfig {
    #[serde(default)]
    pub geometry: CanvasGeometry,
    #[serde(default)]
    pub radius_scale: RadiusScale,
    #[serde(default)]
    pub layout: LabelLayoutConfig,
    #[serde(default)]
    pub output_order: OutputOrder,
    #[serde(default)]
    pub progress_policy: ProgressPolicy,
}

impl ChartBuildConfig {
    #[must_use]
    pub fn new(geometry: CanvasGeometry) -> Self {
        Self {
            geometry,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_radius_scale(mut self, radius_scale: RadiusScale) -> Self {
        self.radius_scale = radius_scale;
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: LabelLayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_output_order(mut self, output_order: OutputOrder) -> Self {
        self.output_order = output_order;
        self
    }

    #[must_use]
    pub fn with_progress_policy(mut self, progress_policy: ProgressPolicy) -> Self {
        self.progress_policy = progress_policy;
        self
    }

    pub fn validate(self) -> HillChartResult<Self> {
        self.geometry.validate()?;
        self.radius_scale.validate()?;
        self.layout.validate()?;
        Ok(self)
    }
}

/// Turns input records into positioned, colored, laid-out plot points.
///
/// Every `build` call allocates its own points, so concurrent builds never
/// share label state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPointBuilder {
    config: ChartBuildConfig,
    classifier: SizeColorClassifier,
}

impl ChartPointBuilder {
    pub fn new(config: ChartBuildConfig) -> HillChartResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            config,
            classifier: SizeColorClassifier::new(config.radius_scale),
        })
    }

    #[must_use]
    pub fn config(&self) -> ChartBuildConfig {
        self.config
    }

    pub fn build(&self, records: &[InputRecord]) -> HillChartResult<Vec<PlotPoint>> {
        let points = records
            .iter()
            .enumerate()
            .map(|(index, record)| self.plot_point(index, record))
            .collect();

        let mut points = layout_labels(points, self.config.layout)?;
        if self.config.output_order == OutputOrder::Input {
            points.sort_by_key(PlotPoint::source_index);
        }

        debug!(
            records = records.len(),
            order = ?self.config.output_order,
            "built chart points"
        );
        Ok(points)
    }

    pub fn build_from<P: DataProvider + ?Sized>(
        &self,
        provider: &P,
    ) -> HillChartResult<Vec<PlotPoint>> {
        let records = provider.records()?;
        self.build(&records)
    }

    fn plot_point(&self, index: usize, record: &InputRecord) -> PlotPoint {
        let mut progress = record.progress_or_default();
        if !(0.0..=100.0).contains(&progress) {
            warn!(
                id = %record.id,
                progress,
                policy = ?self.config.progress_policy,
                "progress outside [0, 100]"
            );
            if self.config.progress_policy == ProgressPolicy::Clamp {
                progress = progress.clamp(0.0, 100.0);
            }
        }

        let position = map_progress(progress, self.config.geometry);
        PlotPoint::new(
            record.id.clone(),
            record.label.clone(),
            position.x,
            position.y,
            self.classifier.radius_for_weight(record.weight),
            self.classifier.color_for_size(record.size_label.as_deref()),
        )
        .with_source_index(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_policy_pins_out_of_range_progress_to_the_ends() {
        let config = ChartBuildConfig::default().with_progress_policy(ProgressPolicy::Clamp);
        let builder = ChartPointBuilder::new(config).expect("builder");
        let point = builder.plot_point(0, &InputRecord::new("a", "A").with_progress(130.0));
        assert_eq!(point.x(), 870.0);
        assert!((point.y() - 450.0).abs() < 1e-9);
    }
}
