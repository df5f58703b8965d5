use std::collections::HashMap;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::api::{InputRecord, PlotPoint};
use crate::core::{NEUTRAL_COLOR, Stage, map_stage};
use crate::render::Color;

const MISSING_SIZE_LABEL: &str = "N/A";
const DEFAULT_KIND: &str = "Geral";

/// One row of the per-record detail list shown next to the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureListEntry {
    pub id: String,
    pub label: String,
    pub progress: f64,
    pub stage: Stage,
    pub size_label: String,
    pub kind: String,
    pub url: Option<String>,
    pub color: Color,
}

/// Builds detail rows, most advanced first.
///
/// Colors come from the plot point sharing the record's id, so the list
/// matches the chart; records without a point get `NEUTRAL_COLOR`.
#[must_use]
pub fn feature_list(records: &[InputRecord], points: &[PlotPoint]) -> Vec<FeatureListEntry> {
    let colors: HashMap<&str, Color> = points
        .iter()
        .map(|point| (point.id(), point.color()))
        .collect();

    let mut entries: Vec<FeatureListEntry> = records
        .iter()
        .map(|record| {
            let progress = record.progress_or_default();
            FeatureListEntry {
                id: record.id.clone(),
                label: record.label.clone(),
                progress,
                stage: map_stage(progress),
                size_label: record
                    .size_label
                    .clone()
                    .filter(|label| !label.is_empty())
                    .unwrap_or_else(|| MISSING_SIZE_LABEL.to_owned()),
                kind: record
                    .kind
                    .clone()
                    .filter(|kind| !kind.is_empty())
                    .unwrap_or_else(|| DEFAULT_KIND.to_owned()),
                url: record.url.clone(),
                color: colors
                    .get(record.id.as_str())
                    .copied()
                    .unwrap_or(NEUTRAL_COLOR),
            }
        })
        .collect();

    sort_by_progress_desc(&mut entries, |entry| entry.progress);
    entries
}

/// Number of records per stage, always listing all four stages in order.
#[must_use]
pub fn stage_counts(records: &[InputRecord]) -> IndexMap<Stage, usize> {
    let mut counts: IndexMap<Stage, usize> = Stage::ALL.iter().map(|stage| (*stage, 0)).collect();
    for record in records {
        *counts
            .entry(map_stage(record.progress_or_default()))
            .or_insert(0) += 1;
    }
    counts
}

/// Highest progress first; ties keep their relative order.
fn sort_by_progress_desc<T>(items: &mut [T], progress: impl Fn(&T) -> f64) {
    items.sort_by(|a, b| OrderedFloat(progress(b)).cmp(&OrderedFloat(progress(a))));
}
