use serde::{Deserialize, Serialize};

use crate::api::PlotPoint;
use crate::error::{HillChartError, HillChartResult};

pub const PLOT_POINTS_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope for handing plot points to an out-of-process renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotPointsJsonContractV1 {
    pub schema_version: u32,
    pub points: Vec<PlotPoint>,
}

pub fn plot_points_to_json_contract_v1_pretty(points: &[PlotPoint]) -> HillChartResult<String> {
    let payload = PlotPointsJsonContractV1 {
        schema_version: PLOT_POINTS_JSON_SCHEMA_V1,
        points: points.to_vec(),
    };
    serde_json::to_string_pretty(&payload).map_err(|e| {
        HillChartError::InvalidData(format!("failed to serialize plot points contract v1: {e}"))
    })
}

/// Accepts either a bare point array or the v1 envelope.
///
/// Every parsed point must pass `PlotPoint::validate`.
pub fn plot_points_from_json_compat_str(input: &str) -> HillChartResult<Vec<PlotPoint>> {
    let points = parse_points_payload(input)?;
    for point in &points {
        point.validate()?;
    }
    Ok(points)
}

fn parse_points_payload(input: &str) -> HillChartResult<Vec<PlotPoint>> {
    if let Ok(points) = serde_json::from_str::<Vec<PlotPoint>>(input) {
        return Ok(points);
    }
    let payload: PlotPointsJsonContractV1 = serde_json::from_str(input).map_err(|e| {
        HillChartError::InvalidData(format!("failed to parse plot points json payload: {e}"))
    })?;
    if payload.schema_version != PLOT_POINTS_JSON_SCHEMA_V1 {
        return Err(HillChartError::InvalidData(format!(
            "unsupported plot points schema version: {}",
            payload.schema_version
        )));
    }
    Ok(payload.points)
}
