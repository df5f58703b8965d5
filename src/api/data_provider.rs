use crate::api::InputRecord;
use crate::error::{HillChartError, HillChartResult};

/// Source of records for one chart render.
///
/// Transport, authentication and retries live in implementations; the
/// chart pipeline only sees the resulting records.
pub trait DataProvider {
    fn records(&self) -> HillChartResult<Vec<InputRecord>>;
}

/// Provider over an owned, already-fetched record list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticDataProvider {
    records: Vec<InputRecord>,
}

impl StaticDataProvider {
    #[must_use]
    pub fn new(records: Vec<InputRecord>) -> Self {
        Self { records }
    }
}

impl DataProvider for StaticDataProvider {
    fn records(&self) -> HillChartResult<Vec<InputRecord>> {
        Ok(self.records.clone())
    }
}

/// Provider over a raw JSON array payload, parsed on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonDataProvider {
    payload: String,
}

impl JsonDataProvider {
    #[must_use]
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

impl DataProvider for JsonDataProvider {
    fn records(&self) -> HillChartResult<Vec<InputRecord>> {
        parse_records_json(&self.payload)
    }
}

/// Parses a JSON array of records in either the webhook or the plain shape.
pub fn parse_records_json(input: &str) -> HillChartResult<Vec<InputRecord>> {
    serde_json::from_str(input)
        .map_err(|e| HillChartError::InvalidData(format!("failed to parse records json: {e}")))
}

/// Keeps the records attached to `project_id`, preserving order.
#[must_use]
pub fn records_for_project(
    records: impl IntoIterator<Item = InputRecord>,
    project_id: &str,
) -> Vec<InputRecord> {
    records
        .into_iter()
        .filter(|record| record.belongs_to(project_id))
        .collect()
}
