//! Chart pipeline entry points and the data types crossing the crate boundary.

mod chart_point_builder;
mod data_provider;
mod feature_list;
mod hill_render_frame_builder;
mod json_contract;
mod records;

pub use chart_point_builder::{ChartBuildConfig, ChartPointBuilder, OutputOrder, ProgressPolicy};
pub use data_provider::{
    DataProvider, JsonDataProvider, StaticDataProvider, parse_records_json, records_for_project,
};
pub use feature_list::{FeatureListEntry, feature_list, stage_counts};
pub use hill_render_frame_builder::{HillFrameStyle, build_hill_render_frame, render_hill_chart};
pub use json_contract::{
    PLOT_POINTS_JSON_SCHEMA_V1, PlotPointsJsonContractV1, plot_points_from_json_compat_str,
    plot_points_to_json_contract_v1_pretty,
};
pub use records::{DEFAULT_LABEL_LIFT, InputRecord, PlotPoint};
