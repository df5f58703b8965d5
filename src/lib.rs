//! hill-chart-rs: hill chart point mapping and label placement.
//!
//! Records flow one way through the crate: they are mapped onto a fixed sine
//! curve (`core`), classified into a radius and color, then handed to the
//! label relaxation pass (`layout`). The `api` module bundles that pipeline
//! and projects the result into a backend-agnostic `render::RenderFrame`.

pub mod api;
pub mod core;
pub mod error;
pub mod layout;
pub mod render;
pub mod telemetry;

pub use api::{ChartBuildConfig, ChartPointBuilder, InputRecord, PlotPoint};
pub use error::{HillChartError, HillChartResult};
