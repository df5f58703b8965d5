pub mod classifier;
pub mod curve;
pub mod stage;
pub mod types;

pub use classifier::{
    NEUTRAL_COLOR, RadiusScale, SizeCategory, SizeColorClassifier, color_for_size,
    radius_for_weight,
};
pub use curve::{CoordinateMapper, map_progress, sample_curve};
pub use stage::{Stage, map_stage};
pub use types::{CanvasGeometry, CurvePoint};
