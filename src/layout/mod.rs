pub mod label_layout;

pub use label_layout::{LabelLayoutConfig, LayoutDiagnostics, layout_labels, measure_overlaps};
