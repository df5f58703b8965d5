mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, LineStrokeStyle, RectPrimitive, TextHAlign,
    TextPrimitive,
};

use crate::error::HillChartResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully positioned `RenderFrame`; curve sampling, label
/// placement and color lookup all happen before this boundary.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> HillChartResult<()>;
}
