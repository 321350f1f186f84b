mod frame;
mod null_renderer;

pub use frame::ChartFrame;
pub use null_renderer::NullRenderer;

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully projected, validated `ChartFrame` so drawing code
/// never touches raw table text or field-selection rules.
pub trait ChartRenderer {
    fn render(&mut self, frame: &ChartFrame) -> ChartResult<()>;
}
