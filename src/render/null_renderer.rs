use crate::error::ChartResult;
use crate::render::{ChartFrame, ChartRenderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests can catch invalid points before
/// a real backend is attached.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_point_count: usize,
    pub frames_rendered: usize,
}

impl ChartRenderer for NullRenderer {
    fn render(&mut self, frame: &ChartFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_point_count = frame.points.len();
        self.frames_rendered += 1;
        Ok(())
    }
}
