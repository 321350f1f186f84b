use tracing::{debug, trace};

use crate::core::{ChartProjection, project_chart_data};
use crate::error::ChartResult;
use crate::render::{ChartFrame, ChartRenderer};

use super::ChartWorkbench;

impl<R: ChartRenderer> ChartWorkbench<R> {
    /// Projects the table with the current configuration.
    ///
    /// Without a configuration there is nothing to project: no points and
    /// no error.
    #[must_use]
    pub fn projection(&self) -> ChartProjection {
        match &self.configuration {
            Some(configuration) => project_chart_data(&self.table, configuration),
            None => ChartProjection::default(),
        }
    }

    /// Builds the frame for the current state, `Ok(None)` when nothing is
    /// configured.
    ///
    /// # Errors
    ///
    /// Configuration errors from the projector.
    pub fn frame(&self) -> ChartResult<Option<ChartFrame>> {
        let Some(configuration) = &self.configuration else {
            return Ok(None);
        };
        let points = project_chart_data(&self.table, configuration).into_result()?;
        Ok(Some(
            ChartFrame::new(configuration.clone(), points).with_title(self.file_name.clone()),
        ))
    }

    /// Projects and hands the frame to the renderer.
    ///
    /// # Errors
    ///
    /// Configuration errors from the projector and validation errors from
    /// the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let Some(frame) = self.frame()? else {
            debug!("no chart configured, skipping render");
            return Ok(());
        };
        trace!(points = frame.points.len(), "rendering chart frame");
        self.renderer.render(&frame)
    }
}
