use serde::Serialize;

use crate::core::{ChartConfiguration, PlotPoint};
use crate::error::{ChartError, ChartResult};

/// Everything a backend needs for one chart draw pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartFrame {
    pub title: String,
    pub configuration: ChartConfiguration,
    pub points: Vec<PlotPoint>,
}

impl ChartFrame {
    #[must_use]
    pub fn new(configuration: ChartConfiguration, points: Vec<PlotPoint>) -> Self {
        Self {
            title: String::new(),
            configuration,
            points,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if let Some((index, point)) = self
            .points
            .iter()
            .enumerate()
            .find(|(_, point)| !point.value.is_finite())
        {
            return Err(ChartError::InvalidData(format!(
                "point {index} (`{}`) has non-finite value {}",
                point.name, point.value
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
