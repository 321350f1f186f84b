use std::path::PathBuf;

use thiserror::Error;

use crate::core::ChartKind;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("{kind} chart needs both {first} and {second} fields selected")]
    MissingFields {
        kind: ChartKind,
        first: &'static str,
        second: &'static str,
    },

    #[error("invalid chart configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid chart suggestion payload: {0}")]
    InvalidSuggestion(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ChartError {
    /// Returns `true` for errors the user can fix by picking different fields.
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::MissingFields { .. })
    }
}
