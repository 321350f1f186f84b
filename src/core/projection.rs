#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
#[cfg(not(feature = "parallel-projection"))]
use tracing::trace;
use tracing::{debug, warn};

use crate::core::numeric::try_parse_number;
use crate::core::{ChartConfiguration, ChartKind, PIE_VALUE_KEY, ParsedTable, PlotPoint, Row};
use crate::error::{ChartError, ChartResult};

/// Projector output handed to the rendering collaborator.
///
/// `error` is set only for configuration errors; `points` is then empty.
/// Serializes as `{ "points": [...], "error": "..." | null }`.
#[derive(Debug, Default)]
pub struct ChartProjection {
    pub points: Vec<PlotPoint>,
    pub error: Option<ChartError>,
}

impl ChartProjection {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_result(self) -> ChartResult<Vec<PlotPoint>> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.points),
        }
    }
}

impl From<ChartResult<Vec<PlotPoint>>> for ChartProjection {
    fn from(result: ChartResult<Vec<PlotPoint>>) -> Self {
        match result {
            Ok(points) => Self {
                points,
                error: None,
            },
            Err(err) => Self {
                points: Vec::new(),
                error: Some(err),
            },
        }
    }
}

impl Serialize for ChartProjection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ChartProjection", 2)?;
        state.serialize_field("points", &self.points)?;
        state.serialize_field("error", &self.error.as_ref().map(ToString::to_string))?;
        state.end()
    }
}

/// Projects `table` into plot points for `config`, reporting configuration
/// errors inside the returned value.
#[must_use]
pub fn project_chart_data(table: &ParsedTable, config: &ChartConfiguration) -> ChartProjection {
    project_points(table, config).into()
}

/// Projects `table` rows into plot points for `config`.
///
/// - bar/line: `name` from the X-axis column, value keyed by the Y-axis header
/// - pie: `name` from the category column, value keyed by `"value"`
/// - other kinds: no points
///
/// Rows whose value cell does not coerce to a number are dropped. Output
/// order follows row order; duplicate labels are not merged.
///
/// # Errors
///
/// [`ChartError::MissingFields`] when either required field is unset or empty.
pub fn project_points(
    table: &ParsedTable,
    config: &ChartConfiguration,
) -> ChartResult<Vec<PlotPoint>> {
    let kind = config.kind();
    let Some((first, second)) = kind.required_fields() else {
        debug!(kind = %kind, "unsupported chart kind, nothing to project");
        return Ok(Vec::new());
    };

    let (Some(label_field), Some(value_field)) = (
        selected(config.primary_key()),
        selected(config.secondary_key()),
    ) else {
        warn!(kind = %kind, "chart field selection incomplete");
        return Err(ChartError::MissingFields {
            kind: kind.clone(),
            first,
            second,
        });
    };

    let output_key = match kind {
        ChartKind::Pie => PIE_VALUE_KEY,
        _ => value_field,
    };

    let points = project_rows(table.rows(), label_field, value_field, output_key);
    debug!(
        kind = %kind,
        rows = table.row_count(),
        points = points.len(),
        dropped = table.row_count() - points.len(),
        "projected chart data"
    );
    Ok(points)
}

fn selected(field: Option<&str>) -> Option<&str> {
    field.filter(|name| !name.is_empty())
}

fn project_rows(
    rows: &[Row],
    label_field: &str,
    value_field: &str,
    output_key: &str,
) -> Vec<PlotPoint> {
    #[cfg(feature = "parallel-projection")]
    {
        rows.par_iter()
            .filter_map(|row| project_row(row, label_field, value_field, output_key))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        rows.iter()
            .enumerate()
            .filter_map(|(index, row)| {
                let point = project_row(row, label_field, value_field, output_key);
                if point.is_none() {
                    trace!(row = index, field = value_field, "dropping non-numeric row");
                }
                point
            })
            .collect()
    }
}

fn project_row(
    row: &Row,
    label_field: &str,
    value_field: &str,
    output_key: &str,
) -> Option<PlotPoint> {
    let value = try_parse_number(row.get(value_field))?;
    let name = row.get(label_field).cloned().unwrap_or_default();
    Some(PlotPoint::new(name, output_key, value))
}
