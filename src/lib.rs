//! chart-csv: CSV parsing and chart-data projection.
//!
//! Raw delimited text is parsed into a [`core::ParsedTable`], then projected
//! into bar/line/pie plot points for a [`core::ChartConfiguration`]. Both
//! steps are pure and never fail on degenerate input; the only reported
//! error is an incomplete field selection.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod suggestion;
pub mod telemetry;

pub use api::{ChartWorkbench, TableSummary};
pub use core::{
    ChartConfiguration, ChartKind, ChartProjection, ParsedTable, PlotPoint, parse_table,
    project_chart_data, try_parse_number,
};
pub use error::{ChartError, ChartResult};
