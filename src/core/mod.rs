pub mod configuration;
pub mod numeric;
pub mod plot_point;
pub mod projection;
pub mod table;

pub use configuration::{ChartConfiguration, ChartConfigurationWire, ChartKind};
pub use numeric::{CellInput, try_parse_number};
pub use plot_point::{PIE_VALUE_KEY, PlotPoint};
pub use projection::{ChartProjection, project_chart_data, project_points};
pub use table::{
    DEFAULT_DELIMITER, ParsedTable, Row, TableParserConfig, parse_table, parse_table_with,
};
