mod json_contract;
mod render_coordinator;
mod selection_controller;

pub use json_contract::{CHART_CONFIGURATION_JSON_SCHEMA_V1, ChartConfigurationJsonContractV1};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{ChartConfiguration, ParsedTable, TableParserConfig, parse_table_with};
use crate::render::ChartRenderer;
use crate::suggestion::ChartSuggestion;

/// Upload preview: what the user sees right after picking a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSummary {
    pub file_name: String,
    pub headers: Vec<String>,
    pub row_count: usize,
}

/// Explicit state of one "upload and chart" session.
///
/// Holds the parsed table, the current chart configuration and any
/// suggestions received for the table, and drives the renderer.
pub struct ChartWorkbench<R: ChartRenderer> {
    renderer: R,
    parser_config: TableParserConfig,
    file_name: String,
    table: ParsedTable,
    configuration: Option<ChartConfiguration>,
    suggestions: Vec<ChartSuggestion>,
    active_suggestion: Option<ChartSuggestion>,
}

impl<R: ChartRenderer> ChartWorkbench<R> {
    #[must_use]
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            parser_config: TableParserConfig::default(),
            file_name: String::new(),
            table: ParsedTable::default(),
            configuration: None,
            suggestions: Vec::new(),
            active_suggestion: None,
        }
    }

    #[must_use]
    pub fn with_parser_config(mut self, parser_config: TableParserConfig) -> Self {
        self.parser_config = parser_config;
        self
    }

    /// Replaces the table with freshly uploaded text.
    ///
    /// Suggestions for the previous table are discarded and the default
    /// configuration (bar over the first two headers) is applied.
    pub fn load(&mut self, file_name: impl Into<String>, text: &str) -> &ParsedTable {
        self.file_name = file_name.into();
        self.table = parse_table_with(text, self.parser_config);
        self.suggestions.clear();
        self.active_suggestion = None;
        self.configuration = ChartConfiguration::default_for_headers(self.table.headers());

        if self.table.is_empty() {
            debug!(file = %self.file_name, "uploaded file has no chartable rows");
        }
        info!(
            file = %self.file_name,
            headers = self.table.headers().len(),
            rows = self.table.row_count(),
            "loaded table"
        );
        &self.table
    }

    #[must_use]
    pub fn table(&self) -> &ParsedTable {
        &self.table
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn configuration(&self) -> Option<&ChartConfiguration> {
        self.configuration.as_ref()
    }

    #[must_use]
    pub fn summary(&self) -> TableSummary {
        TableSummary {
            file_name: self.file_name.clone(),
            headers: self.table.headers().to_vec(),
            row_count: self.table.row_count(),
        }
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
