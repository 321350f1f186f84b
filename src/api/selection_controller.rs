use tracing::debug;

use crate::core::{ChartConfiguration, ChartKind};
use crate::error::{ChartError, ChartResult};
use crate::render::ChartRenderer;
use crate::suggestion::{ChartSuggestion, parse_suggestions};

use super::ChartWorkbench;

impl<R: ChartRenderer> ChartWorkbench<R> {
    /// Switches chart kind.
    ///
    /// The selection resets to the first two fields of the applied
    /// suggestion, or of the table headers when no suggestion is active.
    pub fn set_kind(&mut self, kind: ChartKind) {
        let fields = self
            .active_suggestion
            .as_ref()
            .map_or(self.table.headers(), |suggestion| suggestion.fields.as_slice());
        debug!(kind = %kind, fields = fields.len(), "switching chart kind");
        self.configuration = Some(ChartConfiguration::from_fields(kind, fields));
    }

    /// Sets the label and value fields for the current kind.
    ///
    /// Starts a bar chart when nothing is configured yet.
    pub fn set_fields(&mut self, primary: Option<String>, secondary: Option<String>) {
        let configuration = self
            .configuration
            .take()
            .unwrap_or_else(|| ChartConfiguration::new(ChartKind::Bar));
        self.configuration = Some(configuration.with_fields(primary, secondary));
    }

    /// Stores the suggestions received for the current table.
    pub fn set_suggestions(&mut self, suggestions: Vec<ChartSuggestion>) {
        self.suggestions = suggestions;
    }

    /// Decodes a suggestion-service answer and stores it; returns the count.
    ///
    /// # Errors
    ///
    /// [`ChartError::InvalidSuggestion`] when the answer cannot be decoded;
    /// previously stored suggestions are kept in that case.
    pub fn load_suggestions(&mut self, text: &str) -> ChartResult<usize> {
        self.suggestions = parse_suggestions(text)?;
        Ok(self.suggestions.len())
    }

    #[must_use]
    pub fn suggestions(&self) -> &[ChartSuggestion] {
        &self.suggestions
    }

    #[must_use]
    pub fn active_suggestion(&self) -> Option<&ChartSuggestion> {
        self.active_suggestion.as_ref()
    }

    pub fn apply_suggestion(&mut self, suggestion: ChartSuggestion) {
        debug!(
            chart_type = %suggestion.chart_type,
            fields = ?suggestion.fields,
            "applying chart suggestion"
        );
        self.configuration = Some(suggestion.to_configuration());
        self.active_suggestion = Some(suggestion);
    }

    /// Applies the stored suggestion at `index`.
    ///
    /// # Errors
    ///
    /// [`ChartError::InvalidSuggestion`] when `index` is out of range.
    pub fn apply_suggestion_at(&mut self, index: usize) -> ChartResult<()> {
        let suggestion = self.suggestions.get(index).cloned().ok_or_else(|| {
            ChartError::InvalidSuggestion(format!(
                "suggestion index {index} out of range ({} available)",
                self.suggestions.len()
            ))
        })?;
        self.apply_suggestion(suggestion);
        Ok(())
    }

    /// Drops the active suggestion; later kind switches use table headers.
    pub fn clear_active_suggestion(&mut self) {
        self.active_suggestion = None;
    }
}
