//! Chart suggestions produced by an external text-generation service.
//!
//! The service is prompted with the raw table text and answers with a list
//! of suggestions. This module only decodes that answer and turns a
//! suggestion into a [`ChartConfiguration`]; issuing the request is left to
//! the host application.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{ChartConfiguration, ChartKind};
use crate::error::{ChartError, ChartResult};

/// One suggested chart.
///
/// `fields` is in priority order: the first entry becomes the label field
/// (X axis or category), the second the value field (Y axis or value).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSuggestion {
    #[serde(alias = "type", alias = "chart_type")]
    pub chart_type: String,
    #[serde(default, alias = "columns")]
    pub fields: Vec<String>,
    #[serde(default, alias = "justification", alias = "reasoning")]
    pub reason: String,
}

impl ChartSuggestion {
    #[must_use]
    pub fn new(chart_type: impl Into<String>, fields: Vec<String>, reason: impl Into<String>) -> Self {
        Self {
            chart_type: chart_type.into(),
            fields,
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        ChartKind::from_label(&self.chart_type)
    }

    /// Maps the suggestion onto a configuration.
    ///
    /// With fewer than two fields the selection stays incomplete and the
    /// projector reports a missing-field error for it.
    #[must_use]
    pub fn to_configuration(&self) -> ChartConfiguration {
        if self.fields.len() < 2 {
            warn!(
                chart_type = %self.chart_type,
                fields = self.fields.len(),
                "suggestion names fewer than two fields"
            );
        }
        ChartConfiguration::from_fields(self.kind(), &self.fields)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SuggestionPayload {
    List(Vec<ChartSuggestion>),
    Wrapped { suggestions: Vec<ChartSuggestion> },
}

/// Decodes a suggestion-service answer.
///
/// Accepts a JSON array of suggestions or an object with a `suggestions`
/// array, optionally wrapped in a Markdown code fence.
///
/// # Errors
///
/// [`ChartError::InvalidSuggestion`] when the text holds neither shape.
pub fn parse_suggestions(text: &str) -> ChartResult<Vec<ChartSuggestion>> {
    let body = strip_code_fence(text);
    let payload: SuggestionPayload = serde_json::from_str(body)
        .map_err(|e| ChartError::InvalidSuggestion(format!("failed to decode suggestions: {e}")))?;

    let suggestions = match payload {
        SuggestionPayload::List(list) | SuggestionPayload::Wrapped { suggestions: list } => list,
    };
    debug!(count = suggestions.len(), "decoded chart suggestions");
    Ok(suggestions)
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string (`json`, ...) on the opening fence line.
    let rest = rest.split_once('\n').map_or("", |(_, body)| body);
    rest.trim_end()
        .strip_suffix("```")
        .unwrap_or(rest)
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_code_fence_handles_info_string() {
        let text = "```json\n[1, 2]\n```\n";
        assert_eq!(strip_code_fence(text), "[1, 2]");
    }

    #[test]
    fn strip_code_fence_leaves_plain_json() {
        assert_eq!(strip_code_fence("  {\"a\": 1} "), "{\"a\": 1}");
    }

    #[test]
    fn unterminated_fence_keeps_body() {
        assert_eq!(strip_code_fence("```\n[]"), "[]");
    }
}
