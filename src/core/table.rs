use indexmap::IndexMap;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

/// One data row keyed by header name, in header order.
pub type Row = IndexMap<String, String>;

pub const DEFAULT_DELIMITER: char = ',';

/// Parser settings for delimited text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableParserConfig {
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

impl Default for TableParserConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl TableParserConfig {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}

fn default_delimiter() -> char {
    DEFAULT_DELIMITER
}

/// Header list plus ordered rows parsed from one input string.
///
/// Serializes as `{ "headers": [...], "rows": [...], "rowCount": n }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ParsedTable {
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl ParsedTable {
    #[must_use]
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self { headers, rows }
    }

    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// `true` when there is nothing to chart: no headers or no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() || self.rows.is_empty()
    }

    /// Cell values of one column in row order; `None` for rows lacking the key.
    pub fn column<'a>(&'a self, header: &'a str) -> impl Iterator<Item = Option<&'a str>> + 'a {
        self.rows
            .iter()
            .map(move |row| row.get(header).map(String::as_str))
    }
}

impl Serialize for ParsedTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ParsedTable", 3)?;
        state.serialize_field("headers", &self.headers)?;
        state.serialize_field("rows", &self.rows)?;
        state.serialize_field("rowCount", &self.row_count())?;
        state.end()
    }
}

/// Parses comma-delimited text with the default parser settings.
#[must_use]
pub fn parse_table(text: &str) -> ParsedTable {
    parse_table_with(text, TableParserConfig::default())
}

/// Parses delimited text into a [`ParsedTable`].
///
/// - the whole input is trimmed, then split on `\n` / `\r\n`
/// - the first line holds the headers; every field is trimmed
/// - whitespace-only lines are skipped
/// - short rows are padded with `""`, surplus fields are dropped
///
/// Splitting is naive: quotes are not interpreted, so a quoted field that
/// contains the delimiter is split like any other. Duplicate header names
/// keep the last column's value.
///
/// Never fails; empty input yields an empty table.
#[must_use]
pub fn parse_table_with(text: &str, config: TableParserConfig) -> ParsedTable {
    let mut lines = text.trim().lines();
    let Some(header_line) = lines.next() else {
        debug!("empty input, returning empty table");
        return ParsedTable::default();
    };

    let headers: Vec<String> = split_fields(header_line, config.delimiter)
        .map(str::to_owned)
        .collect();

    let rows: Vec<Row> = lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| build_row(&headers, line, config.delimiter))
        .collect();

    debug!(
        headers = headers.len(),
        rows = rows.len(),
        delimiter = %config.delimiter,
        "parsed table"
    );

    ParsedTable { headers, rows }
}

fn split_fields(line: &str, delimiter: char) -> impl Iterator<Item = &str> {
    line.split(delimiter).map(str::trim)
}

fn build_row(headers: &[String], line: &str, delimiter: char) -> Row {
    let mut values = split_fields(line, delimiter);
    let mut row = Row::with_capacity(headers.len());
    for header in headers {
        let value = values.next().unwrap_or_default();
        row.insert(header.clone(), value.to_owned());
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_row_pads_and_truncates() {
        let headers = vec!["a".to_owned(), "b".to_owned()];

        let short = build_row(&headers, "1", ',');
        assert_eq!(short.get("b").map(String::as_str), Some(""));

        let long = build_row(&headers, "1,2,3", ',');
        assert_eq!(long.len(), 2);
        assert_eq!(long.get("b").map(String::as_str), Some("2"));
    }

    #[test]
    fn duplicate_header_keeps_last_value_at_first_position() {
        let headers = vec!["x".to_owned(), "y".to_owned(), "x".to_owned()];
        let row = build_row(&headers, "1,2,3", ',');

        assert_eq!(row.len(), 2);
        assert_eq!(row.get_index(0), Some((&"x".to_owned(), &"3".to_owned())));
        assert_eq!(row.get("y").map(String::as_str), Some("2"));
    }
}
