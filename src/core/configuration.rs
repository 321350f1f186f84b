use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ChartError, ChartResult};

/// Chart family requested by the user or by a suggestion.
///
/// Labels outside the three supported kinds are kept verbatim in `Other`
/// so suggestions can round-trip; the projector yields no points for them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
    Pie,
    Other(String),
}

impl ChartKind {
    /// Case-insensitive label lookup; never fails.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        match label.to_ascii_lowercase().as_str() {
            "bar" => Self::Bar,
            "line" => Self::Line,
            "pie" => Self::Pie,
            _ => Self::Other(label.to_owned()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Pie => "pie",
            Self::Other(label) => label,
        }
    }

    #[must_use]
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Human-facing names of the two fields this kind needs, `None` for
    /// unsupported kinds.
    #[must_use]
    pub fn required_fields(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Bar | Self::Line => Some(("X-axis", "Y-axis")),
            Self::Pie => Some(("category", "value")),
            Self::Other(_) => None,
        }
    }

    fn uses_axes(&self) -> bool {
        matches!(self, Self::Bar | Self::Line)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

impl Serialize for ChartKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ChartKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from_label(&label))
    }
}

/// Chart kind plus the two selected header names.
///
/// The selection is stored once as a primary/secondary pair and read back
/// under the names the current kind uses: X/Y axis for bar and line,
/// category/value for pie. Accessors for the other kind's pair return
/// `None`, so changing kind can never leave both pairs populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ChartConfigurationWire", into = "ChartConfigurationWire")]
pub struct ChartConfiguration {
    kind: ChartKind,
    primary: Option<String>,
    secondary: Option<String>,
}

impl ChartConfiguration {
    /// Configuration of `kind` with no fields selected.
    #[must_use]
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            primary: None,
            secondary: None,
        }
    }

    #[must_use]
    pub fn bar(x_axis_key: impl Into<String>, y_axis_key: impl Into<String>) -> Self {
        Self::new(ChartKind::Bar).with_fields(Some(x_axis_key.into()), Some(y_axis_key.into()))
    }

    #[must_use]
    pub fn line(x_axis_key: impl Into<String>, y_axis_key: impl Into<String>) -> Self {
        Self::new(ChartKind::Line).with_fields(Some(x_axis_key.into()), Some(y_axis_key.into()))
    }

    #[must_use]
    pub fn pie(category_key: impl Into<String>, value_key: impl Into<String>) -> Self {
        Self::new(ChartKind::Pie).with_fields(Some(category_key.into()), Some(value_key.into()))
    }

    /// Configuration of `kind` over the first two entries of `fields`.
    #[must_use]
    pub fn from_fields(kind: ChartKind, fields: &[String]) -> Self {
        Self::new(kind).with_kind_reset_fields(fields)
    }

    /// Initial configuration for a freshly loaded table: a bar chart over the
    /// first two headers. `None` when fewer than two headers exist.
    #[must_use]
    pub fn default_for_headers(headers: &[String]) -> Option<Self> {
        match headers {
            [first, second, ..] => Some(Self::bar(first.clone(), second.clone())),
            _ => None,
        }
    }

    #[must_use]
    pub fn with_fields(mut self, primary: Option<String>, secondary: Option<String>) -> Self {
        self.set_fields(primary, secondary);
        self
    }

    /// Switches kind and resets the selection to the first two `fields`
    /// (table headers, or the active suggestion's field list).
    #[must_use]
    pub fn with_kind_reset(mut self, kind: ChartKind, fields: &[String]) -> Self {
        self.kind = kind;
        self.with_kind_reset_fields(fields)
    }

    fn with_kind_reset_fields(mut self, fields: &[String]) -> Self {
        self.primary = fields.first().cloned();
        self.secondary = fields.get(1).cloned();
        self
    }

    pub fn set_fields(&mut self, primary: Option<String>, secondary: Option<String>) {
        self.primary = primary;
        self.secondary = secondary;
    }

    #[must_use]
    pub fn kind(&self) -> &ChartKind {
        &self.kind
    }

    /// Label field: X axis for bar/line, category for pie.
    #[must_use]
    pub fn primary_key(&self) -> Option<&str> {
        self.primary.as_deref()
    }

    /// Value field: Y axis for bar/line, value for pie.
    #[must_use]
    pub fn secondary_key(&self) -> Option<&str> {
        self.secondary.as_deref()
    }

    #[must_use]
    pub fn x_axis_key(&self) -> Option<&str> {
        self.axis_pair().and_then(|(x, _)| x)
    }

    #[must_use]
    pub fn y_axis_key(&self) -> Option<&str> {
        self.axis_pair().and_then(|(_, y)| y)
    }

    #[must_use]
    pub fn category_key(&self) -> Option<&str> {
        self.slice_pair().and_then(|(category, _)| category)
    }

    #[must_use]
    pub fn value_key(&self) -> Option<&str> {
        self.slice_pair().and_then(|(_, value)| value)
    }

    fn axis_pair(&self) -> Option<(Option<&str>, Option<&str>)> {
        self.kind
            .uses_axes()
            .then(|| (self.primary_key(), self.secondary_key()))
    }

    fn slice_pair(&self) -> Option<(Option<&str>, Option<&str>)> {
        (self.kind == ChartKind::Pie).then(|| (self.primary_key(), self.secondary_key()))
    }
}

/// Serialized shape shared with the rendering collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfigurationWire {
    pub kind: ChartKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_key: Option<String>,
}

impl From<ChartConfiguration> for ChartConfigurationWire {
    fn from(config: ChartConfiguration) -> Self {
        let ChartConfiguration {
            kind,
            primary,
            secondary,
        } = config;
        match kind {
            ChartKind::Pie => Self {
                kind,
                category_key: primary,
                value_key: secondary,
                ..Self::default()
            },
            _ => Self {
                kind,
                x_axis_key: primary,
                y_axis_key: secondary,
                ..Self::default()
            },
        }
    }
}

impl TryFrom<ChartConfigurationWire> for ChartConfiguration {
    type Error = ChartError;

    fn try_from(wire: ChartConfigurationWire) -> ChartResult<Self> {
        let has_axes = wire.x_axis_key.is_some() || wire.y_axis_key.is_some();
        let has_slices = wire.category_key.is_some() || wire.value_key.is_some();

        let (primary, secondary) = match wire.kind {
            ChartKind::Pie if has_axes => {
                return Err(ChartError::InvalidConfiguration(
                    "pie configuration must not set xAxisKey/yAxisKey".to_owned(),
                ));
            }
            ChartKind::Pie => (wire.category_key, wire.value_key),
            ChartKind::Bar | ChartKind::Line if has_slices => {
                return Err(ChartError::InvalidConfiguration(format!(
                    "{} configuration must not set categoryKey/valueKey",
                    wire.kind
                )));
            }
            ChartKind::Bar | ChartKind::Line => (wire.x_axis_key, wire.y_axis_key),
            ChartKind::Other(_) if has_axes && has_slices => {
                return Err(ChartError::InvalidConfiguration(format!(
                    "`{}` configuration sets both field pairs",
                    wire.kind
                )));
            }
            ChartKind::Other(_) if has_slices => (wire.category_key, wire.value_key),
            ChartKind::Other(_) => (wire.x_axis_key, wire.y_axis_key),
        };

        Ok(Self {
            kind: wire.kind,
            primary,
            secondary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_accessors_are_hidden_for_pie() {
        let config = ChartConfiguration::pie("c", "v");
        assert_eq!(config.category_key(), Some("c"));
        assert_eq!(config.x_axis_key(), None);
        assert_eq!(config.y_axis_key(), None);
    }

    #[test]
    fn wire_rejects_mixed_pairs() {
        let wire = ChartConfigurationWire {
            kind: ChartKind::Bar,
            x_axis_key: Some("a".to_owned()),
            value_key: Some("b".to_owned()),
            ..ChartConfigurationWire::default()
        };
        assert!(ChartConfiguration::try_from(wire).is_err());
    }
}
