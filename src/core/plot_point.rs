use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Output key used by pie slices.
pub const PIE_VALUE_KEY: &str = "value";

const NAME_KEY: &str = "name";

/// One renderable datum.
///
/// Serializes as `{ "name": ..., "<value_key>": ... }`. Bar/line points use
/// the selected Y-axis header as `value_key` so renderers can show the
/// column label; pie slices always use `"value"`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotPoint {
    pub name: String,
    pub value_key: String,
    pub value: f64,
}

impl PlotPoint {
    #[must_use]
    pub fn new(name: impl Into<String>, value_key: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value_key: value_key.into(),
            value,
        }
    }

    #[must_use]
    pub fn slice(name: impl Into<String>, value: f64) -> Self {
        Self::new(name, PIE_VALUE_KEY, value)
    }

    /// Looks a value up by output key, the way a renderer addresses it.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<f64> {
        (key == self.value_key).then_some(self.value)
    }
}

impl Serialize for PlotPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // A value column literally named "name" overwrites the label.
        if self.value_key == NAME_KEY {
            let mut map = serializer.serialize_map(Some(1))?;
            map.serialize_entry(NAME_KEY, &self.value)?;
            return map.end();
        }

        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(NAME_KEY, &self.name)?;
        map.serialize_entry(&self.value_key, &self.value)?;
        map.end()
    }
}
