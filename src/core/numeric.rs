/// Cell value handed to [`try_parse_number`].
///
/// Rows store every cell as text, but callers also feed absent lookups
/// (`row.get(key)` on a missing column) and already-numeric values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellInput<'a> {
    Missing,
    Number(f64),
    Text(&'a str),
}

impl<'a> From<&'a str> for CellInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for CellInput<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}

impl From<f64> for CellInput<'_> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl<'a, T> From<Option<T>> for CellInput<'a>
where
    T: Into<CellInput<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

/// Best-effort numeric coercion for spreadsheet-like cells.
///
/// Text keeps only ASCII digits, `.` and `-`, then the longest leading float
/// prefix is parsed. `"$1,234.56"` becomes `1234.56` and `"85%"` becomes
/// `85.0`. The heuristic is locale-naive: `"1,5"` reads as `15`.
///
/// Returns `None` for missing cells, NaN, and text with no parsable prefix.
#[must_use]
pub fn try_parse_number<'a>(value: impl Into<CellInput<'a>>) -> Option<f64> {
    match value.into() {
        CellInput::Missing => None,
        CellInput::Number(number) => (!number.is_nan()).then_some(number),
        CellInput::Text(text) => {
            let cleaned: String = text
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                .collect();
            parse_leading_float(&cleaned)
        }
    }
}

/// Parses `[-]digits[.digits]` from the start of `cleaned`, ignoring the rest.
///
/// `cleaned` must be ASCII-only.
fn parse_leading_float(cleaned: &str) -> Option<f64> {
    let bytes = cleaned.as_bytes();
    let mut end = usize::from(bytes.first() == Some(&b'-'));

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut digits = int_digits;
    if bytes.get(end) == Some(&b'.') {
        let frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
            digits += frac_digits;
        }
    }

    if digits == 0 {
        return None;
    }

    cleaned[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
