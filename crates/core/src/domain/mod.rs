pub mod prediction;
pub mod report;

use serde_json::{Map, Value};
use std::borrow::Cow;

/// A single JSON object loaded from a data file. Records stay untyped so that
/// keys we do not know about pass through the JSON endpoints untouched.
pub type Record = Value;

/// One CSV line, keyed by column name.
pub type Row = Map<String, Value>;

/// Text form of a JSON scalar as used for filtering and CSV cells.
///
/// Strings are taken verbatim, `null` becomes empty, everything else uses its
/// JSON text.
pub fn value_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(""),
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

/// Text of `record[key]`, or empty when the key is absent.
pub fn field_text<'a>(record: &'a Value, key: &str) -> Cow<'a, str> {
    record
        .get(key)
        .map(value_text)
        .unwrap_or(Cow::Borrowed(""))
}
