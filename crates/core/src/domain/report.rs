use serde_json::{json, Value};

use super::prediction::REPORT_DATA_KEY;
use super::Record;

const BACKTEST_ROW_KEYS: [&str; 2] = ["results", "hit_data"];

/// Normalize a loaded report document to `{"report_data": [...]}`.
///
/// Missing documents and objects without a `report_data` array get an empty
/// list. Other keys of an object document are kept.
pub fn normalize_envelope(document: Option<Value>) -> Value {
    match document {
        Some(Value::Array(items)) => json!({ REPORT_DATA_KEY: items }),
        Some(Value::Object(mut map)) => {
            if !matches!(map.get(REPORT_DATA_KEY), Some(Value::Array(_))) {
                map.insert(REPORT_DATA_KEY.to_string(), Value::Array(Vec::new()));
            }
            Value::Object(map)
        }
        _ => json!({ REPORT_DATA_KEY: [] }),
    }
}

/// Rows of a normalized envelope.
pub fn report_rows(envelope: &Value) -> Vec<Record> {
    envelope
        .get(REPORT_DATA_KEY)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

/// Tabular part of a backtest document: `results`, else `hit_data`.
pub fn backtest_rows(document: &Value) -> Vec<Record> {
    BACKTEST_ROW_KEYS
        .iter()
        .find_map(|key| document.get(*key).and_then(Value::as_array))
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_bare_array() {
        let env = normalize_envelope(Some(json!([{"game": "Pick 3"}])));
        assert_eq!(env, json!({"report_data": [{"game": "Pick 3"}]}));
    }

    #[test]
    fn missing_document_is_empty_envelope() {
        assert_eq!(normalize_envelope(None), json!({"report_data": []}));
    }

    #[test]
    fn object_without_key_gets_empty_list_and_keeps_other_keys() {
        let env = normalize_envelope(Some(json!({"week": "2024-07-01"})));
        assert_eq!(env, json!({"week": "2024-07-01", "report_data": []}));

        let env = normalize_envelope(Some(json!({"report_data": "broken"})));
        assert_eq!(env, json!({"report_data": []}));
    }

    #[test]
    fn scalar_document_is_empty_envelope() {
        assert_eq!(normalize_envelope(Some(json!(3))), json!({"report_data": []}));
    }

    #[test]
    fn backtest_rows_prefers_results() {
        let doc = json!({"results": [{"a": 1}], "hit_data": [{"b": 2}, {"b": 3}]});
        assert_eq!(backtest_rows(&doc), vec![json!({"a": 1})]);

        let doc = json!({"hit_data": [{"b": 2}]});
        assert_eq!(backtest_rows(&doc), vec![json!({"b": 2})]);

        assert!(backtest_rows(&json!({})).is_empty());
    }
}
