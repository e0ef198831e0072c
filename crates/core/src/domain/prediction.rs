use serde::Serialize;
use serde_json::{json, Value};

use super::{Record, Row};

pub const PREDICTIONS_KEY: &str = "predictions";
pub const REPORT_DATA_KEY: &str = "report_data";

/// One prediction of a record, expanded with the record's scalar fields.
///
/// Every column is always present; values missing from the source stay `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatRow {
    pub date: Value,
    pub game: Value,
    pub hot: Value,
    pub mirror: Value,
    pub model_accuracy: Value,
    pub combo: Value,
    pub final_score: Value,
}

impl FlatRow {
    pub fn into_row(self) -> Row {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Row::new(),
        }
    }
}

/// Pull the record list out of a loaded document.
///
/// A bare array is the list itself. An object contributes its `predictions`
/// array, falling back to `report_data`. Anything else has no records.
pub fn extract_records(document: Value) -> Vec<Record> {
    match document {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            for key in [PREDICTIONS_KEY, REPORT_DATA_KEY] {
                if let Some(Value::Array(items)) = map.remove(key) {
                    return items;
                }
            }
            Vec::new()
        }
        _ => Vec::new(),
    }
}

/// Compact per-record summary served to the app's list view.
pub fn view_row(record: &Record) -> Value {
    let first = record
        .get(PREDICTIONS_KEY)
        .and_then(Value::as_array)
        .and_then(|p| p.first());

    json!({
        "game": field(record, "game"),
        "date": field(record, "date"),
        "hot_number": field(record, "hot_number"),
        "mirror_number": field(record, "mirror_number"),
        "model_accuracy": field(record, "model_accuracy"),
        "first_combo": first.map(|p| field(p, "combo")).unwrap_or(Value::Null),
        "top_score": first.map(|p| field(p, "final_score")).unwrap_or(Value::Null),
    })
}

pub(crate) fn field(value: &Value, key: &str) -> Value {
    value.get(key).cloned().unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_records_accepts_wrapped_and_bare_documents() {
        let wrapped = json!({"predictions": [{"game": "Pick 3"}]});
        assert_eq!(extract_records(wrapped).len(), 1);

        let bare = json!([{"game": "Pick 3"}, {"game": "Pick 4"}]);
        assert_eq!(extract_records(bare).len(), 2);

        let report = json!({"report_data": [{"game": "Pick 3"}]});
        assert_eq!(extract_records(report).len(), 1);
    }

    #[test]
    fn extract_records_ignores_unexpected_shapes() {
        assert!(extract_records(json!({"predictions": "nope"})).is_empty());
        assert!(extract_records(json!({"other": []})).is_empty());
        assert!(extract_records(json!(42)).is_empty());
    }

    #[test]
    fn view_row_uses_first_prediction() {
        let record = json!({
            "game": "Pick 3",
            "date": "2024-08-01",
            "hot_number": 7,
            "predictions": [
                {"combo": "123", "final_score": 0.9},
                {"combo": "456", "final_score": 0.5},
            ],
        });
        let view = view_row(&record);
        assert_eq!(view["first_combo"], json!("123"));
        assert_eq!(view["top_score"], json!(0.9));
        assert_eq!(view["mirror_number"], Value::Null);
    }

    #[test]
    fn view_row_without_predictions_has_null_combo() {
        let view = view_row(&json!({"game": "Pick 3"}));
        assert_eq!(view["first_combo"], Value::Null);
        assert_eq!(view["top_score"], Value::Null);
    }

    #[test]
    fn flat_row_keeps_all_columns() {
        let row = FlatRow {
            date: json!("2024-08-01"),
            game: json!("Pick 3"),
            hot: json!(7),
            mirror: Value::Null,
            model_accuracy: Value::Null,
            combo: json!("123"),
            final_score: json!(0.9),
        }
        .into_row();
        assert_eq!(row.len(), 7);
        assert_eq!(row["mirror"], Value::Null);
        assert_eq!(row["hot"], json!(7));
        assert_eq!(row["combo"], json!("123"));
    }
}
