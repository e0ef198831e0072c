use serde_json::Value;

use crate::domain::prediction::{field, FlatRow, PREDICTIONS_KEY};
use crate::domain::{Record, Row};

/// Expand each record into one row per entry of its `predictions` list.
///
/// Records without a `predictions` array contribute nothing. Output follows
/// record order, then prediction order.
pub fn flatten_predictions(records: &[Record]) -> Vec<FlatRow> {
    let mut out = Vec::new();
    for record in records {
        let Some(predictions) = record.get(PREDICTIONS_KEY).and_then(Value::as_array) else {
            continue;
        };

        let date = field(record, "date");
        let game = field(record, "game");
        let hot = field(record, "hot_number");
        let mirror = field(record, "mirror_number");
        let model_accuracy = field(record, "model_accuracy");

        out.extend(predictions.iter().map(|p| FlatRow {
            date: date.clone(),
            game: game.clone(),
            hot: hot.clone(),
            mirror: mirror.clone(),
            model_accuracy: model_accuracy.clone(),
            combo: field(p, "combo"),
            final_score: field(p, "final_score"),
        }));
    }
    out
}

/// Flattened records as CSV-ready rows.
pub fn flatten_rows(records: &[Record]) -> Vec<Row> {
    flatten_predictions(records)
        .into_iter()
        .map(FlatRow::into_row)
        .collect()
}
