use serde_json::Value;
use std::collections::BTreeSet;

use crate::domain::{value_text, Record, Row};

// Served in place of an empty table so clients always get a parseable header.
const EMPTY_COLUMN: &str = "message";
const EMPTY_MESSAGE: &str = "no data";

const LINE_END: &str = "\r\n";

/// A rendered CSV body plus the filename hint sent with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub body: String,
}

impl CsvExport {
    pub fn new(rows: &[Row], filename: String) -> Self {
        Self {
            filename,
            body: render_csv(rows),
        }
    }
}

/// Keep the JSON objects of a record list; anything else has no columns.
pub fn object_rows(records: Vec<Record>) -> Vec<Row> {
    records
        .into_iter()
        .filter_map(|r| match r {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .collect()
}

/// Render rows with the sorted union of their keys as the header.
pub fn render_csv(rows: &[Row]) -> String {
    let columns: BTreeSet<&str> = rows
        .iter()
        .flat_map(|row| row.keys().map(String::as_str))
        .collect();

    let mut out = String::new();
    if columns.is_empty() {
        push_line(&mut out, [EMPTY_COLUMN]);
        push_line(&mut out, [EMPTY_MESSAGE]);
        return out;
    }

    push_line(&mut out, columns.iter().copied());
    for row in rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|col| row.get(*col).map(|v| value_text(v).into_owned()).unwrap_or_default())
            .collect();
        push_line(&mut out, cells.iter().map(String::as_str));
    }
    out
}

/// `<base>[_<game>][_<date>].csv`. Spaces, quotes and anything outside
/// printable ASCII become underscores so the name is safe in a header.
pub fn csv_filename(base: &str, game: Option<&str>, date: Option<&str>) -> String {
    let mut name = base.to_string();
    for part in [game, date].into_iter().flatten() {
        if part.is_empty() {
            continue;
        }
        name.push('_');
        name.push_str(part);
    }
    name.push_str(".csv");
    name.chars()
        .map(|c| if c.is_ascii_graphic() && c != '"' { c } else { '_' })
        .collect()
}

fn push_line<'a>(out: &mut String, cells: impl IntoIterator<Item = &'a str>) {
    for (i, cell) in cells.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_cell(out, cell);
    }
    out.push_str(LINE_END);
}

fn push_cell(out: &mut String, cell: &str) {
    if cell.contains(&[',', '"', '\r', '\n'][..]) {
        out.push('"');
        out.push_str(&cell.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(cell);
    }
}
