use glide_core::domain::prediction::{extract_records, view_row};
use glide_core::domain::report::{backtest_rows, normalize_envelope, report_rows};
use glide_core::domain::Record;
use glide_core::export::{csv_filename, object_rows, CsvExport};
use glide_core::query::{flatten_rows, RecordFilter};
use glide_core::storage::{list_files, load_json, select_file, DataLayout};
use serde_json::{json, Value};
use std::path::PathBuf;

use crate::error::ApiError;
use crate::response::Payload;
use crate::routes::{route_paths, Endpoint, Params};

const SERVICE_MESSAGE: &str = "Glide Lottery API";

pub fn run(endpoint: Endpoint, layout: &DataLayout, params: &Params) -> Result<Payload, ApiError> {
    let game = params.game();
    let date = params.date();

    match endpoint {
        Endpoint::Health => Ok(Payload::Json(
            json!({"status": "ok", "message": SERVICE_MESSAGE}),
        )),
        Endpoint::Routes => Ok(Payload::Json(json!(route_paths()))),
        Endpoint::Predictions => {
            let records = load_predictions(layout, &RecordFilter::new(game, date))?;
            Ok(Payload::Json(Value::Array(records)))
        }
        Endpoint::PredictionsCsv => predictions_csv(layout, game, date),
        Endpoint::GameCsv(fixed) => predictions_csv(layout, Some(fixed), date),
        Endpoint::WeeklyReport => Ok(Payload::Json(weekly_report(layout)?)),
        Endpoint::WeeklyReportCsv => {
            let rows = RecordFilter::by_game(game).apply(report_rows(&weekly_report(layout)?));
            Ok(csv_payload(rows, csv_filename("weekly_report", game, None)))
        }
        Endpoint::HistoricalWeek => Ok(Payload::Json(historical_week(layout, date)?)),
        Endpoint::HistoricalCsv => {
            let envelope = historical_week(layout, date)?;
            let rows = RecordFilter::by_game(game).apply(report_rows(&envelope));
            Ok(csv_payload(rows, csv_filename("historical_report", game, date)))
        }
        Endpoint::Backtest => Ok(Payload::Json(backtest(layout)?)),
        Endpoint::BacktestCsv => {
            let rows = RecordFilter::by_game(game).apply(backtest_rows(&backtest(layout)?));
            Ok(csv_payload(rows, csv_filename("backtest", game, None)))
        }
        Endpoint::Archives => archives(layout, date),
        Endpoint::ArchivesCsv => archives_csv(layout, game, date),
        Endpoint::ViewPredictions => {
            let records = load_predictions(layout, &RecordFilter::new(game, date))?;
            let view: Vec<Value> = records.iter().map(view_row).collect();
            Ok(Payload::Json(json!({ "predictions": view })))
        }
    }
}

fn load_predictions(layout: &DataLayout, filter: &RecordFilter) -> anyhow::Result<Vec<Record>> {
    let records = load_json(&layout.predictions_file())?
        .map(extract_records)
        .unwrap_or_default();
    Ok(filter.apply(records))
}

fn predictions_csv(
    layout: &DataLayout,
    game: Option<&str>,
    date: Option<&str>,
) -> Result<Payload, ApiError> {
    let records = load_predictions(layout, &RecordFilter::new(game, date))?;
    let rows = flatten_rows(&records);
    let export = CsvExport::new(&rows, csv_filename("predictions", game, date));
    Ok(Payload::Csv(export))
}

fn weekly_report(layout: &DataLayout) -> anyhow::Result<Value> {
    Ok(normalize_envelope(load_json(&layout.weekly_report_file())?))
}

fn historical_week(layout: &DataLayout, date: Option<&str>) -> anyhow::Result<Value> {
    let document = match select_file(&layout.historical_dir(), date)? {
        Some(path) => load_json(&path)?,
        None => None,
    };
    Ok(normalize_envelope(document))
}

fn backtest(layout: &DataLayout) -> anyhow::Result<Value> {
    Ok(load_json(&layout.backtest_file())?.unwrap_or_else(|| json!({})))
}

fn archives(layout: &DataLayout, date: Option<&str>) -> Result<Payload, ApiError> {
    let dir = layout.archives_dir();
    let Some(date) = date else {
        return Ok(Payload::Json(json!({ "archives": list_files(&dir)? })));
    };

    let document = match select_file(&dir, Some(date))? {
        Some(path) => load_json(&path)?,
        None => None,
    };
    document
        .map(Payload::Json)
        .ok_or_else(|| ApiError::ArchiveNotFound {
            date: date.to_string(),
        })
}

fn archives_csv(
    layout: &DataLayout,
    game: Option<&str>,
    date: Option<&str>,
) -> Result<Payload, ApiError> {
    let dir = layout.archives_dir();
    let paths: Vec<PathBuf> = match date {
        Some(date) => select_file(&dir, Some(date))?.into_iter().collect(),
        None => list_files(&dir)?
            .into_iter()
            .map(|name| dir.join(name))
            .collect(),
    };

    let filter = RecordFilter::by_game(game);
    let mut records = Vec::new();
    for path in paths {
        if let Some(document) = load_json(&path)? {
            records.extend(filter.apply(extract_records(document)));
        }
    }

    let rows = flatten_rows(&records);
    let export = CsvExport::new(&rows, csv_filename("archives", game, date));
    Ok(Payload::Csv(export))
}

fn csv_payload(records: Vec<Record>, filename: String) -> Payload {
    Payload::Csv(CsvExport::new(&object_rows(records), filename))
}
