use axum::{
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use glide_core::export::CsvExport;
use serde_json::Value;

// Data files are rewritten out-of-band; clients must never reuse a response.
const NO_STORE: &str = "no-store";
const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

#[derive(Debug)]
pub enum Payload {
    Json(Value),
    Csv(CsvExport),
}

impl IntoResponse for Payload {
    fn into_response(self) -> Response {
        match self {
            Payload::Json(value) => ([(header::CACHE_CONTROL, NO_STORE)], Json(value)).into_response(),
            Payload::Csv(export) => {
                let disposition = format!("inline; filename=\"{}\"", export.filename);
                (
                    [
                        (header::CONTENT_TYPE, CSV_CONTENT_TYPE.to_string()),
                        (header::CONTENT_DISPOSITION, disposition),
                        (header::CACHE_CONTROL, NO_STORE.to_string()),
                    ],
                    export.body,
                )
                    .into_response()
            }
        }
    }
}
