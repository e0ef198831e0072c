pub mod csv;

pub use self::csv::{csv_filename, object_rows, render_csv, CsvExport};
