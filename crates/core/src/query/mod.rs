pub mod filter;
pub mod flatten;

pub use filter::RecordFilter;
pub use flatten::{flatten_predictions, flatten_rows};
