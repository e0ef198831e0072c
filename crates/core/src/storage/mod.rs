pub mod layout;
pub mod loader;
pub mod selector;

pub use layout::DataLayout;
pub use loader::load_json;
pub use selector::{list_files, select_file};
