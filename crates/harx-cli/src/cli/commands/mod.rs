//! CLI operation handlers. Each operation is in its own file.

mod csv;
mod extract;
mod list;

pub use csv::run_csv;
pub use extract::run_extract;
pub use list::run_list;
