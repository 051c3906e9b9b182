//! Job-listing table tools.
//!
//! Three batch transforms that hand off through files:
//!   1. extract — markdown/HTML listing table -> normalized jobs CSV
//!   2. merge   — two CSVs -> one CSV, deduplicated on a key column
//!   3. classify — jobs CSV -> spreadsheet with one sheet per priority tier

pub mod classify;
pub mod error;
pub mod extract;
pub mod merge;
pub mod model;
pub mod settings;

pub use error::{Error, Result};
pub use model::JobRow;
