// src/process/mod.rs
pub mod convert;
pub mod csv_processor;
pub mod date_parser;
pub mod raw_table;
pub mod row;
pub mod trimming;
pub mod utils;

pub use csv_processor::{load_records, parse_export};
pub use raw_table::RawRow;
pub use row::normalize_row;
