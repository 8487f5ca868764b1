//! Table adapters - Reading uploaded decision tables and writing results.

mod csv_exporter;
mod csv_parser;

pub use csv_exporter::{CsvResultExporter, CSV_CONTENT_TYPE};
pub use csv_parser::CsvTableParser;
