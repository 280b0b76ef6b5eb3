//! Conversion pipeline for the weight exporter.
//!
//! Responsible for discovering and reading the JSON export files,
//! normalizing each measurement, and writing the date-sorted CSV report.

pub mod conversion;
pub mod reader;
pub mod transformer;
pub mod writer;

pub use conversion::convert_json_to_csv;
pub use weight_core as core;
