//! Core types for the weight exporter.
//!
//! Holds the record model, the error enum, date and measurement parsing,
//! number formatting and the command-line settings shared by the data and
//! binary crates.

pub mod data_processors;
pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;

pub use error::{Result, WeightError};
pub use models::{ConversionConfig, ConversionSummary, NormalizedRecord, WeightUnit, LBS_TO_KG};
