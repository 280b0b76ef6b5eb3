use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the weight exporter.
#[derive(Error, Debug)]
pub enum WeightError {
    /// The input directory does not exist.
    #[error("Input directory '{0}' not found.")]
    InputDirNotFound(PathBuf),

    /// The input directory exists but could not be listed.
    #[error("Failed to list directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON document could not be parsed.
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The JSON document parsed but does not have the expected layout.
    #[error("Unexpected JSON shape: {0}")]
    UnexpectedShape(String),

    /// A `weight`, `bmi` or `fat` value is neither falsy nor numeric.
    #[error("Invalid value for {field}: {value}")]
    InvalidField { field: &'static str, value: String },

    /// A date string did not match `MM/DD/YY` or names a non-existent day.
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    /// The output CSV could not be created or written.
    #[error("Failed to write output {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the weight crates.
pub type Result<T> = std::result::Result<T, WeightError>;
