//! JSON export discovery and loading.
//!
//! Each export file holds a JSON array of measurement objects. Files are read
//! one at a time and converted into [`NormalizedRecord`]s; a broken file is
//! reported and skipped without affecting the others.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};
use weight_core::data_processors::{is_falsy, DateProcessor};
use weight_core::error::{Result, WeightError};
use weight_core::models::NormalizedRecord;

use crate::transformer::RecordTransformer;

/// File-name suffix of the exports picked up from the input directory.
pub const EXPORT_SUFFIX: &str = ".json";

// ── Public types ──────────────────────────────────────────────────────────────

/// Records pulled from a single export file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFile {
    pub path: PathBuf,
    /// Normalized records in file order.
    pub records: Vec<NormalizedRecord>,
    /// Entries ignored because they had no date.
    pub skipped: usize,
    /// One message per entry dropped for an unparseable date.
    pub diagnostics: Vec<String>,
}

impl ExtractedFile {
    fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            records: Vec::new(),
            skipped: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Number of entries dropped for an unparseable date.
    pub fn rejected(&self) -> usize {
        self.diagnostics.len()
    }
}

/// Result of processing one export file.
#[derive(Debug)]
pub enum FileOutcome {
    /// The file was read; its records are ready for aggregation.
    Converted(ExtractedFile),
    /// The file was dropped as a whole.
    Failed { path: PathBuf, error: WeightError },
}

impl FileOutcome {
    /// Human-readable diagnostic for a failed file.
    pub fn failure_message(&self) -> Option<String> {
        match self {
            FileOutcome::Converted(_) => None,
            FileOutcome::Failed { path, error } => {
                Some(format!("Error processing {}: {}", path.display(), error))
            }
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// List the export files directly inside `input_dir`, sorted by path.
///
/// Only regular files whose name ends in `.json` are returned; the scan does
/// not descend into subdirectories. Only a failure to list `input_dir` itself
/// is an error: an entry that cannot be inspected (a dangling symlink, for
/// example) is logged and skipped.
pub fn find_json_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    if !input_dir.is_dir() {
        return Err(WeightError::InputDirNotFound(input_dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(input_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(WeightError::DirectoryRead {
                    path: input_dir.to_path_buf(),
                    source: e.into(),
                });
            }
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", input_dir.display(), e);
                continue;
            }
        };
        let is_export = entry.file_type().is_file()
            && entry.file_name().to_string_lossy().ends_with(EXPORT_SUFFIX);
        if is_export {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

/// Read one export file, never failing.
///
/// File-level problems are logged with the file name and returned as
/// [`FileOutcome::Failed`]; none of that file's records are kept.
pub fn process_single_file(file_path: &Path, convert_to_kg: bool) -> FileOutcome {
    match extract_file(file_path, convert_to_kg) {
        Ok(extracted) => {
            debug!(
                "File {}: {} records, {} skipped, {} rejected",
                file_path.display(),
                extracted.records.len(),
                extracted.skipped,
                extracted.rejected(),
            );
            FileOutcome::Converted(extracted)
        }
        Err(error) => {
            let outcome = FileOutcome::Failed {
                path: file_path.to_path_buf(),
                error,
            };
            if let Some(message) = outcome.failure_message() {
                warn!("{}", message);
            }
            outcome
        }
    }
}

/// Read and convert one export file.
///
/// Fails on an unreadable file, malformed JSON, a top level that is not an
/// array, an entry that is not an object, or a bad `weight`/`bmi`/`fat`
/// value. Entries without a date are skipped silently; entries with an
/// unparseable date are skipped with a diagnostic.
pub fn extract_file(file_path: &Path, convert_to_kg: bool) -> Result<ExtractedFile> {
    let content = std::fs::read_to_string(file_path).map_err(|source| WeightError::FileRead {
        path: file_path.to_path_buf(),
        source,
    })?;
    let data: Value = serde_json::from_str(&content)?;
    extract_entries(file_path, &data, convert_to_kg)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn extract_entries(file_path: &Path, data: &Value, convert_to_kg: bool) -> Result<ExtractedFile> {
    let entries = data.as_array().ok_or_else(|| {
        WeightError::UnexpectedShape(format!("expected an array, found {}", json_kind(data)))
    })?;

    let transformer = RecordTransformer::new(convert_to_kg);
    let mut extracted = ExtractedFile::new(file_path);

    for (index, entry) in entries.iter().enumerate() {
        if !entry.is_object() {
            return Err(WeightError::UnexpectedShape(format!(
                "entry {} is {}, expected an object",
                index,
                json_kind(entry)
            )));
        }

        let raw_date = match entry.get("date") {
            Some(value) if !is_falsy(value) => value,
            _ => {
                debug!("Skipping entry {} in {}: no date", index, file_path.display());
                extracted.skipped += 1;
                continue;
            }
        };

        let parsed = match raw_date {
            Value::String(s) => DateProcessor::parse_export_date(s),
            other => Err(WeightError::InvalidDate(other.to_string())),
        };
        let date = match parsed {
            Ok(date) => date,
            Err(WeightError::InvalidDate(raw)) => {
                let message = format!("Invalid date format in {}: {}", file_path.display(), raw);
                warn!("{}", message);
                extracted.diagnostics.push(message);
                continue;
            }
            Err(other) => return Err(other),
        };

        extracted.records.push(transformer.transform(date, entry)?);
    }

    Ok(extracted)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
