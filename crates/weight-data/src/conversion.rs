//! Top-level conversion pipeline.
//!
//! Scans the input directory, extracts every export file, merges the records
//! and writes the sorted CSV report, returning a [`ConversionSummary`].

use tracing::{info, warn};
use weight_core::error::Result;
use weight_core::models::{ConversionConfig, ConversionSummary, NormalizedRecord};

use crate::reader::{find_json_files, process_single_file, FileOutcome};
use crate::writer::write_csv;

/// Run the full conversion described by `config`.
///
/// 1. List `.json` files in the input directory (fatal if it is missing).
/// 2. Extract each file; a failed file contributes no records.
/// 3. Sort all records by date and write the report (fatal on write errors).
pub fn convert_json_to_csv(config: &ConversionConfig) -> Result<ConversionSummary> {
    let unit = config.unit();

    // ── Step 1: Discover exports ──────────────────────────────────────────────
    let files = find_json_files(&config.input_dir)?;
    if files.is_empty() {
        warn!("No JSON files found in {}", config.input_dir.display());
    }

    let mut summary = ConversionSummary {
        files_found: files.len(),
        files_converted: 0,
        files_failed: 0,
        entries_skipped: 0,
        entries_rejected: 0,
        records_written: 0,
        output_path: config.output_path.clone(),
        unit,
    };

    // ── Step 2: Extract ───────────────────────────────────────────────────────
    let mut all_records: Vec<NormalizedRecord> = Vec::new();
    for file_path in &files {
        match process_single_file(file_path, config.convert_to_kg) {
            FileOutcome::Converted(extracted) => {
                summary.files_converted += 1;
                summary.entries_skipped += extracted.skipped;
                summary.entries_rejected += extracted.rejected();
                all_records.extend(extracted.records);
            }
            FileOutcome::Failed { .. } => {
                summary.files_failed += 1;
            }
        }
    }

    // ── Step 3: Sort and write ────────────────────────────────────────────────
    write_csv(&config.output_path, &mut all_records)?;
    summary.records_written = all_records.len();

    info!(
        "Converted {} of {} files ({} failed): {} records in {} written to {}",
        summary.files_converted,
        summary.files_found,
        summary.files_failed,
        summary.records_written,
        unit,
        config.output_path.display(),
    );

    Ok(summary)
}
