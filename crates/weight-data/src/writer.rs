//! CSV report emission.
//!
//! The report starts with a literal `Body` line and an unquoted header,
//! followed by one fully quoted row per record:
//!
//! ```text
//! Body
//! Date,Weight,BMI,Fat
//! "15-01-2023","68.04","22.50","20"
//! ```
//!
//! The two preamble lines end in `\n`; data rows use the CSV `\r\n`
//! terminator.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::debug;
use weight_core::error::{Result, WeightError};
use weight_core::models::{NormalizedRecord, CSV_COLUMNS};

/// First line of every report.
pub const PREAMBLE: &str = "Body";

/// Sort records by calendar date, oldest first.
///
/// The sort is stable: records sharing a date keep their input order.
pub fn sort_records(records: &mut [NormalizedRecord]) {
    records.sort_by_key(|r| r.date);
}

/// Write the report for `records`, in the given order, to `sink`.
pub fn write_report<W: Write>(sink: W, records: &[NormalizedRecord]) -> Result<()> {
    write_rows(sink, records)?;
    Ok(())
}

/// Sort `records` in place and write them to a new file at `output_path`.
///
/// Any failure to create or write the file is fatal for the run and is
/// returned as [`WeightError::OutputWrite`].
pub fn write_csv(output_path: &Path, records: &mut [NormalizedRecord]) -> Result<()> {
    sort_records(records);

    let to_output_error = |source: std::io::Error| WeightError::OutputWrite {
        path: output_path.to_path_buf(),
        source,
    };

    let file = File::create(output_path).map_err(to_output_error)?;
    write_report(BufWriter::new(file), records).map_err(|e| match e {
        WeightError::Io(source) => to_output_error(source),
        other => other,
    })?;

    debug!("Wrote {} rows to {}", records.len(), output_path.display());
    Ok(())
}

fn write_rows<W: Write>(mut sink: W, records: &[NormalizedRecord]) -> std::io::Result<()> {
    writeln!(sink, "{}", PREAMBLE)?;
    writeln!(sink, "{}", CSV_COLUMNS.join(","))?;

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::CRLF)
        .from_writer(sink);

    for record in records {
        writer.write_record(record.to_row())?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn record(y: i32, m: u32, d: u32, weight: &str) -> NormalizedRecord {
        NormalizedRecord {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            weight: weight.to_string(),
            bmi: "0".to_string(),
            fat: "0".to_string(),
        }
    }

    fn render(records: &[NormalizedRecord]) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, records).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_report_layout() {
        let records = vec![NormalizedRecord {
            date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            weight: "68.04".to_string(),
            bmi: "22.50".to_string(),
            fat: "20".to_string(),
        }];
        assert_eq!(
            render(&records),
            "Body\nDate,Weight,BMI,Fat\n\"15-01-2023\",\"68.04\",\"22.50\",\"20\"\r\n"
        );
    }

    #[test]
    fn test_write_report_empty() {
        assert_eq!(render(&[]), "Body\nDate,Weight,BMI,Fat\n");
    }

    #[test]
    fn test_sort_records_by_date() {
        let mut records = vec![
            record(2023, 1, 3, "1.00"),
            record(2022, 12, 31, "2.00"),
            record(2023, 1, 1, "3.00"),
        ];
        sort_records(&mut records);
        let labels: Vec<String> = records.iter().map(|r| r.date_label()).collect();
        assert_eq!(labels, vec!["31-12-2022", "01-01-2023", "03-01-2023"]);
    }

    #[test]
    fn test_sort_records_is_stable() {
        let mut records = vec![
            record(2023, 1, 2, "first"),
            record(2023, 1, 1, "other"),
            record(2023, 1, 2, "second"),
            record(2023, 1, 2, "third"),
        ];
        sort_records(&mut records);
        let weights: Vec<&str> = records.iter().map(|r| r.weight.as_str()).collect();
        assert_eq!(weights, vec!["other", "first", "second", "third"]);
    }

    #[test]
    fn test_sort_records_compares_calendar_not_label() {
        // "01-02-2023" sorts before "15-01-2023" as text but not as a date.
        let mut records = vec![record(2023, 2, 1, "feb"), record(2023, 1, 15, "jan")];
        sort_records(&mut records);
        assert_eq!(records[0].weight, "jan");
    }

    #[test]
    fn test_write_csv_sorts_and_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("weight_export.csv");
        let mut records = vec![record(2023, 1, 3, "151.00"), record(2023, 1, 1, "150.00")];

        write_csv(&path, &mut records).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.split_inclusive('\n').collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], "\"01-01-2023\",\"150.00\",\"0\",\"0\"\r\n");
        assert_eq!(lines[3], "\"03-01-2023\",\"151.00\",\"0\",\"0\"\r\n");
    }

    #[test]
    fn test_write_csv_unwritable_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-subdir").join("out.csv");
        let err = write_csv(&path, &mut []).unwrap_err();
        assert!(matches!(err, WeightError::OutputWrite { .. }));
    }
}
