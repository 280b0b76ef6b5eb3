use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::data_processors::DateProcessor;

/// Fixed pounds-to-kilograms factor.
pub const LBS_TO_KG: f64 = 0.453592;

/// Column names written on the unquoted header line, in output order.
pub const CSV_COLUMNS: [&str; 4] = ["Date", "Weight", "BMI", "Fat"];

/// Unit of the `Weight` column in the exported report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Values are copied from the export unchanged.
    Pounds,
    /// Values are multiplied by [`LBS_TO_KG`].
    Kilograms,
}

impl WeightUnit {
    /// Map the conversion flag to the unit it produces.
    pub fn from_conversion_flag(convert_to_kg: bool) -> Self {
        if convert_to_kg {
            WeightUnit::Kilograms
        } else {
            WeightUnit::Pounds
        }
    }

    /// Express a weight given in pounds in this unit.
    pub fn convert_pounds(self, pounds: f64) -> f64 {
        match self {
            WeightUnit::Pounds => pounds,
            WeightUnit::Kilograms => pounds * LBS_TO_KG,
        }
    }

    /// Short label used in log lines.
    pub fn abbreviation(self) -> &'static str {
        match self {
            WeightUnit::Pounds => "lbs",
            WeightUnit::Kilograms => "kg",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// One validated, formatted weight measurement ready for CSV emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    /// Calendar day of the measurement.
    pub date: NaiveDate,
    /// Weight with exactly two fraction digits.
    pub weight: String,
    /// BMI with two fraction digits, or `"0"` when the export had none.
    pub bmi: String,
    /// Body-fat percentage rounded to an integer, or `"0"`.
    pub fat: String,
}

impl NormalizedRecord {
    /// The date rendered as `DD-MM-YYYY`.
    pub fn date_label(&self) -> String {
        DateProcessor::format_report_date(self.date)
    }

    /// The four output fields in column order.
    pub fn to_row(&self) -> [String; 4] {
        [
            self.date_label(),
            self.weight.clone(),
            self.bmi.clone(),
            self.fat.clone(),
        ]
    }
}

/// Everything the pipeline needs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionConfig {
    /// Directory scanned (non-recursively) for `.json` exports.
    pub input_dir: PathBuf,
    /// Destination CSV file.
    pub output_path: PathBuf,
    /// Whether weights are converted from pounds to kilograms.
    pub convert_to_kg: bool,
}

impl ConversionConfig {
    pub fn new(
        input_dir: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        convert_to_kg: bool,
    ) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_path: output_path.into(),
            convert_to_kg,
        }
    }

    pub fn unit(&self) -> WeightUnit {
        WeightUnit::from_conversion_flag(self.convert_to_kg)
    }
}

/// Counters describing a finished run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    /// `.json` files found in the input directory.
    pub files_found: usize,
    /// Files whose records made it into the report.
    pub files_converted: usize,
    /// Files dropped entirely because of a file-level error.
    pub files_failed: usize,
    /// Entries ignored because their date was missing or empty.
    pub entries_skipped: usize,
    /// Entries dropped because their date could not be parsed.
    pub entries_rejected: usize,
    /// Data rows written to the CSV.
    pub records_written: usize,
    /// Where the report was written.
    pub output_path: PathBuf,
    /// Unit of the `Weight` column.
    pub unit: WeightUnit,
}
