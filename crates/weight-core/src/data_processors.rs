use chrono::NaiveDate;
use serde_json::Value;

use crate::error::{Result, WeightError};
use crate::formatting::format_fixed;

/// Date layout used by the fitness-tracker export.
pub const EXPORT_DATE_FORMAT: &str = "%m/%d/%y";

/// Date layout written to the CSV report.
pub const REPORT_DATE_FORMAT: &str = "%d-%m-%Y";

// ── DateProcessor ─────────────────────────────────────────────────────────────

/// Converts between the export's `MM/DD/YY` dates and the report's
/// `DD-MM-YYYY` dates.
pub struct DateProcessor;

impl DateProcessor {
    /// Parse an export date strictly as `MM/DD/YY`.
    ///
    /// Month and day take one or two digits, the year exactly two; no
    /// whitespace is allowed anywhere. Two-digit years follow chrono's `%y`
    /// rule: `00`–`69` map to 2000–2069 and `70`–`99` map to 1970–1999.
    /// Non-existent days such as `02/30/23` are rejected.
    pub fn parse_export_date(raw: &str) -> Result<NaiveDate> {
        if !Self::has_export_shape(raw) {
            return Err(WeightError::InvalidDate(raw.to_string()));
        }
        NaiveDate::parse_from_str(raw, EXPORT_DATE_FORMAT)
            .map_err(|_| WeightError::InvalidDate(raw.to_string()))
    }

    /// Render a date as `DD-MM-YYYY`.
    pub fn format_report_date(date: NaiveDate) -> String {
        date.format(REPORT_DATE_FORMAT).to_string()
    }

    // chrono's numeric fields skip leading spaces and accept a one-digit
    // `%y`, so the layout is checked up front.
    fn has_export_shape(raw: &str) -> bool {
        let parts: Vec<&str> = raw.split('/').collect();
        let digits = |part: &str, min: usize, max: usize| {
            (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
        };
        parts.len() == 3
            && digits(parts[0], 1, 2)
            && digits(parts[1], 1, 2)
            && digits(parts[2], 2, 2)
    }
}

// ── MeasurementExtractor ──────────────────────────────────────────────────────

/// Reads the numeric fields of a raw export entry.
pub struct MeasurementExtractor;

impl MeasurementExtractor {
    /// Read `weight` in pounds. Absent or `null` means `0`; anything that is
    /// not a JSON number is rejected.
    pub fn weight(entry: &Value) -> Result<f64> {
        match entry.get("weight") {
            None | Some(Value::Null) => Ok(0.0),
            Some(Value::Number(n)) => n.as_f64().ok_or_else(|| WeightError::InvalidField {
                field: "weight",
                value: n.to_string(),
            }),
            Some(other) => Err(WeightError::InvalidField {
                field: "weight",
                value: other.to_string(),
            }),
        }
    }

    /// Read an optional measurement such as `bmi` or `fat` and format it with
    /// `decimals` fraction digits.
    ///
    /// Falsy values (see [`is_falsy`]) produce the literal `"0"`. Numbers and
    /// numeric strings are formatted; other values, including `"nan"` and
    /// `"inf"`, are rejected.
    pub fn optional_measure(entry: &Value, field: &'static str, decimals: usize) -> Result<String> {
        let Some(value) = entry.get(field) else {
            return Ok("0".to_string());
        };
        if is_falsy(value) {
            return Ok("0".to_string());
        }
        let number = Self::as_number(value)
            .filter(|n| n.is_finite())
            .ok_or_else(|| WeightError::InvalidField {
                field,
                value: value.to_string(),
            })?;
        Ok(format_fixed(number, decimals))
    }

    fn as_number(value: &Value) -> Option<f64> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            Value::Bool(true) => Some(1.0),
            _ => None,
        }
    }
}

/// Returns `true` for values the export uses to mean "no measurement":
/// `null`, `false`, zero, the empty string, and empty arrays or objects.
///
/// The string `"0"` is not falsy.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map(|f| f == 0.0).unwrap_or(false),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
