//! Turns one parsed export entry into a [`NormalizedRecord`].

use chrono::NaiveDate;
use serde_json::Value;
use weight_core::data_processors::MeasurementExtractor;
use weight_core::error::Result;
use weight_core::formatting::format_weight;
use weight_core::models::{NormalizedRecord, WeightUnit};

/// Applies unit conversion and field formatting.
#[derive(Debug, Clone, Copy)]
pub struct RecordTransformer {
    unit: WeightUnit,
}

impl RecordTransformer {
    pub fn new(convert_to_kg: bool) -> Self {
        Self {
            unit: WeightUnit::from_conversion_flag(convert_to_kg),
        }
    }

    /// Build the normalized record for an entry whose date has already been
    /// parsed.
    ///
    /// Errors from `weight`, `bmi` or `fat` are file-level: the caller drops
    /// the whole file.
    pub fn transform(&self, date: NaiveDate, entry: &Value) -> Result<NormalizedRecord> {
        let pounds = MeasurementExtractor::weight(entry)?;
        let weight = format_weight(self.unit.convert_pounds(pounds));
        let bmi = MeasurementExtractor::optional_measure(entry, "bmi", 2)?;
        let fat = MeasurementExtractor::optional_measure(entry, "fat", 0)?;

        Ok(NormalizedRecord {
            date,
            weight,
            bmi,
            fat,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use weight_core::error::WeightError;

    fn jan_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, 15).unwrap()
    }

    #[test]
    fn test_transform_converts_to_kg() {
        let entry = json!({"date": "01/15/23", "weight": 150, "bmi": "22.5", "fat": "20"});
        let record = RecordTransformer::new(true).transform(jan_15(), &entry).unwrap();
        assert_eq!(record.to_row(), ["15-01-2023", "68.04", "22.50", "20"]);
    }

    #[test]
    fn test_transform_keeps_pounds() {
        let entry = json!({"weight": 150, "bmi": 22.5, "fat": 20});
        let record = RecordTransformer::new(false).transform(jan_15(), &entry).unwrap();
        assert_eq!(record.weight, "150.00");
        assert_eq!(record.bmi, "22.50");
        assert_eq!(record.fat, "20");
    }

    #[test]
    fn test_transform_kg_matches_scaled_pounds() {
        let entry = json!({"weight": 181.3});
        let lbs = RecordTransformer::new(false).transform(jan_15(), &entry).unwrap();
        let kg = RecordTransformer::new(true).transform(jan_15(), &entry).unwrap();

        let lbs_value: f64 = lbs.weight.parse().unwrap();
        let expected = format!("{:.2}", lbs_value * weight_core::LBS_TO_KG);
        assert_eq!(kg.weight, expected);
    }

    #[test]
    fn test_transform_missing_fields_use_defaults() {
        let entry = json!({"date": "01/15/23"});
        let record = RecordTransformer::new(true).transform(jan_15(), &entry).unwrap();
        assert_eq!(record.weight, "0.00");
        assert_eq!(record.bmi, "0");
        assert_eq!(record.fat, "0");
    }

    #[test]
    fn test_transform_bad_bmi_is_error() {
        let entry = json!({"weight": 150, "bmi": "n/a"});
        let err = RecordTransformer::new(false).transform(jan_15(), &entry).unwrap_err();
        assert!(matches!(err, WeightError::InvalidField { field: "bmi", .. }));
    }
}
