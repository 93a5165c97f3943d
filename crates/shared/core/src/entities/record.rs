use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::values::{FieldName, ReportDate};

/// One day of observations
///
/// Fields are optional: a missing field (or an explicit `null`) means no
/// observation that day, which is distinct from an observed zero. Non-finite
/// values are never reported as present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Calendar day (unique key within a series)
    pub date: ReportDate,
    /// Named observations
    #[serde(flatten)]
    fields: BTreeMap<FieldName, Option<f64>>,
}

impl DailyRecord {
    /// Create a record with no observations
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            fields: BTreeMap::new(),
        }
    }

    /// Builder: record an observation
    pub fn with_field(mut self, name: impl Into<FieldName>, value: f64) -> Self {
        self.fields.insert(name.into(), Some(value));
        self
    }

    /// Builder: record an explicit gap for a field
    pub fn with_missing(mut self, name: impl Into<FieldName>) -> Self {
        self.fields.insert(name.into(), None);
        self
    }

    /// Builder: record an optional observation
    pub fn with_optional(mut self, name: impl Into<FieldName>, value: Option<f64>) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Observed value of a field, if present and finite
    pub fn get(&self, field: &str) -> Option<f64> {
        self.fields
            .get(field)
            .copied()
            .flatten()
            .filter(|v| v.is_finite())
    }

    /// Is the field observed on this day?
    pub fn has(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Names of every field carried by the record (present or not)
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn test_missing_is_not_zero() {
        let record = DailyRecord::new(day(1))
            .with_field("avg_price", 0.0)
            .with_missing("nvda_close");

        assert_eq!(record.get("avg_price"), Some(0.0));
        assert_eq!(record.get("nvda_close"), None);
        assert_eq!(record.get("sold_count"), None);
        assert!(record.has("avg_price"));
        assert!(!record.has("nvda_close"));
    }

    #[test]
    fn test_non_finite_treated_as_missing() {
        let record = DailyRecord::new(day(1))
            .with_field("a", f64::NAN)
            .with_field("b", f64::INFINITY);

        assert_eq!(record.get("a"), None);
        assert_eq!(record.get("b"), None);
    }

    #[test]
    fn test_deserialize_flat_row() {
        let json = r#"{
            "date": "2024-05-03",
            "avg_price": 485.25,
            "total_listings": 150,
            "nvda_close": null
        }"#;
        let record: DailyRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.date, day(3));
        assert_eq!(record.get("avg_price"), Some(485.25));
        assert_eq!(record.get("total_listings"), Some(150.0));
        assert_eq!(record.get("nvda_close"), None);
        assert_eq!(record.field_names().count(), 3);
    }

    #[test]
    fn test_serialize_round_trip_keeps_gaps() {
        let record = DailyRecord::new(day(2))
            .with_field("avg_price", 410.0)
            .with_optional("nvda_close", None);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2024-05-02");
        assert_eq!(json["avg_price"], 410.0);
        assert!(json["nvda_close"].is_null());
    }
}
