//! Change History
//!
//! Chart series: for every record, the percentage change of the tracked
//! field against the next older record, plus raw values of selected fields.
//! Points are emitted oldest first.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use jhlj_core::{DailyRecord, SeriesView};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rounding::{CHANGE_PRECISION, to_display};

/// One chart point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub date: NaiveDate,
    /// Change of the tracked field versus the previous (older) record
    pub change_pct: Option<Decimal>,
    /// Raw values of the chart fields (`None` = not observed)
    pub values: BTreeMap<String, Option<f64>>,
}

/// Builder for chart history
pub struct ChangeHistory;

impl ChangeHistory {
    /// Build chart points for `tracked`, carrying `chart_fields` through
    pub fn build(series: &SeriesView, tracked: &str, chart_fields: &[String]) -> Vec<HistoryPoint> {
        let records = series.records();
        let mut points: Vec<HistoryPoint> = records
            .iter()
            .enumerate()
            .map(|(i, record)| HistoryPoint {
                date: record.date,
                change_pct: day_change(record, records.get(i + 1), tracked),
                values: chart_fields
                    .iter()
                    .map(|f| (f.clone(), record.get(f)))
                    .collect(),
            })
            .collect();

        points.reverse();
        points
    }
}

fn day_change(record: &DailyRecord, older: Option<&DailyRecord>, field: &str) -> Option<Decimal> {
    let current = record.get(field)?;
    let previous = older?.get(field)?;
    if previous == 0.0 {
        return None;
    }
    to_display((current - previous) / previous * 100.0, CHANGE_PRECISION)
}
