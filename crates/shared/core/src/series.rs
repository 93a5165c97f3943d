//! Series View
//!
//! A read-only, newest-first view over daily records. Index 0 is always the
//! most recent date. Calendar gaps are allowed: every windowed statistic
//! operates on available records, not on days.

use std::ops::Range;

use crate::entities::DailyRecord;
use crate::error::{Result, SeriesError};
use crate::values::{ReportDate, Window};

/// Validated, date-descending sequence of daily records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesView {
    records: Vec<DailyRecord>,
}

impl SeriesView {
    /// Build a view from records that are already newest-first.
    ///
    /// Fails if any record is not strictly older than its predecessor.
    pub fn new(records: Vec<DailyRecord>) -> Result<Self> {
        for (index, pair) in records.windows(2).enumerate() {
            let (previous, current) = (pair[0].date, pair[1].date);
            if current == previous {
                return Err(SeriesError::DuplicateDate(current));
            }
            if current > previous {
                return Err(SeriesError::OutOfOrder {
                    index: index + 1,
                    previous,
                    current,
                });
            }
        }
        Ok(Self { records })
    }

    /// Build a view from records in any order.
    ///
    /// Records are sorted newest-first; duplicate dates are still rejected.
    pub fn from_unsorted(mut records: Vec<DailyRecord>) -> Result<Self> {
        records.sort_by(|a, b| b.date.cmp(&a.date));
        Self::new(records)
    }

    /// A view with no records
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, newest first
    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    /// Most recent record
    pub fn latest(&self) -> Option<&DailyRecord> {
        self.records.first()
    }

    /// Date of the most recent record
    pub fn last_updated(&self) -> Option<ReportDate> {
        self.latest().map(|r| r.date)
    }

    /// The most recent `min(window, len)` records
    pub fn window(&self, window: Window) -> &[DailyRecord] {
        &self.records[..window.span(self.len())]
    }

    /// Records in `range`, clamped to the series bounds
    pub fn slice(&self, range: Range<usize>) -> &[DailyRecord] {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        &self.records[start..end]
    }

    /// Present values of `field`, newest first
    pub fn present_values(&self, field: &str) -> Vec<f64> {
        self.records.iter().filter_map(|r| r.get(field)).collect()
    }

    /// Aligned values for two fields, keeping only dates where both are
    /// present. Order is preserved (index 0 = most recent shared date).
    pub fn paired(&self, first: &str, second: &str) -> (Vec<f64>, Vec<f64>) {
        self.records
            .iter()
            .filter_map(|r| Some((r.get(first)?, r.get(second)?)))
            .unzip()
    }

    /// Copy of the view keeping only the newest `limit` records
    pub fn truncated(&self, limit: usize) -> Self {
        Self {
            records: self.records[..limit.min(self.len())].to_vec(),
        }
    }
}

impl TryFrom<Vec<DailyRecord>> for SeriesView {
    type Error = SeriesError;

    fn try_from(records: Vec<DailyRecord>) -> Result<Self> {
        Self::new(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn record(d: u32, price: Option<f64>, close: Option<f64>) -> DailyRecord {
        DailyRecord::new(day(d))
            .with_optional("avg_price", price)
            .with_optional("nvda_close", close)
    }

    #[test]
    fn test_accepts_descending_with_gaps() {
        let view = SeriesView::new(vec![
            record(10, Some(1.0), None),
            record(7, Some(2.0), None),
            record(1, None, None),
        ])
        .unwrap();

        assert_eq!(view.len(), 3);
        assert_eq!(view.last_updated(), Some(day(10)));
    }

    #[test]
    fn test_rejects_ascending() {
        let err = SeriesView::new(vec![record(1, None, None), record(2, None, None)]).unwrap_err();
        assert_eq!(
            err,
            SeriesError::OutOfOrder {
                index: 1,
                previous: day(1),
                current: day(2),
            }
        );
    }

    #[test]
    fn test_rejects_duplicates() {
        let err = SeriesView::from_unsorted(vec![
            record(4, None, None),
            record(2, None, None),
            record(4, Some(1.0), None),
        ])
        .unwrap_err();
        assert_eq!(err, SeriesError::DuplicateDate(day(4)));
    }

    #[test]
    fn test_from_unsorted_orders_newest_first() {
        let view = SeriesView::from_unsorted(vec![
            record(2, None, None),
            record(9, None, None),
            record(5, None, None),
        ])
        .unwrap();

        let dates: Vec<NaiveDate> = view.records().iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![day(9), day(5), day(2)]);
    }

    #[test]
    fn test_window_and_slice_clamp() {
        let view = SeriesView::new(vec![
            record(3, Some(1.0), None),
            record(2, Some(2.0), None),
            record(1, Some(3.0), None),
        ])
        .unwrap();

        assert_eq!(view.window(Window::WEEK).len(), 3);
        assert_eq!(view.window(Window::new(2)).len(), 2);
        assert!(view.window(Window::new(0)).is_empty());
        assert_eq!(view.slice(1..10).len(), 2);
        assert!(view.slice(5..10).is_empty());
        assert!(SeriesView::empty().window(Window::WEEK).is_empty());
    }

    #[test]
    fn test_paired_drops_partial_days() {
        let view = SeriesView::new(vec![
            record(5, Some(10.0), Some(100.0)),
            record(4, None, Some(101.0)),
            record(3, Some(12.0), None),
            record(2, Some(13.0), Some(103.0)),
        ])
        .unwrap();

        let (tracked, reference) = view.paired("avg_price", "nvda_close");
        assert_eq!(tracked, vec![10.0, 13.0]);
        assert_eq!(reference, vec![100.0, 103.0]);
        assert_eq!(view.present_values("avg_price"), vec![10.0, 12.0, 13.0]);
    }

    #[test]
    fn test_truncated_keeps_newest() {
        let view = SeriesView::new(vec![
            record(3, Some(1.0), None),
            record(2, Some(2.0), None),
            record(1, Some(3.0), None),
        ])
        .unwrap();

        let short = view.truncated(2);
        assert_eq!(short.len(), 2);
        assert_eq!(short.last_updated(), Some(day(3)));
        assert_eq!(view.truncated(10).len(), 3);
    }
}
