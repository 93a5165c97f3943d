//! Metrics Table
//!
//! One row per metric definition, one cell per window. Values are rounded
//! for display with `rust_decimal`; raw `f64` results stay inside the
//! calculators.

use jhlj_core::{SeriesView, Window};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::definitions::{MetricDefinition, MetricDefinitions};
use crate::period_change::PeriodChangeCalculator;
use crate::rounding::{CHANGE_PRECISION, to_display};
use crate::trailing::TrailingAggregator;

/// Statistics of one metric over one window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCell {
    /// Window size in records
    pub window: Window,
    /// Trailing mean (0 when no data)
    pub trailing: Decimal,
    /// Period-over-period change in percent
    pub change: Option<Decimal>,
}

/// One metric across all reported windows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    pub name: String,
    pub field: String,
    pub cells: Vec<MetricCell>,
    pub highlighted: bool,
}

impl MetricRow {
    /// Compute a row for `definition` over every window
    pub fn compute(series: &SeriesView, definition: &MetricDefinition, windows: &[Window]) -> Self {
        let cells = windows
            .iter()
            .map(|&window| {
                let trailing = TrailingAggregator::trailing(series, &definition.field, window);
                let change =
                    PeriodChangeCalculator::period_change(series, &definition.field, window);
                MetricCell {
                    window,
                    trailing: to_display(trailing, definition.precision).unwrap_or(Decimal::ZERO),
                    change: change.and_then(|c| to_display(c, CHANGE_PRECISION)),
                }
            })
            .collect();

        Self {
            name: definition.name.clone(),
            field: definition.field.clone(),
            cells,
            highlighted: definition.highlighted,
        }
    }

    /// Cell for a given window
    pub fn cell(&self, window: Window) -> Option<&MetricCell> {
        self.cells.iter().find(|c| c.window == window)
    }
}

/// Table of metric rows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsTable {
    pub rows: Vec<MetricRow>,
}

impl MetricsTable {
    /// Build the table for every definition and window
    pub fn build(series: &SeriesView, definitions: &MetricDefinitions, windows: &[Window]) -> Self {
        let rows: Vec<MetricRow> = definitions
            .iter()
            .map(|def| MetricRow::compute(series, def, windows))
            .collect();

        log::debug!(
            "[Metrics] built {} rows x {} windows over {} records",
            rows.len(),
            windows.len(),
            series.len()
        );

        Self { rows }
    }

    /// Row by display name
    pub fn row(&self, name: &str) -> Option<&MetricRow> {
        self.rows.iter().find(|r| r.name == name)
    }

    /// The highlighted row, if any
    pub fn highlighted(&self) -> Option<&MetricRow> {
        self.rows.iter().find(|r| r.highlighted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use jhlj_core::DailyRecord;
    use rust_decimal_macros::dec;

    fn panel(days: usize) -> SeriesView {
        let newest = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let records = (0..days)
            .map(|i| {
                // Newer week at 110, older week at 100
                let price = if i < 7 { 110.0 } else { 100.0 };
                DailyRecord::new(newest - Duration::days(i as i64))
                    .with_field("avg_price", price)
                    .with_field("total_listings", 150.4)
                    .with_missing("sold_count")
            })
            .collect();
        SeriesView::new(records).unwrap()
    }

    #[test]
    fn test_standard_table() {
        let table = MetricsTable::build(&panel(14), &MetricDefinitions::standard(), &Window::STANDARD);
        assert_eq!(table.rows.len(), 4);

        let price = table.highlighted().unwrap();
        assert_eq!(price.name, "Avg Jacket Price");
        let week = price.cell(Window::WEEK).unwrap();
        assert_eq!(week.trailing, dec!(110));
        assert_eq!(week.change, Some(dec!(10)));

        // 14 records < 2 x 28: endpoints 110 vs 100
        let month = price.cell(Window::MONTH).unwrap();
        assert_eq!(month.trailing, dec!(105));
        assert_eq!(month.change, Some(dec!(10)));

        // Counts are rounded to whole numbers
        let listings = table.row("Daily Listings").unwrap();
        assert_eq!(listings.cell(Window::WEEK).unwrap().trailing, dec!(150));
        assert_eq!(listings.cell(Window::WEEK).unwrap().change, Some(dec!(0)));
    }

    #[test]
    fn test_missing_field_row_degrades() {
        let table = MetricsTable::build(&panel(14), &MetricDefinitions::standard(), &Window::STANDARD);
        let sold = table.row("Items Sold").unwrap();
        for cell in &sold.cells {
            assert_eq!(cell.trailing, Decimal::ZERO);
            assert_eq!(cell.change, None);
        }
        assert!(!sold.highlighted);
    }

    #[test]
    fn test_empty_series_table() {
        let table = MetricsTable::build(
            &SeriesView::empty(),
            &MetricDefinitions::standard(),
            &Window::STANDARD,
        );
        assert!(table.rows.iter().all(|r| r.cells.len() == 3));
        assert!(
            table
                .rows
                .iter()
                .flat_map(|r| &r.cells)
                .all(|c| c.trailing.is_zero() && c.change.is_none())
        );
    }
}
