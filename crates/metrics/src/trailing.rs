//! Trailing averages
//!
//! Stateless calculations over the most recent records of a series.

use jhlj_core::{DailyRecord, SeriesView, Window};

/// Collection of trailing-window calculations
pub struct TrailingAggregator;

impl TrailingAggregator {
    /// Mean of `field` over the most recent `window` records.
    ///
    /// Missing values are skipped. When the window holds no present value
    /// (empty series, zero window, or every value missing) the result is
    /// `0.0` so that a display always has a number to show.
    pub fn trailing(series: &SeriesView, field: &str, window: Window) -> f64 {
        Self::window_mean(series.window(window), field).unwrap_or(0.0)
    }

    /// Mean of the present values of `field` in `records`, `None` if there
    /// are none
    pub fn window_mean(records: &[DailyRecord], field: &str) -> Option<f64> {
        let (sum, count) = records
            .iter()
            .filter_map(|r| r.get(field))
            .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

        if count == 0 {
            return None;
        }
        Some(sum / count as f64)
    }
}
