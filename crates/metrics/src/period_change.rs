//! Period-over-Period Change
//!
//! Percentage change of a field between the current window and the window
//! immediately before it. Short histories cannot support a full
//! window-over-window comparison, so the calculation degrades:
//!
//! | Records (`len`)      | Regime            | Comparison                         |
//! |----------------------|-------------------|------------------------------------|
//! | `len < 2`            | Degenerate        | none                               |
//! | `2 <= len < 2N`      | PointToPoint      | latest vs. oldest present value    |
//! | `len >= 2N`          | WindowOverWindow  | mean `[0, N)` vs. mean `[N, 2N)`   |

use jhlj_core::{SeriesView, Window};
use serde::{Deserialize, Serialize};

use crate::trailing::TrailingAggregator;

/// Which comparison a series length supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeRegime {
    /// Fewer than two records
    Degenerate,
    /// Not enough records for two full windows
    PointToPoint,
    /// Two full adjacent windows
    WindowOverWindow,
}

impl ChangeRegime {
    /// Regime for a series of `len` records and the given window
    pub fn for_len(len: usize, window: Window) -> Self {
        if len < 2 {
            ChangeRegime::Degenerate
        } else if len / 2 >= window.size() {
            ChangeRegime::WindowOverWindow
        } else {
            ChangeRegime::PointToPoint
        }
    }
}

/// Collection of period-over-period calculations
pub struct PeriodChangeCalculator;

impl PeriodChangeCalculator {
    /// Percentage change of `field` over `window`.
    ///
    /// Returns `None` when the comparison is meaningless (fewer than two
    /// data points) or cannot be normalized (zero or missing denominator).
    pub fn period_change(series: &SeriesView, field: &str, window: Window) -> Option<f64> {
        match ChangeRegime::for_len(series.len(), window) {
            ChangeRegime::Degenerate => None,
            ChangeRegime::WindowOverWindow => Self::window_over_window(series, field, window),
            ChangeRegime::PointToPoint => Self::point_to_point(series, field),
        }
    }

    /// Mean of the current window against the mean of the prior window
    fn window_over_window(series: &SeriesView, field: &str, window: Window) -> Option<f64> {
        let n = window.size();
        let current = TrailingAggregator::window_mean(series.slice(0..n), field)?;
        let prior = TrailingAggregator::window_mean(series.slice(n..n.saturating_mul(2)), field)?;
        percent_change(current, prior)
    }

    /// Latest present value against the oldest present value in the whole
    /// series
    fn point_to_point(series: &SeriesView, field: &str) -> Option<f64> {
        let mut present = series.records().iter().filter_map(|r| r.get(field));
        let latest = present.next()?;
        let oldest = present.last()?;
        percent_change(latest, oldest)
    }
}

/// `(current - base) / base * 100`, `None` when `base` is zero
fn percent_change(current: f64, base: f64) -> Option<f64> {
    if base == 0.0 {
        return None;
    }
    Some((current - base) / base * 100.0)
}
