//! Lag Correlation Analyzer
//!
//! Scans lag offsets `0..=max_lag` and keeps the one at which the tracked
//! series best explains the reference series.
//!
//! Both vectors are newest-first. At lag `L` the tracked values from `L`
//! records ago are paired with today's reference values:
//!
//! ```text
//! tracked:    t0  t1  t2  t3  t4 ...        tracked[L..]
//!                     │   │   │
//! reference:          r0  r1  r2 ...        reference[..n - L]
//! ```
//!
//! A high correlation at `L > 0` reads as "the tracked series leads the
//! reference by L records".

use jhlj_core::SeriesView;
use serde::{Deserialize, Serialize};

use crate::report::{CorrelationReport, LagScore};
use crate::stats::{correlation_p_value, pearson};

/// Configuration for the lag scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Largest lag scanned (inclusive), in records
    pub max_lag: usize,
    /// Paired observations required before any lag is scanned
    pub min_samples: usize,
    /// Pairs required at a single lag after shifting
    pub min_lag_samples: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_lag: 7,
            min_samples: 10,
            min_lag_samples: 5,
        }
    }
}

/// Lead-lag correlation analyzer
#[derive(Debug, Clone, Default)]
pub struct LagCorrelationAnalyzer {
    config: AnalyzerConfig,
}

impl LagCorrelationAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Scan `series` for the lag at which `tracked` best explains
    /// `reference`
    pub fn analyze(&self, series: &SeriesView, tracked: &str, reference: &str) -> CorrelationReport {
        self.analyze_with_max_lag(series, tracked, reference, self.config.max_lag)
    }

    /// Same as [`analyze`](Self::analyze) with a one-off maximum lag
    pub fn analyze_with_max_lag(
        &self,
        series: &SeriesView,
        tracked: &str,
        reference: &str,
        max_lag: usize,
    ) -> CorrelationReport {
        let (tracked_values, reference_values) = series.paired(tracked, reference);
        self.scan(&tracked_values, &reference_values, max_lag)
    }

    /// Scan already-aligned, newest-first vectors
    pub fn scan(&self, tracked: &[f64], reference: &[f64], max_lag: usize) -> CorrelationReport {
        let n = tracked.len().min(reference.len());
        if n < self.config.min_samples {
            log::debug!(
                "[LagScan] insufficient data: {} paired points, {} required",
                n,
                self.config.min_samples
            );
            return CorrelationReport::insufficient(n, self.config.min_samples);
        }

        // Lags at or beyond n leave nothing to pair
        let last_lag = max_lag.min(n.saturating_sub(1));
        let mut scan = Vec::with_capacity(last_lag + 1);
        let mut best: Option<LagScore> = None;

        for lag in 0..=last_lag {
            if lag >= n || n - lag < self.config.min_lag_samples {
                log::debug!("[LagScan] lag {} skipped: {} pairs", lag, n.saturating_sub(lag));
                continue;
            }

            let tracked_slice = &tracked[lag..n];
            let reference_slice = &reference[..n - lag];
            let samples = tracked_slice.len();

            // Undefined correlation (zero variance) ranks as no correlation
            let r = pearson(tracked_slice, reference_slice).unwrap_or(0.0);
            let score = LagScore {
                lag,
                r,
                p_value: correlation_p_value(r, samples),
                samples,
            };
            log::debug!(
                "[LagScan] lag={} r={:.4} p={:.4} n={}",
                lag,
                score.r,
                score.p_value,
                samples
            );

            // Highest r wins, not highest |r|; ties keep the shorter lag
            if best.is_none_or(|b| score.r > b.r) {
                best = Some(score);
            }
            scan.push(score);
        }

        let report = CorrelationReport::estimated(best, scan, n, self.config.min_samples);
        log::debug!(
            "[LagScan] best lag={} r2={:.4} p={:.4}",
            report.best_lag,
            report.r_squared,
            report.p_value
        );
        report
    }
}
