//! Signal Classification
//!
//! Maps a correlation report plus a short-term trend check on the tracked
//! series into one displayable signal. Rules, in order:
//!
//! 1. Not enough paired data            → `INITIALIZING`
//! 2. R² at or below the threshold       → `NEUTRAL`
//! 3. Best lag is zero                   → `SYNCHRONIZED`
//! 4. Lag > 0, enough tracked history    → `BULLISH` (rising) / `BEARISH`
//! 5. Lag > 0, short tracked history     → `LEADING`

use jhlj_core::SeriesView;
use serde::{Deserialize, Serialize};

use crate::report::CorrelationReport;

/// Discrete signal state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Signal {
    /// Still collecting paired observations
    Initializing,
    /// No meaningful relationship
    Neutral,
    /// Moves together with the reference, no lead
    Synchronized,
    /// Leads the reference, no trend call possible
    Leading,
    /// Leads the reference and is rising
    Bullish,
    /// Leads the reference and is flat or falling
    Bearish,
}

impl Signal {
    /// Fixed display color token
    pub fn color(self) -> &'static str {
        match self {
            Signal::Initializing => "gray",
            Signal::Neutral => "white",
            Signal::Synchronized => "blue",
            Signal::Leading => "amber",
            Signal::Bullish => "green",
            Signal::Bearish => "red",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Signal::Initializing => "INITIALIZING",
            Signal::Neutral => "NEUTRAL",
            Signal::Synchronized => "SYNCHRONIZED",
            Signal::Leading => "LEADING",
            Signal::Bullish => "BULLISH",
            Signal::Bearish => "BEARISH",
        }
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of the recent tracked values against the ones before them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Rising,
    Flat,
    Falling,
}

impl Trend {
    fn describe(self) -> &'static str {
        match self {
            Trend::Rising => "rising",
            Trend::Flat => "flat",
            Trend::Falling => "falling",
        }
    }
}

/// Classified signal with its display attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalAssessment {
    pub signal: Signal,
    pub color: String,
    pub description: String,
    /// Present only when a trend call was made
    pub trend: Option<Trend>,
}

impl SignalAssessment {
    fn new(signal: Signal, description: String, trend: Option<Trend>) -> Self {
        Self {
            signal,
            color: signal.color().to_string(),
            description,
            trend,
        }
    }
}

/// Thresholds for classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// R² must exceed this to count as a relationship
    pub min_r_squared: f64,
    /// Tracked values in each half of the trend comparison
    pub trend_window: usize,
    /// Tracked values required before a trend call is made
    pub min_trend_points: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_r_squared: 0.3,
            trend_window: 3,
            min_trend_points: 7,
        }
    }
}

/// Signal classifier
#[derive(Debug, Clone, Default)]
pub struct SignalClassifier {
    config: ClassifierConfig,
}

impl SignalClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify a scan result, using `series` for the trend check on
    /// `tracked`
    pub fn classify(
        &self,
        report: &CorrelationReport,
        series: &SeriesView,
        tracked: &str,
    ) -> SignalAssessment {
        if !report.is_sufficient() {
            return SignalAssessment::new(
                Signal::Initializing,
                format!(
                    "Collecting data: {} of {} paired observations",
                    report.sample_size, report.required_samples
                ),
                None,
            );
        }

        if report.r_squared <= self.config.min_r_squared {
            return SignalAssessment::new(
                Signal::Neutral,
                format!(
                    "No meaningful relationship (R² {:.2} at or below {:.2})",
                    report.r_squared, self.config.min_r_squared
                ),
                None,
            );
        }

        if report.best_lag == 0 {
            return SignalAssessment::new(
                Signal::Synchronized,
                format!(
                    "Moves in real time with the reference (R² {:.2})",
                    report.r_squared
                ),
                None,
            );
        }

        let lag = report.best_lag;
        match self.trend(series, tracked) {
            Some(Trend::Rising) => SignalAssessment::new(
                Signal::Bullish,
                format!("Leads the reference by {lag}d and is rising: upside expected within {lag}d"),
                Some(Trend::Rising),
            ),
            Some(trend) => SignalAssessment::new(
                Signal::Bearish,
                format!(
                    "Leads the reference by {lag}d and is {}: downside expected within {lag}d",
                    trend.describe()
                ),
                Some(trend),
            ),
            None => SignalAssessment::new(
                Signal::Leading,
                format!(
                    "Leads the reference by {lag}d (R² {:.2}); not enough history for a trend call",
                    report.r_squared
                ),
                None,
            ),
        }
    }

    /// Mean of the newest `trend_window` tracked values against the mean
    /// of the `trend_window` values before them.
    ///
    /// `None` when fewer than `min_trend_points` values are present.
    pub fn trend(&self, series: &SeriesView, tracked: &str) -> Option<Trend> {
        let values = series.present_values(tracked);
        let w = self.config.trend_window;
        if w == 0
            || values.len() < self.config.min_trend_points
            || values.len() < w.saturating_mul(2)
        {
            return None;
        }

        let recent = mean(&values[..w]);
        let previous = mean(&values[w..2 * w]);

        Some(if recent > previous {
            Trend::Rising
        } else if recent < previous {
            Trend::Falling
        } else {
            Trend::Flat
        })
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
