//! Report configuration
//!
//! JSON configuration for the report engine. Every field has a default, so
//! `{}` is a valid file and yields the leather jacket index as published.
//!
//! ```json
//! {
//!   "ticker": "JHLJ",
//!   "tracked": "avg_price",
//!   "reference": "nvda_close",
//!   "windows": [7, 28, 91],
//!   "max_lag": 7
//! }
//! ```

use jhlj_core::{Window, fields};
use jhlj_correlation::{AnalyzerConfig, ClassifierConfig};
use jhlj_metrics::MetricDefinitions;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Root configuration for the report engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Short ticker shown in the report header
    #[serde(default = "default_ticker")]
    pub ticker: String,

    /// Full index name
    #[serde(default = "default_name")]
    pub name: String,

    /// Field whose lead over the reference is measured
    #[serde(default = "default_tracked")]
    pub tracked: String,

    /// Field the tracked series is compared against
    #[serde(default = "default_reference")]
    pub reference: String,

    /// Metric table windows, in records
    #[serde(default = "default_windows")]
    pub windows: Vec<Window>,

    /// Rows of the metric table
    #[serde(default)]
    pub metrics: MetricDefinitions,

    /// Raw fields carried into the chart history
    #[serde(default = "default_chart_fields")]
    pub chart_fields: Vec<String>,

    /// Largest lag scanned, in records
    #[serde(default = "default_max_lag")]
    pub max_lag: usize,

    /// Paired observations required before scanning
    #[serde(default = "default_min_samples")]
    pub min_samples: usize,

    /// Pairs required at a single lag
    #[serde(default = "default_min_lag_samples")]
    pub min_lag_samples: usize,

    /// R² a relationship must exceed to be reported
    #[serde(default = "default_min_r_squared")]
    pub min_r_squared: f64,

    /// Values per half of the trend comparison
    #[serde(default = "default_trend_window")]
    pub trend_window: usize,

    /// Tracked values required for a trend call
    #[serde(default = "default_min_trend_points")]
    pub min_trend_points: usize,

    /// Newest records kept before computing
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_ticker() -> String {
    "JHLJ".to_string()
}

fn default_name() -> String {
    "Jensen Huang Leather Jacket Index".to_string()
}

fn default_tracked() -> String {
    fields::AVG_PRICE.to_string()
}

fn default_reference() -> String {
    fields::NVDA_CLOSE.to_string()
}

fn default_windows() -> Vec<Window> {
    Window::STANDARD.to_vec()
}

fn default_chart_fields() -> Vec<String> {
    [
        fields::NVDA_PCT_CHANGE,
        fields::AVG_JENSEN_SCORE,
        fields::TOTAL_LISTINGS,
        fields::SOLD_COUNT,
    ]
    .iter()
    .map(|f| f.to_string())
    .collect()
}

fn default_max_lag() -> usize {
    AnalyzerConfig::default().max_lag
}

fn default_min_samples() -> usize {
    AnalyzerConfig::default().min_samples
}

fn default_min_lag_samples() -> usize {
    AnalyzerConfig::default().min_lag_samples
}

fn default_min_r_squared() -> f64 {
    ClassifierConfig::default().min_r_squared
}

fn default_trend_window() -> usize {
    ClassifierConfig::default().trend_window
}

fn default_min_trend_points() -> usize {
    ClassifierConfig::default().min_trend_points
}

fn default_history_limit() -> usize {
    730
}

/// Largest `max_lag` accepted by [`ReportConfig::validate`]
pub const MAX_LAG_LIMIT: usize = 90;

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            ticker: default_ticker(),
            name: default_name(),
            tracked: default_tracked(),
            reference: default_reference(),
            windows: default_windows(),
            metrics: MetricDefinitions::default(),
            chart_fields: default_chart_fields(),
            max_lag: default_max_lag(),
            min_samples: default_min_samples(),
            min_lag_samples: default_min_lag_samples(),
            min_r_squared: default_min_r_squared(),
            trend_window: default_trend_window(),
            min_trend_points: default_min_trend_points(),
            history_limit: default_history_limit(),
        }
    }
}

impl ReportConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Builder: compare `tracked` against `reference`
    pub fn with_fields(mut self, tracked: impl Into<String>, reference: impl Into<String>) -> Self {
        self.tracked = tracked.into();
        self.reference = reference.into();
        self
    }

    /// Builder: set the largest lag scanned
    pub fn with_max_lag(mut self, max_lag: usize) -> Self {
        self.max_lag = max_lag;
        self
    }

    /// Builder: set the metric table windows
    pub fn with_windows(mut self, windows: Vec<Window>) -> Self {
        self.windows = windows;
        self
    }

    /// Check cross-field constraints serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tracked.trim().is_empty() || self.reference.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "tracked and reference fields must be named".to_string(),
            ));
        }
        if self.tracked == self.reference {
            return Err(ConfigError::Invalid(format!(
                "tracked and reference are both '{}'",
                self.tracked
            )));
        }
        if let Some(window) = self.windows.iter().find(|w| w.size() == 0) {
            return Err(ConfigError::Invalid(format!("window {} is empty", window)));
        }
        if self.max_lag > MAX_LAG_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "max lag {} exceeds {}",
                self.max_lag, MAX_LAG_LIMIT
            )));
        }
        if self.trend_window == 0 || self.trend_window.saturating_mul(2) > self.min_trend_points {
            return Err(ConfigError::Invalid(format!(
                "trend window {} does not fit in {} trend points",
                self.trend_window, self.min_trend_points
            )));
        }
        Ok(())
    }

    /// Lag scan settings
    pub fn analyzer(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            max_lag: self.max_lag,
            min_samples: self.min_samples,
            min_lag_samples: self.min_lag_samples,
        }
    }

    /// Signal classification settings
    pub fn classifier(&self) -> ClassifierConfig {
        ClassifierConfig {
            min_r_squared: self.min_r_squared,
            trend_window: self.trend_window,
            min_trend_points: self.min_trend_points,
        }
    }
}

/// Configuration error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
