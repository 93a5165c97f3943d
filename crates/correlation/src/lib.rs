//! JHLJ Correlation
//!
//! Lead-lag analysis between a tracked series and a reference series:
//!
//! - **Statistics**: Pearson correlation and its two-tailed p-value
//! - **Lag Scan**: shifts the tracked series by 0..=max_lag records and keeps
//!   the offset with the highest correlation
//! - **Signal**: maps the scan result and a short-term trend check to a
//!   discrete, displayable signal
//! - **Insights**: one-line explanations of the thresholds that were crossed
//!
//! ## Architecture
//!
//! ```text
//! SeriesView ──► paired(tracked, reference)
//!                      │
//!                      ▼
//!          LagCorrelationAnalyzer ──► CorrelationReport
//!                                          │
//!            SeriesView (tracked trend) ───┤
//!                                          ▼
//!                                  SignalClassifier ──► SignalAssessment
//!                                          │
//!                                          ▼
//!                                      Insights
//! ```
//!
//! The scan is a heuristic ranking over a small window, not a causal test.
//! Its output is an explanatory label.

pub mod analyzer;
pub mod insights;
pub mod report;
pub mod signal;
pub mod stats;

// Re-export main types
pub use analyzer::{AnalyzerConfig, LagCorrelationAnalyzer};
pub use insights::{DISCLAIMER, Insights};
pub use report::{CorrelationReport, CorrelationStatus, LagScore, lead_time_label};
pub use signal::{ClassifierConfig, Signal, SignalAssessment, SignalClassifier, Trend};
pub use stats::{correlation_p_value, pearson};
