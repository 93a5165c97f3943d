//! JHLJ Report
//!
//! Builds the published index report from a snapshot of daily records:
//!
//! - **Config**: JSON configuration with defaults for every field
//! - **Engine**: runs the metrics table, the lead-lag scan, signal
//!   classification and chart history over one snapshot
//!
//! ## Architecture
//!
//! ```text
//!   records.json ──► load_records ──► SeriesView
//!                                        │ truncated(history_limit)
//!                                        ▼
//!                                   ReportEngine
//!                    ┌──────────────────┼───────────────────┐
//!                    ▼                  ▼                   ▼
//!              MetricsTable    LagCorrelationAnalyzer   ChangeHistory
//!                                       │
//!                              SignalClassifier + Insights
//!                    └──────────────────┼───────────────────┘
//!                                       ▼
//!                                  IndexReport
//! ```

pub mod config;
pub mod engine;
pub mod error;

// Re-export main types
pub use config::{ConfigError, MAX_LAG_LIMIT, ReportConfig};
pub use engine::{CorrelationSection, IndexReport, ReportEngine, load_records};
pub use error::{Error, Result};
