//! JHLJ Metrics
//!
//! Windowed statistics over a [`SeriesView`](jhlj_core::SeriesView):
//!
//! - **Trailing**: mean of a field over the most recent N records
//! - **Period Change**: window-over-window percentage change, degrading to a
//!   two-point comparison when history is short
//! - **Metrics Table**: one row per declared metric, one cell per window
//! - **Change History**: day-over-day change of the tracked field for charts
//!
//! ## Architecture
//!
//! ```text
//! MetricDefinitions ──┐
//!                     ├──► MetricsTable::build ──► rows × windows
//! SeriesView ─────────┤          │
//!                     │          ├── TrailingAggregator::trailing
//!                     │          └── PeriodChangeCalculator::period_change
//!                     │
//!                     └──► ChangeHistory::build ──► chart points (oldest first)
//! ```

pub mod definitions;
pub mod error;
pub mod history;
pub mod period_change;
pub mod rounding;
pub mod table;
pub mod trailing;

// Re-export main types
pub use definitions::{MetricDefinition, MetricDefinitions};
pub use error::{MetricsError, Result};
pub use history::{ChangeHistory, HistoryPoint};
pub use period_change::{ChangeRegime, PeriodChangeCalculator};
pub use table::{MetricCell, MetricRow, MetricsTable};
pub use trailing::TrailingAggregator;
