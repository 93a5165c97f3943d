//! Metrics errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetricsError {
    #[error("At most one metric may be highlighted, found {count}: {names:?}")]
    MultipleHighlights { count: usize, names: Vec<String> },

    #[error("Metric declared twice: {0}")]
    DuplicateMetric(String),

    #[error("Metric {0} has no field name")]
    EmptyField(String),
}

pub type Result<T> = std::result::Result<T, MetricsError>;
