//! Report errors

use jhlj_core::SeriesError;
use jhlj_metrics::MetricsError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Series error: {0}")]
    Series(#[from] SeriesError),

    #[error("Metrics error: {0}")]
    Metrics(#[from] MetricsError),

    #[error("Failed to parse records: {0}")]
    Records(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
