use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while building a series view
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    #[error("Records out of order at index {index}: {current} is not older than {previous}")]
    OutOfOrder {
        index: usize,
        previous: NaiveDate,
        current: NaiveDate,
    },

    #[error("Duplicate record for {0}")]
    DuplicateDate(NaiveDate),
}

pub type Result<T> = std::result::Result<T, SeriesError>;
