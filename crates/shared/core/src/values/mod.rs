use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Calendar day a record belongs to
pub type ReportDate = NaiveDate;

/// Name of a numeric field carried by a daily record
pub type FieldName = String;

/// Number of records a statistic looks back over.
///
/// Windows count available records, not calendar days: a series with gaps
/// still yields `min(N, len)` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Window(usize);

impl Window {
    pub const WEEK: Window = Window(7);
    pub const MONTH: Window = Window(28);
    pub const QUARTER: Window = Window(91);

    /// Windows reported by default, shortest first
    pub const STANDARD: [Window; 3] = [Window::WEEK, Window::MONTH, Window::QUARTER];

    pub const fn new(records: usize) -> Self {
        Self(records)
    }

    /// Number of records in the window
    pub const fn size(self) -> usize {
        self.0
    }

    /// Records actually covered over a series of `len` records
    pub fn span(self, len: usize) -> usize {
        self.0.min(len)
    }
}

impl From<usize> for Window {
    fn from(records: usize) -> Self {
        Self(records)
    }
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d", self.0)
    }
}
