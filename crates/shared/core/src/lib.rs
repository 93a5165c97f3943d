//! JHLJ Core Domain
//!
//! Pure domain types for the JHLJ index engine.
//! This crate contains no async, no I/O, and is 100% unit testable.
//!
//! - **DailyRecord**: one calendar day of named, optional observations
//! - **SeriesView**: validated, newest-first view over daily records
//! - **Window**: a record-count window (7, 28, 91 by convention)

pub mod entities;
pub mod error;
pub mod fields;
pub mod series;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::DailyRecord;
pub use error::{Result, SeriesError};
pub use series::SeriesView;
pub use values::{FieldName, ReportDate, Window};
