/// Error types for filter evaluation
use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

/// Which filter selector carried an unknown value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Category,
    City,
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterField::Category => write!(f, "category"),
            FilterField::City => write!(f, "city"),
        }
    }
}

/// Rejections raised while validating a filter spec, before any aggregation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Date range starts after it ends
    #[error("Invalid date range: {start} is after {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// Category or city is neither "All" nor present in the store
    #[error("Unknown {field} filter value: {value:?}")]
    UnknownFilterValue { field: FilterField, value: String },
}

/// Type alias for Results using EngineError
pub type Result<T> = std::result::Result<T, EngineError>;
