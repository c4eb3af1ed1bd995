/// Error types for loading measurement datasets
use thiserror::Error;

/// Main error type for dataset loading
#[derive(Error, Debug)]
pub enum LoadError {
    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// Failed to read the dataset source
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[cfg(feature = "api")]
    #[error("Bad response status for {url}: {status}")]
    HttpStatus { url: String, status: u16 },

    /// Required header column is absent
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A numeric cell could not be parsed
    #[error("Row {row}: invalid value {value:?} in column {column}")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },

    /// A numeric cell parsed but lies outside its allowed range
    #[error("Row {row}: value {value} in column {column} is out of range")]
    OutOfRange {
        row: usize,
        column: &'static str,
        value: f64,
    },

    /// City cell is blank
    #[error("Row {row}: city is empty")]
    EmptyCity { row: usize },
}

/// Type alias for Results using LoadError
pub type Result<T> = std::result::Result<T, LoadError>;
