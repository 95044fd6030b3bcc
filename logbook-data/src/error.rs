/// Error types for the logbook data layer
use thiserror::Error;

/// Main error type for logbook ingestion operations
#[derive(Error, Debug)]
pub enum LogbookError {
    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A required column was absent from a CSV row
    #[error("Missing column '{0}' in CSV row")]
    MissingColumn(&'static str),

    /// A field value could not be parsed into its declared type
    #[error("Failed to parse field '{field}': {value:?}")]
    FieldParse {
        field: &'static str,
        value: String,
    },

    /// Date or timestamp parsing failed
    #[error("Failed to parse date: {0}")]
    DateParse(String),

    /// Ascent method code outside the documented 1-5 mapping
    #[error("Unknown method code: {0}")]
    UnknownMethodCode(u8),

    /// Rating outside the 0-5 scale
    #[error("Rating out of range: {0}")]
    RatingOutOfRange(u8),
}

/// Type alias for Results using LogbookError
pub type Result<T> = std::result::Result<T, LogbookError>;
