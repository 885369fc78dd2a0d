/// Error types for the zonal anomaly core library
use thiserror::Error;

/// Main error type for loading, aligning and selecting zonal anomaly data
#[derive(Error, Debug)]
pub enum ZonalError {
    /// Reading an input file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV could not be read
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A JSON configuration could not be read
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A date cell could not be parsed
    #[error("Failed to parse date {value:?} on line {line}")]
    DateParse { line: u64, value: String },

    /// An anomaly cell could not be parsed as a number
    #[error("Failed to parse value {value:?} in column {column:?} on line {line}")]
    ValueParse {
        line: u64,
        column: String,
        value: String,
    },

    /// The CSV header has no date column
    #[error("Date column not found: {0}")]
    MissingTimeColumn(String),

    /// A requested region column is not present in the table
    #[error("Region column not found: {0}")]
    MissingColumn(String),

    /// The configured year range is empty
    #[error("Invalid year range: {first}-{last}")]
    InvalidYearRange { first: i32, last: i32 },

    /// A day-of-year outside 1..=365
    #[error("Day of year out of range: {0}")]
    InvalidDayOfYear(u32),

    /// A month-day key that is not a non-leap "MM-DD"
    #[error("Invalid month-day key: {0:?}")]
    InvalidMonthDay(String),

    /// The table has no rows
    #[error("No observations available")]
    NoData,

    /// A named dataset failed to load
    #[error("Dataset {key}: {source}")]
    Dataset {
        key: String,
        #[source]
        source: Box<ZonalError>,
    },
}

/// Type alias for Results using ZonalError
pub type Result<T> = std::result::Result<T, ZonalError>;
