//! Error types for Simple-Timeline

use crate::core::temporal::Timestamp;
use thiserror::Error;

/// Result type alias for Simple-Timeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Simple-Timeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A period whose start lies after its end
    #[error("Start Date {start} can not be greater than End Date {end}")]
    InvalidRange { start: Timestamp, end: Timestamp },

    /// A required period, instant or bound was not supplied
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    /// Positional access outside the collection
    #[error("Index {index} is out of range for a collection of {len} periods")]
    IndexOutOfRange { index: usize, len: usize },

    /// The relation classifier fell through every case
    #[error("Internal inconsistency: {0}")]
    InternalInconsistency(String),

    /// Instant arithmetic or calendar construction outside the representable range
    #[error("Temporal error: {0}")]
    Temporal(String),

    /// Text that is not a valid instant or period
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
