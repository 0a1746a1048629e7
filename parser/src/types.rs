use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Level label counted as an error by the aggregator. Compared exactly.
pub const ERROR_LEVEL: &str = "ERROR";

/// One structured entry taken from a raw log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub level: String,
    pub service: String,
    pub message: String,
}

impl LogRecord {
    pub fn is_error(&self) -> bool {
        self.level == ERROR_LEVEL
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed line: expected at least 4 fields, found {tokens}")]
    MalformedLine { tokens: usize },
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
    #[error("Invalid UTF-8 after byte {valid_up_to}")]
    InvalidEncoding { valid_up_to: usize },
}

impl ParseError {
    /// Whether the caller should drop the offending line and keep going.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ParseError::MalformedLine { .. }
                | ParseError::InvalidTimestamp(_)
                | ParseError::InvalidEncoding { .. }
        )
    }
}
