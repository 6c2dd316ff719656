/// Error types for course-analyzer
///
/// This module defines all possible errors that can occur while loading a
/// course dataset or answering queries over it.
/// Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Main error type for course-analyzer operations
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// I/O errors (opening the dataset, reading config files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Low-level CSV reader errors (bad UTF-8, unterminated quotes)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A data row does not have the expected number of fields
    #[error("Malformed row at line {line}: expected {expected} fields, found {found}")]
    MalformedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// A single field could not be coerced to its type
    #[error("Invalid value '{value}' for field '{field}' at line {line}: {reason}")]
    InvalidField {
        line: u64,
        field: &'static str,
        value: String,
        reason: String,
    },

    /// Caller passed an argument outside the accepted domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for course-analyzer operations
pub type Result<T> = std::result::Result<T, AnalyzerError>;

/// Convert AnalyzerError to a user-friendly error message
impl AnalyzerError {
    pub fn user_message(&self) -> String {
        match self {
            AnalyzerError::Io(e) => {
                format!("File system error. Check the dataset path and permissions. Details: {}", e)
            }
            AnalyzerError::Csv(e) => {
                format!("The dataset could not be read as CSV. Details: {}", e)
            }
            AnalyzerError::MalformedRow {
                line,
                expected,
                found,
            } => {
                format!(
                    "Line {} of the dataset has {} fields but {} are required",
                    line, found, expected
                )
            }
            AnalyzerError::InvalidField {
                line,
                field,
                value,
                reason,
            } => {
                format!(
                    "Line {} of the dataset has a bad {} value '{}' ({})",
                    line, field, value, reason
                )
            }
            AnalyzerError::InvalidArgument(msg) => msg.clone(),
            AnalyzerError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
            AnalyzerError::Serialization(e) => {
                format!("Data format error: {}", e)
            }
        }
    }

    pub(crate) fn invalid_field(
        line: u64,
        field: &'static str,
        value: &str,
        reason: impl ToString,
    ) -> Self {
        AnalyzerError::InvalidField {
            line,
            field,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}
