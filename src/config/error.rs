//! Error types for tuning data loading.

use thiserror::Error;

/// Errors that can occur when loading tuning or enemy definition files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// Values parsed but contradict each other.
    #[error("Invalid tuning: {0}")]
    Invalid(String),
}
