/*!
 * Error types for the subconv application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur while parsing or re-serializing subtitle documents
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// A timing line does not match any recognized timestamp pattern.
    /// Recoverable at parse time: the surrounding entry or block is skipped.
    #[error("malformed timestamp: {0}")]
    MalformedTimestamp(String),

    /// A structural block is missing required lines.
    /// Recoverable: the block is skipped and parsing continues.
    #[error("malformed subtitle block: {0}")]
    BlockParse(String),

    /// The whole document is not valid for a structured format.
    /// Fatal for the conversion.
    #[error("invalid document: {0}")]
    DocumentParse(String),
}

/// Errors that can occur when talking to a translation provider
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),
}

/// Errors that can occur during translation
///
/// A translation failure is never fatal for a conversion: the pipeline
/// falls back to the source text for the affected entry.
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error from the provider API
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// The requested (input format, output format) pair has no defined mapping
    #[error("unsupported conversion from {from} to {to}")]
    UnsupportedConversion {
        /// Source format tag
        from: String,
        /// Target format tag
        to: String
    },

    /// Error from subtitle processing
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Error from translation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
