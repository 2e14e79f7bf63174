//! Error types for the mail service.

use thiserror::Error;

/// Common error type for the mail service.
///
/// Failures that happen while a message is being delivered are not part of
/// this enum; they are reported with the transport's own error type.
#[derive(Error, Debug)]
pub enum MailServiceError {
    /// A required connection parameter was absent or empty.
    #[error("missing configuration parameter: {0}")]
    MissingParameter(&'static str),

    /// The transport could not be created from valid parameters.
    #[error("transport setup error: {0}")]
    TransportSetup(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for mail service operations.
pub type Result<T> = std::result::Result<T, MailServiceError>;
