//! Error types for depreport-core

use thiserror::Error as ThisError;

/// Result type alias for depreport operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for depreport operations
#[derive(Debug, ThisError)]
pub enum Error {
    /// Missing or invalid step input
    #[error("Configuration error: {0}")]
    Config(String),

    /// Repository URL matches neither the HTTPS nor the SSH form
    #[error("invalid repository URL: {0}")]
    InvalidRepositoryUrl(String),

    /// Request could not be sent or no response was received
    #[error("failed to send the request: {0}")]
    Transport(String),

    /// Response status was not 201 Created
    #[error("server error, unexpected status code: {status}{}", format_body(.body))]
    UnexpectedStatus {
        /// Numeric status code
        code: u16,
        /// Literal status text, e.g. `422 Unprocessable Entity`
        status: String,
        /// Excerpt of the response body
        body: String,
    },

    /// Response body could not be read or deserialized
    #[error("failed to parse response: {0}")]
    ResponseParse(String),

    /// Request payload could not be serialized
    #[error("failed to serialize request: {0}")]
    Serialize(String),

    /// Runtime error (Tokio, client construction)
    #[error("Runtime error: {0}")]
    Runtime(String),
}

fn format_body(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(" ({})", body)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialize(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.without_url().to_string())
    }
}

/// Fieldless error category.
///
/// Single byte representation (`#[repr(u8)]`), `Copy`, no allocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorKind {
    /// Configuration error
    Config,
    /// Repository URL parse error
    InvalidRepositoryUrl,
    /// Network/transport error
    Transport,
    /// Non-201 response
    UnexpectedStatus,
    /// Response body error
    ResponseParse,
    /// Payload serialization error
    Serialize,
    /// Runtime error
    Runtime,
}

impl Error {
    /// Get the error kind
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::Config(_) => ErrorKind::Config,
            Error::InvalidRepositoryUrl(_) => ErrorKind::InvalidRepositoryUrl,
            Error::Transport(_) => ErrorKind::Transport,
            Error::UnexpectedStatus { .. } => ErrorKind::UnexpectedStatus,
            Error::ResponseParse(_) => ErrorKind::ResponseParse,
            Error::Serialize(_) => ErrorKind::Serialize,
            Error::Runtime(_) => ErrorKind::Runtime,
        }
    }

    /// Borrow the error message without the category prefix
    #[inline]
    pub fn message(&self) -> &str {
        match self {
            Error::Config(msg)
            | Error::InvalidRepositoryUrl(msg)
            | Error::Transport(msg)
            | Error::ResponseParse(msg)
            | Error::Serialize(msg)
            | Error::Runtime(msg) => msg,
            Error::UnexpectedStatus { status, .. } => status,
        }
    }
}
