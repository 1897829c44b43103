//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while validating an endpoint
/// descriptor before dispatch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The endpoint URL is empty.
    #[error("endpoint URL is required")]
    EmptyUrl,

    /// The endpoint URL is not a valid absolute URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP method is not in the supported set.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
