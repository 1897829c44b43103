//! HTTP Client port

use tandem_domain::{CapturedResponse, PreparedRequest};

/// Error type for transport failures.
///
/// All variants are network-level conditions: by the time the transport is
/// involved, the request itself has already been validated.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum HttpClientError {
    /// The request exceeded the transport's timeout.
    #[error("request timed out")]
    Timeout,

    /// DNS resolution failed.
    #[error("DNS resolution failed for host [{host}]: {message}")]
    Dns {
        /// Host that failed to resolve.
        host: String,
        /// Resolver diagnostic.
        message: String,
    },

    /// The remote host refused the connection.
    #[error("connection refused by [{host}]")]
    ConnectionRefused {
        /// Host that refused.
        host: String,
    },

    /// The connection could not be established (includes TLS failures).
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),

    /// Any other transport failure.
    #[error("transport error: {0}")]
    Other(String),
}

/// Port for executing HTTP requests.
///
/// This trait abstracts the HTTP client implementation, allowing the
/// application layer to be independent of specific HTTP libraries and tests
/// to substitute a fake transport without real network access.
pub trait HttpClient: Send + Sync {
    /// Performs exactly one HTTP request and captures the response.
    ///
    /// Implementations attach every header pair in request order, send no
    /// request body regardless of method, and apply their standard
    /// timeout/redirect defaults. No retries.
    ///
    /// # Errors
    ///
    /// Returns an error on any network-level failure.
    fn execute(
        &self,
        request: &PreparedRequest,
    ) -> impl std::future::Future<Output = Result<CapturedResponse, HttpClientError>> + Send;
}
