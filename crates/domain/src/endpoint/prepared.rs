//! Validated request form

use url::Url;

use super::{Headers, HttpMethod};

/// A request that passed descriptor validation and is ready to dispatch.
///
/// Produced by [`EndpointSpec::prepare`](super::EndpointSpec::prepare); the
/// transport layer only ever sees this form, so an unsupported method or a
/// malformed URL can never reach the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    /// Resolved HTTP method.
    pub method: HttpMethod,
    /// Parsed absolute URL.
    pub url: Url,
    /// Header pairs in descriptor order.
    pub headers: Headers,
}

impl PreparedRequest {
    /// Creates a prepared request from already-validated parts.
    #[must_use]
    pub const fn new(method: HttpMethod, url: Url, headers: Headers) -> Self {
        Self {
            method,
            url,
            headers,
        }
    }
}
