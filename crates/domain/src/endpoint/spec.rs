//! Endpoint descriptor type

use serde::{Deserialize, Serialize};
use url::Url;

use super::{Header, Headers, HttpMethod, PreparedRequest};
use crate::error::{DomainError, DomainResult};

/// Request properties carried by a descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Properties {
    /// Headers to attach to the outgoing request, in descriptor order.
    #[serde(default)]
    pub headers: Headers,
}

/// A declarative description of one HTTP call: URL, method, headers.
///
/// Constructed once from a descriptor file and immutable thereafter. The
/// method is kept as written; it is resolved against the supported set only
/// when the endpoint is about to be invoked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointSpec {
    /// Target URL.
    pub url: String,
    /// HTTP method as written in the descriptor. Empty means GET.
    #[serde(default)]
    pub method: String,
    /// Additional request properties.
    #[serde(default)]
    pub properties: Properties,
}

impl EndpointSpec {
    /// Creates a descriptor for the given URL with an unset method.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: String::new(),
            properties: Properties::default(),
        }
    }

    /// Sets the raw method string.
    #[must_use]
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Appends a header pair.
    #[must_use]
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.headers.add(Header::new(key, value));
        self
    }

    /// Resolves the raw method string against the supported set.
    ///
    /// An empty or whitespace-only method defaults to GET; anything else is
    /// matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnsupportedMethod`] if the normalized method
    /// is outside the supported set.
    pub fn resolved_method(&self) -> DomainResult<HttpMethod> {
        let raw = self.method.trim();
        if raw.is_empty() {
            Ok(HttpMethod::Get)
        } else {
            raw.parse()
        }
    }

    /// Validates the descriptor and produces the request to dispatch.
    ///
    /// This is the gate in front of the transport: a descriptor that fails
    /// here never causes a network call.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnsupportedMethod`] for a method outside the
    /// supported set, [`DomainError::EmptyUrl`] for a blank URL, and
    /// [`DomainError::InvalidUrl`] for a URL that does not parse as an
    /// absolute URL.
    pub fn prepare(&self) -> DomainResult<PreparedRequest> {
        let method = self.resolved_method()?;

        if self.url.trim().is_empty() {
            return Err(DomainError::EmptyUrl);
        }
        let url = Url::parse(&self.url)
            .map_err(|e| DomainError::InvalidUrl(format!("{e}: {}", self.url)))?;

        Ok(PreparedRequest::new(
            method,
            url,
            self.properties.headers.clone(),
        ))
    }
}
