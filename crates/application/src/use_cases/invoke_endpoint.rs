//! Invoke endpoint use case.

use std::sync::Arc;

use thiserror::Error;
use tandem_domain::{CapturedResponse, DomainError, EndpointSpec};

use crate::ports::{HttpClient, HttpClientError};

/// Error type for the invoke endpoint use case.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvokeError {
    /// The descriptor failed validation before dispatch; no network call
    /// was made.
    #[error("invalid endpoint [{url}]: {source}")]
    Preparation {
        /// URL as written in the descriptor.
        url: String,
        /// The validation failure.
        source: DomainError,
    },

    /// The transport failed while calling the endpoint.
    #[error("failed to call endpoint [{url}]: {source}")]
    Transport {
        /// URL of the endpoint being called.
        url: String,
        /// The network-level failure.
        source: HttpClientError,
    },
}

/// Use case for invoking one endpoint and capturing its response.
///
/// The descriptor is validated (method resolution, URL parsing) before the
/// transport is touched, so a configuration error aborts without any network
/// traffic. On success exactly one outbound request is made; no retries.
pub struct InvokeEndpoint<C: HttpClient> {
    client: Arc<C>,
}

impl<C: HttpClient> InvokeEndpoint<C> {
    /// Creates a new `InvokeEndpoint` use case with the given HTTP client.
    #[must_use]
    pub const fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Invokes the endpoint described by `spec` and captures the response.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::Preparation`] if the descriptor fails
    /// validation (unsupported method, empty or malformed URL) and
    /// [`InvokeError::Transport`] on any network-level failure. Both are
    /// fatal for the run.
    pub async fn execute(&self, spec: &EndpointSpec) -> Result<CapturedResponse, InvokeError> {
        let prepared = spec.prepare().map_err(|source| InvokeError::Preparation {
            url: spec.url.clone(),
            source,
        })?;

        tracing::debug!(method = %prepared.method, url = %prepared.url, "invoking endpoint");

        self.client
            .execute(&prepared)
            .await
            .map_err(|source| InvokeError::Transport {
                url: spec.url.clone(),
                source,
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pretty_assertions::assert_eq;
    use tandem_domain::PreparedRequest;

    /// Fake transport that records how often it was called.
    struct CountingHttpClient {
        calls: AtomicUsize,
        response: Result<CapturedResponse, HttpClientError>,
    }

    impl CountingHttpClient {
        fn success() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                response: Ok(CapturedResponse::new(200, "OK", "pong")),
            }
        }

        fn error(err: HttpClientError) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                response: Err(err),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl HttpClient for CountingHttpClient {
        async fn execute(
            &self,
            _request: &PreparedRequest,
        ) -> Result<CapturedResponse, HttpClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response.clone()
        }
    }

    #[tokio::test]
    async fn test_invoke_success() {
        let client = Arc::new(CountingHttpClient::success());
        let use_case = InvokeEndpoint::new(Arc::clone(&client));

        let spec = EndpointSpec::new("http://svc-a/ping");
        let response = use_case.execute(&spec).await.unwrap();

        assert_eq!(response.status_line(), "200 OK");
        assert_eq!(response.body(), "pong");
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_unsupported_method_fails_before_any_network_call() {
        let client = Arc::new(CountingHttpClient::success());
        let use_case = InvokeEndpoint::new(Arc::clone(&client));

        let spec = EndpointSpec::new("http://svc-a/ping").with_method("TRACE");
        let err = use_case.execute(&spec).await.unwrap_err();

        assert_eq!(
            err,
            InvokeError::Preparation {
                url: "http://svc-a/ping".to_string(),
                source: DomainError::UnsupportedMethod("TRACE".to_string()),
            }
        );
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_url_fails_before_any_network_call() {
        let client = Arc::new(CountingHttpClient::success());
        let use_case = InvokeEndpoint::new(Arc::clone(&client));

        let spec = EndpointSpec::new("not-a-valid-url");
        let err = use_case.execute(&spec).await.unwrap_err();

        assert!(matches!(err, InvokeError::Preparation { .. }));
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_transport_error_carries_endpoint_url() {
        let client = Arc::new(CountingHttpClient::error(
            HttpClientError::ConnectionRefused {
                host: "svc-a".to_string(),
            },
        ));
        let use_case = InvokeEndpoint::new(client);

        let spec = EndpointSpec::new("http://svc-a/ping");
        let err = use_case.execute(&spec).await.unwrap_err();

        assert_eq!(
            err,
            InvokeError::Transport {
                url: "http://svc-a/ping".to_string(),
                source: HttpClientError::ConnectionRefused {
                    host: "svc-a".to_string(),
                },
            }
        );
    }
}
