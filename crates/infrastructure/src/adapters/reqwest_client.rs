//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! It handles all HTTP communication for the comparison run.

use reqwest::{Client, Method};
use tandem_application::ports::{HttpClient, HttpClientError};
use tandem_domain::{CapturedResponse, HttpMethod, PreparedRequest};

/// HTTP client implementation using reqwest.
///
/// This is the primary transport adapter for Tandem. It wraps
/// `reqwest::Client` and implements the `HttpClient` port from the
/// application layer.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates a new HTTP client with default settings.
    ///
    /// Default configuration:
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled
    /// - User-Agent: "Tandem/0.1.0"
    ///
    /// No request timeout is set beyond the transport defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent("Tandem/0.1.0")
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Creates a new HTTP client with a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
            HttpMethod::Options => Method::OPTIONS,
        }
    }

    /// Maps reqwest errors to the port's `HttpClientError`.
    fn map_error(error: reqwest::Error) -> HttpClientError {
        let host = error
            .url()
            .and_then(|u| u.host_str())
            .unwrap_or("unknown")
            .to_string();

        if error.is_timeout() {
            return HttpClientError::Timeout;
        }

        if error.is_connect() {
            let message = error.to_string();
            let lowered = message.to_lowercase();
            if lowered.contains("dns") || lowered.contains("resolve") {
                return HttpClientError::Dns { host, message };
            }
            if lowered.contains("refused") {
                return HttpClientError::ConnectionRefused { host };
            }
            return HttpClientError::ConnectionFailed(message);
        }

        HttpClientError::Other(error.to_string())
    }
}

impl HttpClient for ReqwestHttpClient {
    async fn execute(
        &self,
        request: &PreparedRequest,
    ) -> Result<CapturedResponse, HttpClientError> {
        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), request.url.clone());

        // Descriptor order; later pairs with the same key overwrite at the
        // transport layer.
        for header in &request.headers {
            builder = builder.header(&header.key, &header.value);
        }

        tracing::debug!(method = %request.method, url = %request.url, "dispatching request");

        let response = builder.send().await.map_err(Self::map_error)?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();

        let body = response
            .text()
            .await
            .map_err(|e| HttpClientError::Body(e.to_string()))?;

        Ok(CapturedResponse::new(status.as_u16(), status_text, body))
    }
}
