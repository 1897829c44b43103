//! Run Comparison Use Case
//!
//! This is the primary use case: load two endpoint descriptors, invoke each
//! endpoint once, and verify the two responses are identical.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::ports::{DescriptorError, DescriptorRepository, HttpClient};
use crate::use_cases::{CompareError, CompareResponses, InvokeEndpoint, InvokeError, LoadEndpoint};

/// Result type for a comparison run.
pub type RunResult = Result<ComparisonReport, RunError>;

/// Error type for the comparison run.
///
/// Every variant is terminal: the run stops at the first failure and nothing
/// is retried or recovered locally.
#[derive(Debug, Error)]
pub enum RunError {
    /// A descriptor could not be loaded.
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    /// An endpoint could not be invoked.
    #[error(transparent)]
    Invoke(#[from] InvokeError),

    /// The two responses diverged.
    #[error(transparent)]
    Compare(#[from] CompareError),
}

/// Input for a comparison run: the two descriptor paths.
#[derive(Debug, Clone)]
pub struct RunComparisonInput {
    /// Path to the first endpoint descriptor.
    pub first: PathBuf,
    /// Path to the second endpoint descriptor.
    pub second: PathBuf,
}

/// Summary of a successful run, for operator-facing confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonReport {
    /// URL of the first endpoint.
    pub first_url: String,
    /// URL of the second endpoint.
    pub second_url: String,
    /// The status line both endpoints returned.
    pub status: String,
}

/// Use case composing the full pipeline: load → invoke → compare.
///
/// The two invocations are strictly sequential (first, then second) and the
/// comparison only begins once both responses are captured. The stages share
/// no mutable state; a fatal error from any stage aborts the whole run.
pub struct RunComparison<R: DescriptorRepository, C: HttpClient> {
    loader: LoadEndpoint<R>,
    invoker: InvokeEndpoint<C>,
    comparator: CompareResponses,
}

impl<R: DescriptorRepository, C: HttpClient> RunComparison<R, C> {
    /// Creates the pipeline from a descriptor repository and an HTTP client.
    #[must_use]
    pub const fn new(repository: R, client: Arc<C>) -> Self {
        Self {
            loader: LoadEndpoint::new(repository),
            invoker: InvokeEndpoint::new(client),
            comparator: CompareResponses::new(),
        }
    }

    /// Executes the pipeline and reports equivalence or the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered, in stage order: descriptor
    /// loading, endpoint invocation, response comparison.
    pub async fn execute(&self, input: RunComparisonInput) -> RunResult {
        let first = self.loader.execute(&input.first).await?;
        let second = self.loader.execute(&input.second).await?;

        let first_response = self.invoker.execute(&first).await?;
        let second_response = self.invoker.execute(&second).await?;

        self.comparator
            .execute(&first, &first_response, &second, &second_response)?;

        tracing::debug!(
            first = %first.url,
            second = %second.url,
            "responses are equivalent"
        );

        Ok(ComparisonReport {
            first_url: first.url,
            second_url: second.url,
            status: first_response.status_line(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::Path;
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;
    use tandem_domain::{CapturedResponse, EndpointSpec, PreparedRequest};

    use crate::ports::HttpClientError;

    /// In-memory descriptor repository keyed by path.
    struct InMemoryDescriptors {
        specs: HashMap<PathBuf, EndpointSpec>,
    }

    impl InMemoryDescriptors {
        fn new(entries: impl IntoIterator<Item = (&'static str, EndpointSpec)>) -> Self {
            Self {
                specs: entries
                    .into_iter()
                    .map(|(path, spec)| (PathBuf::from(path), spec))
                    .collect(),
            }
        }
    }

    impl DescriptorRepository for InMemoryDescriptors {
        async fn load(&self, path: &Path) -> Result<EndpointSpec, DescriptorError> {
            self.specs
                .get(path)
                .cloned()
                .ok_or_else(|| DescriptorError::NotFound(path.to_path_buf()))
        }
    }

    /// Fake transport keyed by URL, recording invocation order.
    struct RoutedHttpClient {
        responses: HashMap<String, CapturedResponse>,
        invoked: Mutex<Vec<String>>,
    }

    impl RoutedHttpClient {
        fn new(entries: impl IntoIterator<Item = (&'static str, CapturedResponse)>) -> Self {
            Self {
                responses: entries
                    .into_iter()
                    .map(|(url, response)| (url.to_string(), response))
                    .collect(),
                invoked: Mutex::new(Vec::new()),
            }
        }

        fn invoked_urls(&self) -> Vec<String> {
            self.invoked.lock().unwrap().clone()
        }
    }

    impl HttpClient for RoutedHttpClient {
        async fn execute(
            &self,
            request: &PreparedRequest,
        ) -> Result<CapturedResponse, HttpClientError> {
            let url = request.url.to_string();
            self.invoked.lock().unwrap().push(url.clone());
            self.responses
                .get(&url)
                .cloned()
                .ok_or_else(|| HttpClientError::ConnectionFailed(format!("no route to {url}")))
        }
    }

    fn input() -> RunComparisonInput {
        RunComparisonInput {
            first: PathBuf::from("endpoints/first.yml"),
            second: PathBuf::from("endpoints/second.yml"),
        }
    }

    #[tokio::test]
    async fn test_equivalent_endpoints_produce_report() {
        let repository = InMemoryDescriptors::new([
            ("endpoints/first.yml", EndpointSpec::new("http://svc-a/ping")),
            ("endpoints/second.yml", EndpointSpec::new("http://svc-b/ping")),
        ]);
        let client = Arc::new(RoutedHttpClient::new([
            ("http://svc-a/ping", CapturedResponse::new(200, "OK", "pong")),
            ("http://svc-b/ping", CapturedResponse::new(200, "OK", "pong")),
        ]));

        let run = RunComparison::new(repository, Arc::clone(&client));
        let report = run.execute(input()).await.unwrap();

        assert_eq!(
            report,
            ComparisonReport {
                first_url: "http://svc-a/ping".to_string(),
                second_url: "http://svc-b/ping".to_string(),
                status: "200 OK".to_string(),
            }
        );
        // Strictly sequential: first, then second.
        assert_eq!(
            client.invoked_urls(),
            vec!["http://svc-a/ping", "http://svc-b/ping"]
        );
    }

    #[tokio::test]
    async fn test_missing_descriptor_aborts_before_any_invocation() {
        let repository = InMemoryDescriptors::new([(
            "endpoints/first.yml",
            EndpointSpec::new("http://svc-a/ping"),
        )]);
        let client = Arc::new(RoutedHttpClient::new([(
            "http://svc-a/ping",
            CapturedResponse::new(200, "OK", "pong"),
        )]));

        let run = RunComparison::new(repository, Arc::clone(&client));
        let err = run.execute(input()).await.unwrap_err();

        assert!(matches!(
            err,
            RunError::Descriptor(DescriptorError::NotFound(_))
        ));
        assert!(client.invoked_urls().is_empty());
    }

    #[tokio::test]
    async fn test_status_divergence_surfaces_as_status_mismatch() {
        let repository = InMemoryDescriptors::new([
            ("endpoints/first.yml", EndpointSpec::new("http://svc-a/ping")),
            ("endpoints/second.yml", EndpointSpec::new("http://svc-b/ping")),
        ]);
        let client = Arc::new(RoutedHttpClient::new([
            ("http://svc-a/ping", CapturedResponse::new(200, "OK", "pong")),
            (
                "http://svc-b/ping",
                CapturedResponse::new(404, "Not Found", "pong"),
            ),
        ]));

        let run = RunComparison::new(repository, client);
        let err = run.execute(input()).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "different statuses for endpoints [http://svc-a/ping] and [http://svc-b/ping]: \
             [200 OK] vs [404 Not Found]"
        );
    }

    #[tokio::test]
    async fn test_transport_failure_on_first_endpoint_aborts_run() {
        let repository = InMemoryDescriptors::new([
            ("endpoints/first.yml", EndpointSpec::new("http://svc-a/ping")),
            ("endpoints/second.yml", EndpointSpec::new("http://svc-b/ping")),
        ]);
        // No routes at all: the first invocation fails.
        let client = Arc::new(RoutedHttpClient::new([]));

        let run = RunComparison::new(repository, Arc::clone(&client));
        let err = run.execute(input()).await.unwrap_err();

        assert!(matches!(
            err,
            RunError::Invoke(InvokeError::Transport { .. })
        ));
        // The second endpoint was never attempted.
        assert_eq!(client.invoked_urls(), vec!["http://svc-a/ping"]);
    }
}
