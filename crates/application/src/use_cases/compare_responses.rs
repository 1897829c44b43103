//! Compare responses use case.

use thiserror::Error;
use tandem_domain::{CapturedResponse, EndpointSpec};

/// Error type for the comparison stage: the first divergence found between
/// the two responses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompareError {
    /// The two responses carry different status lines.
    #[error(
        "different statuses for endpoints [{first_url}] and [{second_url}]: [{first_status}] vs [{second_status}]"
    )]
    StatusMismatch {
        /// URL of the first endpoint.
        first_url: String,
        /// URL of the second endpoint.
        second_url: String,
        /// Status line captured from the first endpoint.
        first_status: String,
        /// Status line captured from the second endpoint.
        second_status: String,
    },

    /// The statuses matched but the bodies differ.
    #[error(
        "different bodies for endpoints [{first_url}] and [{second_url}]: [{first_body}] vs [{second_body}]"
    )]
    BodyMismatch {
        /// URL of the first endpoint.
        first_url: String,
        /// URL of the second endpoint.
        second_url: String,
        /// Body captured from the first endpoint.
        first_body: String,
        /// Body captured from the second endpoint.
        second_body: String,
    },
}

/// Use case for establishing equivalence between two captured responses.
///
/// Ordering is fixed: status lines are compared before bodies, and a status
/// mismatch short-circuits so the bodies are never evaluated. Equivalence is
/// purely textual; no structural diffing.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompareResponses;

impl CompareResponses {
    /// Creates the comparison use case.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Compares the two endpoint/response pairs.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::StatusMismatch`] when the status lines
    /// differ, otherwise [`CompareError::BodyMismatch`] when the bodies
    /// differ. Both cite the offending endpoint URLs and values.
    pub fn execute(
        &self,
        first: &EndpointSpec,
        first_response: &CapturedResponse,
        second: &EndpointSpec,
        second_response: &CapturedResponse,
    ) -> Result<(), CompareError> {
        let first_status = first_response.status_line();
        let second_status = second_response.status_line();
        if first_status != second_status {
            return Err(CompareError::StatusMismatch {
                first_url: first.url.clone(),
                second_url: second.url.clone(),
                first_status,
                second_status,
            });
        }

        if first_response.body() != second_response.body() {
            return Err(CompareError::BodyMismatch {
                first_url: first.url.clone(),
                second_url: second.url.clone(),
                first_body: first_response.body().to_string(),
                second_body: second_response.body().to_string(),
            });
        }

        Ok(())
    }
}
