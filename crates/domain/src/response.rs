//! Captured response type

use std::fmt;

/// The captured outcome of invoking an endpoint once.
///
/// Constructed once per invocation and immutable; never cached or reused
/// across runs. Only what the comparator reads is captured: the status line
/// and the body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedResponse {
    status: u16,
    status_text: String,
    body: String,
}

impl CapturedResponse {
    /// Creates a captured response.
    #[must_use]
    pub fn new(status: u16, status_text: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }

    /// Returns the numeric status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Renders the status line, e.g. `200 OK`.
    ///
    /// Falls back to the bare code when no reason phrase was captured.
    #[must_use]
    pub fn status_line(&self) -> String {
        if self.status_text.is_empty() {
            self.status.to_string()
        } else {
            format!("{} {}", self.status, self.status_text)
        }
    }

    /// Returns the response body text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

impl fmt::Display for CapturedResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.status_line())
    }
}
