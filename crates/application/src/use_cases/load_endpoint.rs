//! Load endpoint use case.

use std::path::Path;

use tandem_domain::EndpointSpec;

use crate::ports::{DescriptorError, DescriptorRepository};

/// Use case for loading an endpoint descriptor from disk.
pub struct LoadEndpoint<R: DescriptorRepository> {
    repository: R,
}

impl<R: DescriptorRepository> LoadEndpoint<R> {
    /// Creates a new `LoadEndpoint` use case.
    #[must_use]
    pub const fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Loads the descriptor at `path` into an [`EndpointSpec`].
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError::NotFound`] for a missing file and
    /// [`DescriptorError::Parse`] for a document that does not match the
    /// endpoint schema. Both are unrecoverable for the run.
    pub async fn execute(&self, path: &Path) -> Result<EndpointSpec, DescriptorError> {
        self.repository.load(path).await
    }
}
