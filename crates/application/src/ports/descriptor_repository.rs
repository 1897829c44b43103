//! Descriptor repository port.

use std::path::{Path, PathBuf};

use tandem_domain::EndpointSpec;

/// Error type for descriptor loading.
///
/// Every variant is fatal for the run: a comparison cannot proceed without
/// both descriptors.
#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    /// Descriptor file missing.
    #[error("endpoint descriptor not found: {0}")]
    NotFound(PathBuf),

    /// Descriptor content does not decode into the endpoint schema.
    #[error("failed to parse endpoint descriptor [{path}]: {message}")]
    Parse {
        /// Path of the offending descriptor.
        path: PathBuf,
        /// Decoder diagnostic.
        message: String,
    },

    /// Descriptor exists but could not be read.
    #[error("failed to read endpoint descriptor [{path}]: {message}")]
    Read {
        /// Path of the offending descriptor.
        path: PathBuf,
        /// Underlying file system diagnostic.
        message: String,
    },
}

/// Port for loading endpoint descriptors.
///
/// Given a filesystem path, produce a fully populated [`EndpointSpec`].
/// Fields absent in the document take their documented defaults. The load
/// has no side effects beyond the read.
pub trait DescriptorRepository: Send + Sync {
    /// Loads the descriptor at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError::NotFound`] if the path does not exist and
    /// [`DescriptorError::Parse`] if the document cannot be decoded.
    fn load(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<EndpointSpec, DescriptorError>> + Send;
}
