//! YAML descriptor repository implementation.

use std::path::Path;

use tandem_application::ports::{
    DescriptorError, DescriptorRepository, FileSystem, FileSystemError,
};
use tandem_domain::EndpointSpec;

/// Loads endpoint descriptors from YAML files.
///
/// The document must match the endpoint schema (`url`, optional `method`,
/// optional `properties.headers`); absent fields take their defaults.
pub struct YamlDescriptorRepository<F: FileSystem> {
    fs: F,
}

impl<F: FileSystem> YamlDescriptorRepository<F> {
    /// Creates a new repository over the given file system implementation.
    #[must_use]
    pub const fn new(fs: F) -> Self {
        Self { fs }
    }
}

impl<F: FileSystem> DescriptorRepository for YamlDescriptorRepository<F> {
    async fn load(&self, path: &Path) -> Result<EndpointSpec, DescriptorError> {
        if !self.fs.exists(path).await {
            return Err(DescriptorError::NotFound(path.to_path_buf()));
        }

        let content = self.fs.read_to_string(path).await.map_err(|e| match e {
            FileSystemError::NotFound(p) => DescriptorError::NotFound(p),
            other => DescriptorError::Read {
                path: path.to_path_buf(),
                message: other.to_string(),
            },
        })?;

        let spec: EndpointSpec =
            serde_yaml::from_str(&content).map_err(|e| DescriptorError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        tracing::debug!(path = %path.display(), url = %spec.url, "loaded endpoint descriptor");

        Ok(spec)
    }
}
