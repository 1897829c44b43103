//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external
//! systems. Each port is a trait that can be implemented by adapters in the
//! infrastructure layer.

mod descriptor_repository;
mod file_system;
mod http_client;

pub use descriptor_repository::{DescriptorError, DescriptorRepository};
pub use file_system::{FileSystem, FileSystemError};
pub use http_client::{HttpClient, HttpClientError};
