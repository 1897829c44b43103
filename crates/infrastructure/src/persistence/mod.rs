//! Descriptor persistence adapters

mod descriptor_repository;
mod file_system;

pub use descriptor_repository::YamlDescriptorRepository;
pub use file_system::TokioFileSystem;
