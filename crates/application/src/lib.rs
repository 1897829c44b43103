//! Tandem Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for external dependencies)
//! - Use case orchestration for the load → invoke → compare pipeline
//! - Application-level error handling

pub mod ports;
pub mod run_comparison;
pub mod use_cases;

pub use ports::{
    DescriptorError, DescriptorRepository, FileSystem, FileSystemError, HttpClient,
    HttpClientError,
};
pub use run_comparison::{ComparisonReport, RunComparison, RunComparisonInput, RunError, RunResult};
pub use use_cases::{CompareError, CompareResponses, InvokeEndpoint, InvokeError, LoadEndpoint};
