//! Tandem Domain - Core types for the endpoint parity checker
//!
//! This crate defines the domain model: endpoint descriptors, the supported
//! HTTP method set, and captured responses. All types here are pure Rust
//! with no I/O dependencies.

pub mod endpoint;
pub mod error;
pub mod response;

pub use endpoint::{EndpointSpec, Header, Headers, HttpMethod, PreparedRequest, Properties};
pub use error::{DomainError, DomainResult};
pub use response::CapturedResponse;
