//! Use case orchestration
//!
//! One module per pipeline stage: load, invoke, compare. The composed
//! pipeline lives in [`crate::run_comparison`].

mod compare_responses;
mod invoke_endpoint;
mod load_endpoint;

pub use compare_responses::{CompareError, CompareResponses};
pub use invoke_endpoint::{InvokeEndpoint, InvokeError};
pub use load_endpoint::LoadEndpoint;
