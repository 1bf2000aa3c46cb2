//! Trait abstraction for the submission endpoint to enable mocking in tests

use async_trait::async_trait;
use thiserror::Error;

use crate::signup::SignupPayload;

/// Ways a submission request can fail
#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("could not connect: {0}")]
    Unreachable(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("request timed out")]
    Timeout,
    #[error("server returned status: {0}")]
    Status(u16),
}

/// Remote collaborator that accepts one sign-up per call
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionEndpoint: Send + Sync {
    /// Post the payload; `Ok` iff the endpoint answered with a success status
    async fn submit(&self, payload: &SignupPayload) -> Result<(), EndpointError>;
}
