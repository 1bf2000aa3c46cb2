//! Submission endpoint module for the newsletter sign-up POST

mod client;
mod traits;

pub use client::HttpEndpoint;
pub use traits::{EndpointError, SubmissionEndpoint};

#[cfg(test)]
pub use traits::MockSubmissionEndpoint;
