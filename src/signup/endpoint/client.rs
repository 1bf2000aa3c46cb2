//! HTTP client for the newsletter submission endpoint
//!
//! Posts each sign-up as a multipart form, the way a browser would submit
//! the page form.

use async_trait::async_trait;
use reqwest::multipart::Form;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use super::traits::{EndpointError, SubmissionEndpoint};
use crate::signup::SignupPayload;

/// Endpoint reached over HTTP
pub struct HttpEndpoint {
    http: Client,
    url: String,
}

impl HttpEndpoint {
    /// Create a client for `url` whose requests give up after `timeout`
    pub fn new(url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SubmissionEndpoint for HttpEndpoint {
    async fn submit(&self, payload: &SignupPayload) -> Result<(), EndpointError> {
        let form = payload
            .form_fields()
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value));

        let response = self
            .http
            .post(&self.url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    EndpointError::Timeout
                } else if e.is_connect() {
                    EndpointError::Unreachable(e.to_string())
                } else {
                    EndpointError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        debug!(status = status.as_u16(), "signup endpoint responded");
        if status.is_success() {
            Ok(())
        } else {
            warn!(status = status.as_u16(), "signup endpoint rejected submission");
            Err(EndpointError::Status(status.as_u16()))
        }
    }
}
