//! HTTP client for the save-contact endpoint.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. It performs exactly one POST per call and maps
//! the outcome onto success, server error or transport error.

mod async_wrapper;
pub use async_wrapper::{AsyncContactClient, AsyncContactClientImpl};

use crate::config::Config;
use crate::error::{SubmitError, SubmitResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::{ContactPayload, SaveResponse};
use std::io::Read;
use std::sync::Arc;

/// HTTP client for the save-contact endpoint.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`. No timeout is
/// configured: a call either resolves or fails at the transport layer.
#[derive(Clone)]
pub struct ContactClient {
    /// Full URL of the endpoint
    endpoint_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ContactClient {
    /// Create a new ContactClient from configuration.
    pub fn new(config: &Config) -> Self {
        Self::with_endpoint(config.endpoint_url.clone())
    }

    /// Create a ContactClient with a custom endpoint (useful for testing).
    #[doc(hidden)]
    pub fn with_endpoint(endpoint_url: String) -> Self {
        let agent = ureq::AgentBuilder::new().build();

        Self {
            endpoint_url,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Endpoint this client posts to.
    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// Submit a contact.
    ///
    /// A 2xx answer is a success whether its body is JSON or plain text. Any
    /// other status becomes [`SubmitError::Server`] with the body verbatim, and
    /// a request that never completes becomes [`SubmitError::Transport`].
    pub fn save_contact(&self, payload: &ContactPayload) -> SubmitResult<SaveResponse> {
        let timer = HttpTimer::new(self.metrics.clone());

        tracing::debug!("POST {}", self.endpoint_url);
        tracing::debug!(
            "Request body: {}",
            serde_json::to_string(payload).unwrap_or_else(|_| "<invalid json>".to_string())
        );

        let result = self
            .agent
            .post(&self.endpoint_url)
            .set("Content-Type", "application/json")
            .send_json(payload);
        timer.complete();

        match result {
            Ok(response) => {
                let status = response.status();
                tracing::debug!("POST {} - Response status: {}", self.endpoint_url, status);
                let body = Self::read_body(response)?;

                if (200..300).contains(&status) {
                    tracing::debug!("Raw API response: {}", body);
                    Ok(SaveResponse::from_body(body))
                } else {
                    tracing::error!("API error response (status {}): {}", status, body);
                    Err(SubmitError::Server { status, body })
                }
            }
            Err(ureq::Error::Status(status, response)) => {
                let body = Self::read_body(response)?;
                tracing::error!("API error response (status {}): {}", status, body);
                Err(SubmitError::Server { status, body })
            }
            Err(ureq::Error::Transport(transport)) => {
                tracing::error!("POST {} - Network error: {}", self.endpoint_url, transport);
                Err(SubmitError::Transport(transport.to_string()))
            }
        }
    }

    /// Read a response body as text, whatever its size or encoding.
    ///
    /// Invalid UTF-8 is replaced rather than rejected. A body that cannot be
    /// read at all means the request did not complete.
    fn read_body(response: ureq::Response) -> SubmitResult<String> {
        let mut bytes = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut bytes)
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
