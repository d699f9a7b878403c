//! Async wrapper around synchronous ContactClient.
//!
//! This module provides an async interface to the synchronous ContactClient by using
//! `tokio::task::spawn_blocking` to run the HTTP call on a dedicated thread pool,
//! so the form stays responsive while a save is in flight.

use crate::client::ContactClient;
use crate::error::{SubmitError, SubmitResult};
use crate::models::{ContactPayload, SaveResponse};
use async_trait::async_trait;
use std::sync::Arc;

/// Async seam between the form and the network.
///
/// Implementations perform a single attempt per call: no retries, no cancellation.
#[async_trait]
pub trait AsyncContactClient: Send + Sync {
    async fn save_contact(&self, payload: &ContactPayload) -> SubmitResult<SaveResponse>;
}

/// Async wrapper around synchronous ContactClient.
#[derive(Clone)]
pub struct AsyncContactClientImpl {
    client: Arc<ContactClient>,
}

impl AsyncContactClientImpl {
    pub fn new(client: ContactClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncContactClient for AsyncContactClientImpl {
    async fn save_contact(&self, payload: &ContactPayload) -> SubmitResult<SaveResponse> {
        let client = self.client.clone();
        let payload = payload.clone();

        tokio::task::spawn_blocking(move || client.save_contact(&payload))
            .await
            .map_err(|e| SubmitError::Transport(format!("Task join error: {}", e)))?
    }
}
