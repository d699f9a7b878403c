use async_trait::async_trait;
use contact_book::client::AsyncContactClient;
use contact_book::error::{SubmitError, SubmitResult};
use contact_book::models::{ContactPayload, SaveResponse};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{Barrier, Semaphore};

/// Mock client for testing.
///
/// Replies with scripted results in order (a JSON `{}` once the script runs out)
/// and records every payload it was asked to send.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactClient {
    replies: Arc<Mutex<VecDeque<SubmitResult<SaveResponse>>>>,
    payloads: Arc<Mutex<Vec<ContactPayload>>>,
    gate: Option<Arc<Semaphore>>,
    barrier: Option<Arc<Barrier>>,
}

#[allow(dead_code)]
impl MockContactClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold every request until `gate` hands out a permit for it.
    pub fn gated(gate: Arc<Semaphore>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::default()
        }
    }

    /// Hold every request until `barrier` is reached by all parties.
    pub fn with_barrier(barrier: Arc<Barrier>) -> Self {
        Self {
            barrier: Some(barrier),
            ..Self::default()
        }
    }

    pub fn reply_json(&self, value: serde_json::Value) {
        self.push(Ok(SaveResponse::Json(value)));
    }

    pub fn reply_text(&self, text: &str) {
        self.push(Ok(SaveResponse::Text(text.to_string())));
    }

    pub fn reply_server_error(&self, status: u16, body: &str) {
        self.push(Err(SubmitError::Server {
            status,
            body: body.to_string(),
        }));
    }

    pub fn reply_transport_error(&self, message: &str) {
        self.push(Err(SubmitError::Transport(message.to_string())));
    }

    /// Payloads sent so far.
    pub fn payloads(&self) -> Vec<ContactPayload> {
        self.payloads.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.payloads.lock().unwrap().len()
    }

    fn push(&self, reply: SubmitResult<SaveResponse>) {
        self.replies.lock().unwrap().push_back(reply);
    }
}

#[async_trait]
impl AsyncContactClient for MockContactClient {
    async fn save_contact(&self, payload: &ContactPayload) -> SubmitResult<SaveResponse> {
        self.payloads.lock().unwrap().push(payload.clone());

        if let Some(gate) = &self.gate {
            gate.acquire().await.expect("gate closed").forget();
        }
        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }

        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(SaveResponse::Json(serde_json::json!({}))))
    }
}
