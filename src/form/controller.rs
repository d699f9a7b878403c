//! Form controller: draft state plus the submit flow.

use super::notification::{Notification, Notifier};
use crate::client::AsyncContactClient;
use crate::domain::ContactField;
use crate::error::{SubmitError, SubmitResult};
use crate::metrics::Metrics;
use crate::models::{ContactDraft, ContactPayload, SaveResponse};
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};
use tracing::{debug, error, info, warn};

/// Where the form is in its (very small) lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// No request in flight
    Editing,

    /// At least one save request is awaiting a response
    Submitting,
}

/// Result of a confirmed save.
#[derive(Debug, Clone)]
pub struct SaveReceipt {
    /// The values that were submitted
    pub contact: ContactDraft,

    /// Body returned by the endpoint
    pub response: SaveResponse,

    /// When the endpoint confirmed the save
    pub saved_at: DateTime<Utc>,

    /// Whether the user saw the confirmation; the draft is only cleared if so
    pub acknowledged: bool,
}

/// Owns the contact draft and drives submissions.
///
/// The form is never locked while a save is in flight: editing continues and
/// a second `submit` issues a second request.
pub struct FormController {
    draft: RwLock<ContactDraft>,
    client: Arc<dyn AsyncContactClient>,
    notifier: Arc<dyn Notifier>,
    in_flight: AtomicUsize,
    metrics: Metrics,
}

impl FormController {
    /// Create a controller with an empty draft.
    pub fn new(client: Arc<dyn AsyncContactClient>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            draft: RwLock::new(ContactDraft::new()),
            client,
            notifier,
            in_flight: AtomicUsize::new(0),
            metrics: Metrics::new(),
        }
    }

    /// Share a metrics collector (e.g. the HTTP client's).
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Snapshot of the current draft.
    pub fn draft(&self) -> ContactDraft {
        self.draft
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn state(&self) -> FormState {
        if self.in_flight.load(Ordering::SeqCst) > 0 {
            FormState::Submitting
        } else {
            FormState::Editing
        }
    }

    /// Replace one field of the draft. Always succeeds.
    pub fn update_field(&self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        debug!("Updating {} ({} chars)", field.key(), value.chars().count());
        self.write_draft().set(field, value);
    }

    /// Validate and send the draft.
    ///
    /// Every outcome is reported through the notifier before this returns.
    /// On success the draft is cleared once the notification is acknowledged;
    /// on any failure it is left exactly as it was.
    pub async fn submit(&self) -> SubmitResult<SaveReceipt> {
        self.metrics.record_submission();
        let contact = self.draft();

        if let Err(err) = contact.validate() {
            warn!("Submission blocked, missing fields: {:?}", err.fields());
            self.metrics.record_validation_failure();
            self.show(&Notification::validation_failed(&err)).await;
            return Err(err.into());
        }

        let payload = ContactPayload::from(&contact);
        info!("Submitting contact {}", contact.display_name());

        let result = {
            let _submitting = InFlight::enter(&self.in_flight);
            self.client.save_contact(&payload).await
        };

        match result {
            Ok(response) => {
                let saved_at = Utc::now();
                self.metrics.record_contact_saved();
                info!(
                    "Contact {} saved (json response: {})",
                    contact.display_name(),
                    response.is_json()
                );

                let acknowledged = self.show(&Notification::contact_saved(&contact)).await;
                if acknowledged {
                    self.write_draft().clear();
                } else {
                    warn!("Save confirmation was not shown, keeping the draft");
                }

                Ok(SaveReceipt {
                    contact,
                    response,
                    saved_at,
                    acknowledged,
                })
            }
            Err(err) => {
                match &err {
                    SubmitError::Server { .. } => self.metrics.record_server_error(),
                    SubmitError::Transport(_) => self.metrics.record_transport_error(),
                    SubmitError::Validation(_) => self.metrics.record_validation_failure(),
                }
                error!("Failed to save contact: {}", err);

                self.show(&Notification::submit_failed(&err)).await;
                Err(err)
            }
        }
    }

    /// Present a notification; `true` once the user has acknowledged it.
    async fn show(&self, notification: &Notification) -> bool {
        match self.notifier.notify(notification).await {
            Ok(()) => true,
            Err(e) => {
                error!("{}", e);
                false
            }
        }
    }

    fn write_draft(&self) -> RwLockWriteGuard<'_, ContactDraft> {
        self.draft.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Counts a request as in flight until dropped.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}
