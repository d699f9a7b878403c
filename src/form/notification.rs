//! User-facing notifications raised by the form.

use crate::domain::ValidationError;
use crate::error::{NotifyResult, SubmitError};
use crate::models::ContactDraft;
use async_trait::async_trait;
use std::fmt;

/// Whether a notification reports a success or a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A blocking message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: "Success".to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }

    /// Confirmation for a saved contact, built from the values that were submitted.
    pub fn contact_saved(contact: &ContactDraft) -> Self {
        Self::success(format!(
            "Contact saved successfully!\n\nName: {}\nMobile: {}\nCompany: {}",
            contact.display_name(),
            contact.mobile,
            contact.company_or_placeholder()
        ))
    }

    pub fn validation_failed(error: &ValidationError) -> Self {
        Self::error(error.to_string())
    }

    /// Failure notice for any submission error.
    pub fn submit_failed(error: &SubmitError) -> Self {
        match error {
            SubmitError::Validation(err) => Self::validation_failed(err),
            SubmitError::Server { status, body } => Self::error(format!(
                "Failed to save contact. Status: {}\n{}",
                status, body
            )),
            SubmitError::Transport(message) => Self::error(format!(
                "Network error: {}\n\nPlease check your internet connection and try again.",
                message
            )),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NotificationKind::Success
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.title, self.message)
    }
}

/// Presents notifications to the user.
///
/// `notify` returns `Ok` only once the user has acknowledged the notification.
/// The form relies on this to clear the draft after a save is acknowledged, so
/// a notification that could not be shown must return an error.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: &Notification) -> NotifyResult<()>;
}
