//! Error types for the Contact Book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can end a contact submission.
///
/// None of these are retried automatically. Each one is shown to the user
/// and the draft is left untouched so the user can submit again.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// One or more required fields were empty; no request was made
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The endpoint answered with a non-success status
    #[error("Server rejected contact (status {status}): {body}")]
    Server { status: u16, body: String },

    /// The request never produced a response
    #[error("Transport error: {0}")]
    Transport(String),
}

impl SubmitError {
    /// Whether the failure happened before any network activity.
    pub fn is_validation(&self) -> bool {
        matches!(self, SubmitError::Validation(_))
    }
}

/// A notification could not be shown to the user.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// Writing the notification failed
    #[error("Notification could not be shown: {0}")]
    Display(#[from] std::io::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with SubmitError
pub type SubmitResult<T> = Result<T, SubmitError>;

/// Convenience type alias for Results with NotifyError
pub type NotifyResult<T> = Result<T, NotifyError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
