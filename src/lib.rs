//! Contact Book - a single-screen form that collects a contact's details and
//! submits them to a remote endpoint.
//!
//! # Architecture
//!
//! - **domain**: The form's fields and validation errors
//! - **models**: Draft, wire payload and response types
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **client**: HTTP client for the save-contact endpoint
//! - **form**: Form controller, notifications and the submit flow
//! - **ui**: Terminal front-end
//! - **metrics**: Submission and HTTP counters

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod form;
pub mod metrics;
pub mod models;
pub mod ui;

pub use client::{AsyncContactClient, AsyncContactClientImpl, ContactClient};
pub use config::Config;
pub use domain::{ContactField, ValidationError};
pub use error::{ConfigError, SubmitError};
pub use form::{FormController, FormState, Notification, NotificationKind, Notifier, SaveReceipt};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{ContactDraft, ContactPayload, SaveResponse};
