//! The contact form controller.
//!
//! Holds the draft, validates it on submit, sends it through an
//! [`AsyncContactClient`](crate::client::AsyncContactClient) and reports the outcome
//! through a [`Notifier`].

pub mod controller;
pub mod notification;

pub use controller::{FormController, FormState, SaveReceipt};
pub use notification::{Notification, NotificationKind, Notifier};
