//! Data models for the contact form.
//!
//! This module contains the in-memory draft edited by the user, the wire
//! payload sent to the endpoint, and the accepted shapes of a success response.

pub mod draft;
pub mod payload;
pub mod response;

pub use draft::ContactDraft;
pub use payload::ContactPayload;
pub use response::SaveResponse;
