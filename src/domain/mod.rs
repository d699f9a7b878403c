//! Domain types for the contact form.
//!
//! The form knows exactly four fields. `ContactField` names them and carries
//! their presentation details, and `ValidationError` reports the required
//! ones that were left empty.

pub mod errors;
pub mod field;

pub use errors::ValidationError;
pub use field::ContactField;
