//! Domain validation errors.

use super::field::ContactField;
use std::fmt;

/// Errors that can occur while validating a contact draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields are empty.
    MissingRequired(Vec<ContactField>),
}

impl ValidationError {
    /// The fields that failed validation.
    pub fn fields(&self) -> &[ContactField] {
        match self {
            Self::MissingRequired(fields) => fields,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // The message always lists every required field, not just the missing ones.
            Self::MissingRequired(_) => {
                let labels: Vec<&str> = ContactField::required()
                    .map(|field| field.label())
                    .collect();
                write!(
                    f,
                    "Please fill in all required fields ({})",
                    labels.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
