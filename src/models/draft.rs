//! ContactDraft model: the unsaved contents of the form.

use crate::domain::{ContactField, ValidationError};

/// The four form fields as typed by the user.
///
/// Created empty when the form opens, edited one field at a time, read once
/// per submission and cleared only after a confirmed save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub mobile: String,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
}

impl ContactDraft {
    /// Create an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read one field.
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Mobile => &self.mobile,
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Company => &self.company,
        }
    }

    /// Replace one field. No validation happens here.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Mobile => self.mobile = value,
            ContactField::FirstName => self.first_name = value,
            ContactField::LastName => self.last_name = value,
            ContactField::Company => self.company = value,
        }
    }

    /// Required fields that are currently the empty string.
    ///
    /// Whitespace is not trimmed, so `" "` counts as filled.
    pub fn missing_required(&self) -> Vec<ContactField> {
        ContactField::required()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    /// Check that every required field is filled.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing = self.missing_required();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingRequired(missing))
        }
    }

    /// Full name as shown in notifications.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Company, or a placeholder when blank.
    pub fn company_or_placeholder(&self) -> &str {
        if self.company.is_empty() {
            "Not specified"
        } else {
            &self.company
        }
    }

    /// Whether every field is empty.
    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    /// Reset all fields to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
