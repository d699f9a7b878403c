//! Wire representation of a contact submission.

use super::draft::ContactDraft;
use serde::Serialize;

/// JSON body sent to the save endpoint.
///
/// Field order matches the documented wire shape:
/// `{"mobile", "first_name", "last_name", "company"}`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ContactPayload {
    pub mobile: String,
    pub first_name: String,
    pub last_name: String,
    /// Always present; empty when the user left it blank
    pub company: String,
}

impl From<&ContactDraft> for ContactPayload {
    fn from(draft: &ContactDraft) -> Self {
        Self {
            mobile: draft.mobile.clone(),
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            company: draft.company.clone(),
        }
    }
}
