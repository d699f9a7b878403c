//! ContactField value object.

use std::fmt;
use std::str::FromStr;

/// One of the four inputs on the contact form.
///
/// # Example
///
/// ```
/// use contact_book::domain::ContactField;
///
/// let field: ContactField = "first_name".parse().unwrap();
/// assert_eq!(field, ContactField::FirstName);
/// assert!(field.is_required());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Mobile,
    FirstName,
    LastName,
    Company,
}

impl ContactField {
    /// All fields in display order.
    pub const ALL: [ContactField; 4] = [
        ContactField::Mobile,
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Company,
    ];

    /// Iterate over the fields that must be non-empty before submitting.
    pub fn required() -> impl Iterator<Item = ContactField> {
        Self::ALL.into_iter().filter(|field| field.is_required())
    }

    /// Whether the field must be filled in.
    pub fn is_required(self) -> bool {
        !matches!(self, ContactField::Company)
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            ContactField::Mobile => "Mobile",
            ContactField::FirstName => "First Name",
            ContactField::LastName => "Last Name",
            ContactField::Company => "Company",
        }
    }

    /// Hint shown while the field is empty.
    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::Mobile => "Enter mobile number",
            ContactField::FirstName => "Enter first name",
            ContactField::LastName => "Enter last name",
            ContactField::Company => "Enter company name",
        }
    }

    /// Key used on the wire and in terminal commands.
    pub fn key(self) -> &'static str {
        match self {
            ContactField::Mobile => "mobile",
            ContactField::FirstName => "first_name",
            ContactField::LastName => "last_name",
            ContactField::Company => "company",
        }
    }
}

impl FromStr for ContactField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mobile" => Ok(ContactField::Mobile),
            "first_name" | "firstname" | "first" => Ok(ContactField::FirstName),
            "last_name" | "lastname" | "last" => Ok(ContactField::LastName),
            "company" => Ok(ContactField::Company),
            other => Err(format!("Unknown field: {}", other)),
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
