//! Domain validation errors.

use chrono::NaiveDate;
use std::fmt;

/// Errors that can occur while validating a contact submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was missing or blank.
    Required(&'static str),

    /// The name does not follow the full-name formatting rule.
    InvalidName(String),

    /// The email address is malformed.
    InvalidEmail(String),

    /// The phone number does not have 10 or 11 digits once formatting is stripped.
    InvalidPhoneLength { digits: usize },

    /// The date of birth is not a real `YYYY-MM-DD` calendar date.
    InvalidFormat(String),

    /// The date of birth lies after today.
    FutureDateNotAllowed(NaiveDate),
}

impl ValidationError {
    /// Name of the submission field this error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Required(field) => *field,
            Self::InvalidName(_) => "name",
            Self::InvalidEmail(_) => "email",
            Self::InvalidPhoneLength { .. } => "phone",
            Self::InvalidFormat(_) | Self::FutureDateNotAllowed(_) => "date_of_birth",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required(field) => write!(f, "The {} field is required", field),
            Self::InvalidName(name) => write!(
                f,
                "Invalid name '{}': it must contain at least two words, each starting with an \
                 uppercase letter, except the prepositions 'de', 'do', 'da' and 'e', which must \
                 be lowercase",
                name
            ),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidPhoneLength { digits } => write!(
                f,
                "The phone number must contain between 10 and 11 digits (got {})",
                digits
            ),
            Self::InvalidFormat(value) => write!(
                f,
                "Invalid date format '{}'. Use the format YYYY-MM-DD",
                value
            ),
            Self::FutureDateNotAllowed(date) => write!(
                f,
                "The date of birth cannot be in the future ({})",
                date.format("%Y-%m-%d")
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
