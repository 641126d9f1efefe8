//! CanonicalPhone value object.

use super::errors::ValidationError;
use serde::{Serialize, Serializer};
use std::fmt;

/// Minimum number of digits in a canonical phone.
pub const MIN_PHONE_DIGITS: usize = 10;

/// Maximum number of digits in a canonical phone.
pub const MAX_PHONE_DIGITS: usize = 11;

/// A phone number reduced to its digits.
///
/// This is the form that is stored and compared for uniqueness, so
/// `(11) 98765-4321` and `11 987654321` are the same number.
///
/// # Example
///
/// ```
/// use contact_book_server::domain::CanonicalPhone;
///
/// let phone = CanonicalPhone::normalize("(11) 9 8765-4321").unwrap();
/// assert_eq!(phone.as_str(), "11987654321");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalPhone(String);

impl CanonicalPhone {
    /// Strip every non-digit character and check the digit count.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Required` when `raw` is blank and
    /// `ValidationError::InvalidPhoneLength` unless 10 or 11 digits remain.
    pub fn normalize(raw: &str) -> Result<Self, ValidationError> {
        if raw.trim().is_empty() {
            return Err(ValidationError::Required("phone"));
        }

        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

        if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits.len()) {
            return Err(ValidationError::InvalidPhoneLength {
                digits: digits.len(),
            });
        }

        Ok(Self(digits))
    }

    /// Get the digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for CanonicalPhone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for CanonicalPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
