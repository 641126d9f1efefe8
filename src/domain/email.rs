//! EmailAddress value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_\-.]+@([A-Za-z0-9_\-]+\.)+[A-Za-z0-9_\-]{2,4}$")
        .expect("email pattern is valid")
});

/// A validated email address.
///
/// Stored exactly as submitted; uniqueness is compared on this exact form.
///
/// # Example
///
/// ```
/// use contact_book_server::domain::EmailAddress;
///
/// let email = EmailAddress::new("maria@example.com").unwrap();
/// assert_eq!(email.as_str(), "maria@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Required` for a blank value and
    /// `ValidationError::InvalidEmail` if the format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if email.trim().is_empty() {
            return Err(ValidationError::Required("email"));
        }

        if !EMAIL_PATTERN.is_match(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        let email = EmailAddress::new("user@example.com").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }

    #[test]
    fn test_email_validates_format() {
        assert!(EmailAddress::new("invalid").is_err());
        assert!(EmailAddress::new("@example.com").is_err());
        assert!(EmailAddress::new("user@").is_err());
        assert!(EmailAddress::new("user@domain").is_err());
        assert!(EmailAddress::new("user@@example.com").is_err());
        assert!(EmailAddress::new("user@example.technology").is_err());
        assert!(EmailAddress::new("first.last@example.com").is_ok());
        assert!(EmailAddress::new("user-name@mail.example.com.br").is_ok());
    }

    #[test]
    fn test_email_rejects_non_ascii_word_characters() {
        assert!(matches!(
            EmailAddress::new("joão@exemplo.com"),
            Err(ValidationError::InvalidEmail(_))
        ));
        assert!(EmailAddress::new("ana@exemplo.çom").is_err());
        assert!(EmailAddress::new("ana@exêmplo.com").is_err());
        assert!(EmailAddress::new("joao_1@exemplo.com").is_ok());
    }

    #[test]
    fn test_email_blank_is_required() {
        assert_eq!(
            EmailAddress::new("   "),
            Err(ValidationError::Required("email"))
        );
    }

    #[test]
    fn test_email_serialization() {
        let email = EmailAddress::new("user@example.com").unwrap();
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"user@example.com\"");
    }
}
