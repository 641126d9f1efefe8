//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::{ContactId, ValidationError};
use thiserror::Error;

/// Errors returned by the contact workflow.
///
/// None of these are retryable: the caller has to fix the input or the
/// referenced state.
#[derive(Error, Debug)]
pub enum ContactError {
    /// A submission field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The referenced contact does not exist
    #[error("Contact not found with id: {0}")]
    NotFound(ContactId),

    /// Another contact already claims this email or phone
    #[error("The {field} is already in use by another contact")]
    Conflict { field: &'static str },

    /// The uploaded profile picture exceeds the configured limit
    #[error("Profile picture is too large ({size} bytes, limit {limit} bytes)")]
    PictureTooLarge { size: usize, limit: usize },

    /// Unexpected failure inside the store
    #[error("Internal storage failure: {0}")]
    Internal(String),
}

impl ContactError {
    /// Whether the error was caused by the submitted data rather than by
    /// missing or conflicting state.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::PictureTooLarge { .. }
        )
    }
}

/// Errors raised by a contact store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A write would break the uniqueness of `field`
    #[error("Unique constraint violated on {0}")]
    UniqueViolation(&'static str),

    /// The row to update or delete does not exist
    #[error("Row not found: {0}")]
    MissingRow(ContactId),

    /// The store could not serve the request
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl From<StoreError> for ContactError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UniqueViolation(field) => ContactError::Conflict { field },
            StoreError::MissingRow(id) => ContactError::NotFound(id),
            other => ContactError::Internal(other.to_string()),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
