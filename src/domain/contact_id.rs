//! ContactId value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a stored contact.
///
/// Assigned by the store on first save and never changed afterwards.
/// Serialized as a bare integer.
///
/// # Example
///
/// ```
/// use contact_book_server::domain::ContactId;
///
/// let id = ContactId::new(42);
/// assert_eq!(id.value(), 42);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ContactId(i64);

impl ContactId {
    /// Wrap a raw identity.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw identity.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for ContactId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
