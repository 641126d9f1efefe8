//! Contact model: the submitted shape, the stored record and the presentation DTO.

use crate::domain::{format_birth_date, ContactId};
use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine as _;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Media type recorded when an upload does not declare one.
pub const DEFAULT_PICTURE_TYPE: &str = "application/octet-stream";

/// Raw contact data as received from a caller, before validation.
///
/// The phone may still carry punctuation and the date is an unparsed
/// `YYYY-MM-DD` string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
}

impl ContactSubmission {
    /// Convenience constructor.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        date_of_birth: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            date_of_birth: date_of_birth.into(),
        }
    }
}

/// A binary profile picture together with its media type.
///
/// The payload is shared: cloning a picture, or a contact holding one, does
/// not copy the bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilePicture {
    /// The raw image bytes
    pub bytes: Arc<[u8]>,

    /// Declared media type, e.g. `image/png`
    pub media_type: String,
}

impl ProfilePicture {
    /// Create a picture, falling back to [`DEFAULT_PICTURE_TYPE`] when no
    /// usable media type is declared.
    pub fn new(bytes: Vec<u8>, media_type: Option<String>) -> Self {
        let media_type = media_type
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_PICTURE_TYPE.to_string());

        Self {
            bytes: Arc::from(bytes),
            media_type,
        }
    }

    /// Size of the payload in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the payload is empty. Empty uploads count as "no picture".
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Render as `data:<media type>;base64,<payload>`.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.media_type, B64.encode(&self.bytes[..]))
    }
}

/// Validated contact data that has not been assigned an identity yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    /// Canonical (digits-only) phone
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub profile_picture: Option<ProfilePicture>,
}

impl NewContact {
    /// Attach the identity the store assigned.
    pub fn with_id(self, id: ContactId) -> Contact {
        Contact {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            date_of_birth: self.date_of_birth,
            profile_picture: self.profile_picture,
        }
    }
}

/// A persisted contact record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Identity assigned at creation, immutable thereafter
    pub id: ContactId,

    /// Full name, satisfies the name rule
    pub name: String,

    /// Email address, unique across all contacts
    pub email: String,

    /// Canonical phone (10 or 11 digits), unique across all contacts
    pub phone: String,

    /// Date of birth, never after the day it was submitted
    pub date_of_birth: NaiveDate,

    /// Optional profile picture
    pub profile_picture: Option<ProfilePicture>,
}

impl Contact {
    /// Whether the name, email or phone contains `term`.
    ///
    /// Name and email are compared case-insensitively; the phone is
    /// compared literally.
    pub fn matches_term(&self, term: &str) -> bool {
        let lowered = term.to_lowercase();

        self.name.to_lowercase().contains(&lowered)
            || self.email.to_lowercase().contains(&lowered)
            || self.phone.contains(term)
    }
}

/// The externally visible shape of a contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactView {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// `YYYY-MM-DD`
    pub date_of_birth: String,
    /// Data URI, or `null` when the contact has no picture
    pub profile_picture: Option<String>,
}

impl From<&Contact> for ContactView {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id,
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            date_of_birth: format_birth_date(contact.date_of_birth),
            profile_picture: contact
                .profile_picture
                .as_ref()
                .map(ProfilePicture::to_data_uri),
        }
    }
}
