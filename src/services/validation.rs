//! Submission validation pipeline.
//!
//! Each field is checked by its own validator and the first failure wins, in
//! the order name, email, phone, date of birth.

use crate::domain::{
    ensure_not_future, parse_birth_date, validate_name, CanonicalPhone, EmailAddress,
    ValidationError,
};
use crate::error::{ContactError, ContactResult};
use crate::models::{ContactSubmission, ProfilePicture};
use chrono::NaiveDate;

/// A submission whose every field passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSubmission {
    pub name: String,
    pub email: EmailAddress,
    pub phone: CanonicalPhone,
    pub date_of_birth: NaiveDate,
}

/// Run the full pipeline against `submission`, treating `today` as the
/// latest acceptable date of birth.
pub fn validate_submission(
    submission: &ContactSubmission,
    today: NaiveDate,
) -> Result<ValidatedSubmission, ValidationError> {
    let name = validate_name(&submission.name)?.to_string();
    let email = EmailAddress::new(submission.email.as_str())?;
    let phone = CanonicalPhone::normalize(&submission.phone)?;
    let date_of_birth = ensure_not_future(parse_birth_date(&submission.date_of_birth)?, today)?;

    Ok(ValidatedSubmission {
        name,
        email,
        phone,
        date_of_birth,
    })
}

/// Drop empty uploads and reject pictures above `limit` bytes.
pub fn accept_picture(
    picture: Option<ProfilePicture>,
    limit: usize,
) -> ContactResult<Option<ProfilePicture>> {
    match picture {
        Some(picture) if picture.is_empty() => Ok(None),
        Some(picture) if picture.len() > limit => Err(ContactError::PictureTooLarge {
            size: picture.len(),
            limit,
        }),
        other => Ok(other),
    }
}
