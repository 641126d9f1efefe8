//! Date-of-birth parsing.

use super::errors::ValidationError;
use chrono::NaiveDate;

/// Wire format for dates of birth.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` string into a calendar date.
///
/// Only syntax and calendar validity are checked here; whether the date
/// lies in the future is decided by [`ensure_not_future`].
///
/// # Errors
///
/// Returns `ValidationError::Required` for a blank value and
/// `ValidationError::InvalidFormat` for anything that is not a real date
/// in the expected shape (`1990-02-30`, `1990-1-5`, `05/01/1990`).
pub fn parse_birth_date(value: &str) -> Result<NaiveDate, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required("date_of_birth"));
    }

    if !has_iso_shape(value) {
        return Err(ValidationError::InvalidFormat(value.to_string()));
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidFormat(value.to_string()))
}

/// Reject dates after `today`. `today` itself is accepted.
pub fn ensure_not_future(date: NaiveDate, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    if date > today {
        return Err(ValidationError::FutureDateNotAllowed(date));
    }
    Ok(date)
}

/// Render a date in the wire format.
pub fn format_birth_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

// chrono accepts unpadded fields and signed years; the wire format does not.
fn has_iso_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
