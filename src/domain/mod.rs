//! Domain value objects and validation rules.
//!
//! Everything a contact submission must satisfy before it can be stored:
//! the full-name rule, email format, canonical phone digits and the
//! date-of-birth format. All functions here are pure.

pub mod birth_date;
pub mod contact_id;
pub mod email;
pub mod errors;
pub mod name;
pub mod phone;

pub use birth_date::{ensure_not_future, format_birth_date, parse_birth_date, DATE_FORMAT};
pub use contact_id::ContactId;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use name::{is_valid_name, validate_name};
pub use phone::CanonicalPhone;
