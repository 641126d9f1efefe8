//! Application service layer.
//!
//! Services contain the contact workflow: the validation pipeline, the
//! uniqueness checks and the transactional create/update/delete sequences.
//! They sit between the MCP handlers and the store.

mod contact_service;
pub mod uniqueness;
pub mod validation;

pub use contact_service::{ContactService, ContactServiceImpl};
pub use uniqueness::ensure_unique;
pub use validation::{accept_picture, validate_submission, ValidatedSubmission};
