//! Data models for the contact book.
//!
//! This module contains the submitted, stored and presented shapes of a
//! contact plus the pagination envelope used by list operations.

pub mod contact;
pub mod page;

pub use contact::{
    Contact, ContactSubmission, ContactView, NewContact, ProfilePicture, DEFAULT_PICTURE_TYPE,
};
pub use page::{Page, PageRequest};
