//! Contact Book Server - a validated contact address book exposed over the
//! Model Context Protocol.
//!
//! # Architecture
//!
//! - **domain**: Pure validators for names, emails, phones and birth dates
//! - **models**: Submitted, stored and presented contact shapes plus pagination
//! - **error**: Workflow, store and configuration error types
//! - **config**: Configuration management from environment variables
//! - **repositories**: Transactional contact store abstraction and the in-memory store
//! - **services**: The contact workflow (list, search, get, create, update, delete)
//! - **server**: MCP protocol server

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;

pub use config::Config;
pub use domain::{CanonicalPhone, ContactId, EmailAddress, ValidationError};
pub use error::{ConfigError, ContactError, StoreError};
pub use models::{Contact, ContactSubmission, ContactView, NewContact, Page, ProfilePicture};
pub use repositories::{ContactRepository, ContactTransaction, InMemoryContactStore};
pub use server::ContactBookServer;
pub use services::{ContactService, ContactServiceImpl};
