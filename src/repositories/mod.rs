mod in_memory_contact_repository;
mod traits;

pub use in_memory_contact_repository::InMemoryContactStore;
pub use traits::{ContactRepository, ContactTransaction};
