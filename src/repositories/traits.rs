use crate::domain::ContactId;
use crate::error::StoreResult;
use crate::models::{Contact, NewContact, PageRequest};
use async_trait::async_trait;

/// Read access to stored contacts plus the entry point for writes.
///
/// Every listing is ordered by ascending identity. Reads outside a
/// transaction only ever observe committed data.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Retrieve every contact.
    async fn find_all(&self) -> StoreResult<Vec<Contact>>;

    /// Retrieve one page of contacts and the total number of contacts.
    async fn find_page(&self, request: PageRequest) -> StoreResult<(Vec<Contact>, u64)>;

    /// Retrieve a single contact by identity.
    async fn find_by_id(&self, id: ContactId) -> StoreResult<Option<Contact>>;

    /// Contacts whose name or email contains `term` ignoring case, or whose
    /// phone contains `term` literally.
    async fn find_by_substring(&self, term: &str) -> StoreResult<Vec<Contact>>;

    /// Paged variant of [`ContactRepository::find_by_substring`]; the total
    /// counts matching contacts only.
    async fn find_page_by_substring(
        &self,
        term: &str,
        request: PageRequest,
    ) -> StoreResult<(Vec<Contact>, u64)>;

    /// Open a transaction.
    async fn begin(&self) -> StoreResult<Box<dyn ContactTransaction>>;
}

/// A unit of work against the store.
///
/// Nothing written through a transaction is visible to other readers until
/// [`ContactTransaction::commit`] succeeds. Dropping a transaction without
/// committing discards its writes.
#[async_trait]
pub trait ContactTransaction: Send {
    /// Retrieve a single contact by identity.
    async fn find_by_id(&mut self, id: ContactId) -> StoreResult<Option<Contact>>;

    /// Whether a contact with this identity exists.
    async fn exists_by_id(&mut self, id: ContactId) -> StoreResult<bool>;

    /// Whether any contact uses `email`.
    async fn exists_by_email(&mut self, email: &str) -> StoreResult<bool>;

    /// Whether any contact uses the canonical `phone`.
    async fn exists_by_phone(&mut self, phone: &str) -> StoreResult<bool>;

    /// Whether a contact other than `id` uses `email`.
    async fn exists_by_email_excluding(&mut self, email: &str, id: ContactId)
        -> StoreResult<bool>;

    /// Whether a contact other than `id` uses the canonical `phone`.
    async fn exists_by_phone_excluding(&mut self, phone: &str, id: ContactId)
        -> StoreResult<bool>;

    /// Store a new contact and assign its identity.
    ///
    /// Fails with `StoreError::UniqueViolation` if the email or phone is
    /// already taken.
    async fn insert(&mut self, contact: NewContact) -> StoreResult<Contact>;

    /// Replace an existing contact, keeping its identity.
    ///
    /// Fails with `StoreError::MissingRow` if the identity is unknown and
    /// `StoreError::UniqueViolation` if the email or phone belongs to another
    /// contact.
    async fn update(&mut self, contact: Contact) -> StoreResult<Contact>;

    /// Remove a contact.
    async fn delete_by_id(&mut self, id: ContactId) -> StoreResult<()>;

    /// Publish every write made through this transaction.
    async fn commit(self: Box<Self>) -> StoreResult<()>;

    /// Discard every write made through this transaction.
    async fn rollback(self: Box<Self>) -> StoreResult<()>;
}
