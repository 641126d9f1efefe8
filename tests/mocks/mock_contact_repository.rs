use async_trait::async_trait;
use contact_book_server::domain::ContactId;
use contact_book_server::error::{StoreError, StoreResult};
use contact_book_server::models::{Contact, NewContact, PageRequest};
use contact_book_server::repositories::{
    ContactRepository, ContactTransaction, InMemoryContactStore,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Wraps an in-memory store, counts method calls for verification and can be
/// told to hide existing emails and phones from the uniqueness lookups or to
/// fail every operation as if the store were down.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    store: InMemoryContactStore,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    hide_existing: Arc<AtomicBool>,
    unavailable: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            store: InMemoryContactStore::new(),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            hide_existing: Arc::new(AtomicBool::new(false)),
            unavailable: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Insert a contact directly, bypassing the workflow.
    pub async fn add_contact(&self, contact: NewContact) -> Contact {
        let mut tx = self.store.begin().await.unwrap();
        let contact = tx.insert(contact).await.unwrap();
        tx.commit().await.unwrap();
        contact
    }

    /// Make the `exists_by_*` lookups report every email and phone as free.
    ///
    /// Writes still hit the store's own unique constraint.
    pub fn hide_existing_values(&self, hide: bool) {
        self.hide_existing.store(hide, Ordering::SeqCst);
    }

    /// Fail every call with `StoreError::Unavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of stored contacts.
    pub async fn len(&self) -> usize {
        self.store.len().await
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    fn track_call(&self, method: &str) -> StoreResult<()> {
        track(&self.call_counts, method);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("mock store is down".to_string()));
        }
        Ok(())
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn track(call_counts: &Mutex<HashMap<String, usize>>, method: &str) {
    let mut counts = call_counts.lock().unwrap();
    *counts.entry(method.to_string()).or_insert(0) += 1;
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn find_all(&self) -> StoreResult<Vec<Contact>> {
        self.track_call("find_all")?;
        self.store.find_all().await
    }

    async fn find_page(&self, request: PageRequest) -> StoreResult<(Vec<Contact>, u64)> {
        self.track_call("find_page")?;
        self.store.find_page(request).await
    }

    async fn find_by_id(&self, id: ContactId) -> StoreResult<Option<Contact>> {
        self.track_call("find_by_id")?;
        self.store.find_by_id(id).await
    }

    async fn find_by_substring(&self, term: &str) -> StoreResult<Vec<Contact>> {
        self.track_call("find_by_substring")?;
        self.store.find_by_substring(term).await
    }

    async fn find_page_by_substring(
        &self,
        term: &str,
        request: PageRequest,
    ) -> StoreResult<(Vec<Contact>, u64)> {
        self.track_call("find_page_by_substring")?;
        self.store.find_page_by_substring(term, request).await
    }

    async fn begin(&self) -> StoreResult<Box<dyn ContactTransaction>> {
        self.track_call("begin")?;
        let inner = self.store.begin().await?;
        Ok(Box::new(MockTransaction {
            inner,
            call_counts: Arc::clone(&self.call_counts),
            hide_existing: self.hide_existing.load(Ordering::SeqCst),
        }))
    }
}

struct MockTransaction {
    inner: Box<dyn ContactTransaction>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    hide_existing: bool,
}

impl MockTransaction {
    fn track_call(&self, method: &str) {
        track(&self.call_counts, method);
    }
}

#[async_trait]
impl ContactTransaction for MockTransaction {
    async fn find_by_id(&mut self, id: ContactId) -> StoreResult<Option<Contact>> {
        self.track_call("tx.find_by_id");
        self.inner.find_by_id(id).await
    }

    async fn exists_by_id(&mut self, id: ContactId) -> StoreResult<bool> {
        self.track_call("tx.exists_by_id");
        self.inner.exists_by_id(id).await
    }

    async fn exists_by_email(&mut self, email: &str) -> StoreResult<bool> {
        self.track_call("tx.exists_by_email");
        if self.hide_existing {
            return Ok(false);
        }
        self.inner.exists_by_email(email).await
    }

    async fn exists_by_phone(&mut self, phone: &str) -> StoreResult<bool> {
        self.track_call("tx.exists_by_phone");
        if self.hide_existing {
            return Ok(false);
        }
        self.inner.exists_by_phone(phone).await
    }

    async fn exists_by_email_excluding(
        &mut self,
        email: &str,
        id: ContactId,
    ) -> StoreResult<bool> {
        self.track_call("tx.exists_by_email_excluding");
        if self.hide_existing {
            return Ok(false);
        }
        self.inner.exists_by_email_excluding(email, id).await
    }

    async fn exists_by_phone_excluding(
        &mut self,
        phone: &str,
        id: ContactId,
    ) -> StoreResult<bool> {
        self.track_call("tx.exists_by_phone_excluding");
        if self.hide_existing {
            return Ok(false);
        }
        self.inner.exists_by_phone_excluding(phone, id).await
    }

    async fn insert(&mut self, contact: NewContact) -> StoreResult<Contact> {
        self.track_call("tx.insert");
        self.inner.insert(contact).await
    }

    async fn update(&mut self, contact: Contact) -> StoreResult<Contact> {
        self.track_call("tx.update");
        self.inner.update(contact).await
    }

    async fn delete_by_id(&mut self, id: ContactId) -> StoreResult<()> {
        self.track_call("tx.delete_by_id");
        self.inner.delete_by_id(id).await
    }

    async fn commit(self: Box<Self>) -> StoreResult<()> {
        self.track_call("tx.commit");
        self.inner.commit().await
    }

    async fn rollback(self: Box<Self>) -> StoreResult<()> {
        self.track_call("tx.rollback");
        self.inner.rollback().await
    }
}
