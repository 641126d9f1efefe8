use crate::domain::ContactId;
use crate::error::{StoreError, StoreResult};
use crate::models::{Contact, NewContact, PageRequest};
use crate::repositories::traits::{ContactRepository, ContactTransaction};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Debug, Clone)]
struct StoreState {
    rows: BTreeMap<ContactId, Contact>,
    next_id: i64,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl StoreState {
    fn email_taken(&self, email: &str, excluding: Option<ContactId>) -> bool {
        self.rows
            .values()
            .any(|c| Some(c.id) != excluding && c.email == email)
    }

    fn phone_taken(&self, phone: &str, excluding: Option<ContactId>) -> bool {
        self.rows
            .values()
            .any(|c| Some(c.id) != excluding && c.phone == phone)
    }

    // Storage-level unique constraints, checked on every write.
    fn check_constraints(
        &self,
        email: &str,
        phone: &str,
        excluding: Option<ContactId>,
    ) -> StoreResult<()> {
        if self.email_taken(email, excluding) {
            return Err(StoreError::UniqueViolation("email"));
        }
        if self.phone_taken(phone, excluding) {
            return Err(StoreError::UniqueViolation("phone"));
        }
        Ok(())
    }
}

fn page_of(contacts: Vec<Contact>, request: PageRequest) -> (Vec<Contact>, u64) {
    let total = contacts.len() as u64;
    let content = contacts
        .into_iter()
        .skip(request.offset())
        .take(request.size())
        .collect();
    (content, total)
}

/// Contact store kept in process memory.
///
/// Rows live in a `BTreeMap` keyed by identity, so every listing comes out
/// in ascending identity order. A transaction holds the store lock for its
/// whole lifetime and works on a private copy of the rows (picture payloads
/// are shared with the committed rows, not copied), which makes
/// transactions serialisable: two concurrent creates with the same email
/// cannot both pass the uniqueness check.
///
/// Cloning the store is cheap and every clone shares the same rows.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContactStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryContactStore {
    /// Create an empty store. The first identity handed out is 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed contacts.
    pub async fn len(&self) -> usize {
        self.state.lock().await.rows.len()
    }

    /// Whether the store holds no committed contacts.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactStore {
    async fn find_all(&self) -> StoreResult<Vec<Contact>> {
        let state = self.state.lock().await;
        Ok(state.rows.values().cloned().collect())
    }

    async fn find_page(&self, request: PageRequest) -> StoreResult<(Vec<Contact>, u64)> {
        let state = self.state.lock().await;
        let total = state.rows.len() as u64;
        let content = state
            .rows
            .values()
            .skip(request.offset())
            .take(request.size())
            .cloned()
            .collect();
        Ok((content, total))
    }

    async fn find_by_id(&self, id: ContactId) -> StoreResult<Option<Contact>> {
        let state = self.state.lock().await;
        Ok(state.rows.get(&id).cloned())
    }

    async fn find_by_substring(&self, term: &str) -> StoreResult<Vec<Contact>> {
        let state = self.state.lock().await;
        Ok(state
            .rows
            .values()
            .filter(|c| c.matches_term(term))
            .cloned()
            .collect())
    }

    async fn find_page_by_substring(
        &self,
        term: &str,
        request: PageRequest,
    ) -> StoreResult<(Vec<Contact>, u64)> {
        let matching = self.find_by_substring(term).await?;
        Ok(page_of(matching, request))
    }

    async fn begin(&self) -> StoreResult<Box<dyn ContactTransaction>> {
        let guard = Arc::clone(&self.state).lock_owned().await;
        let working = (*guard).clone();
        Ok(Box::new(InMemoryTransaction { guard, working }))
    }
}

/// Transaction over an [`InMemoryContactStore`].
///
/// Writes go to `working`; `commit` copies it over the guarded state.
/// Dropping the transaction releases the lock and the copy with it.
struct InMemoryTransaction {
    guard: OwnedMutexGuard<StoreState>,
    working: StoreState,
}

#[async_trait]
impl ContactTransaction for InMemoryTransaction {
    async fn find_by_id(&mut self, id: ContactId) -> StoreResult<Option<Contact>> {
        Ok(self.working.rows.get(&id).cloned())
    }

    async fn exists_by_id(&mut self, id: ContactId) -> StoreResult<bool> {
        Ok(self.working.rows.contains_key(&id))
    }

    async fn exists_by_email(&mut self, email: &str) -> StoreResult<bool> {
        Ok(self.working.email_taken(email, None))
    }

    async fn exists_by_phone(&mut self, phone: &str) -> StoreResult<bool> {
        Ok(self.working.phone_taken(phone, None))
    }

    async fn exists_by_email_excluding(
        &mut self,
        email: &str,
        id: ContactId,
    ) -> StoreResult<bool> {
        Ok(self.working.email_taken(email, Some(id)))
    }

    async fn exists_by_phone_excluding(
        &mut self,
        phone: &str,
        id: ContactId,
    ) -> StoreResult<bool> {
        Ok(self.working.phone_taken(phone, Some(id)))
    }

    async fn insert(&mut self, contact: NewContact) -> StoreResult<Contact> {
        self.working
            .check_constraints(&contact.email, &contact.phone, None)?;

        let id = ContactId::new(self.working.next_id);
        self.working.next_id += 1;

        let stored = contact.with_id(id);
        self.working.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&mut self, contact: Contact) -> StoreResult<Contact> {
        if !self.working.rows.contains_key(&contact.id) {
            return Err(StoreError::MissingRow(contact.id));
        }

        self.working
            .check_constraints(&contact.email, &contact.phone, Some(contact.id))?;

        self.working.rows.insert(contact.id, contact.clone());
        Ok(contact)
    }

    async fn delete_by_id(&mut self, id: ContactId) -> StoreResult<()> {
        self.working
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::MissingRow(id))
    }

    async fn commit(self: Box<Self>) -> StoreResult<()> {
        let InMemoryTransaction { mut guard, working } = *self;
        *guard = working;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> StoreResult<()> {
        Ok(())
    }
}
