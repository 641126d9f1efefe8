//! Contact service layer.
//!
//! Business logic for listing, searching, creating, updating and deleting
//! contacts. Every write runs inside one store transaction that covers both
//! the uniqueness checks and the write itself.

use crate::config::Config;
use crate::domain::ContactId;
use crate::error::{ContactError, ContactResult};
use crate::models::{
    Contact, ContactSubmission, ContactView, NewContact, Page, PageRequest, ProfilePicture,
};
use crate::repositories::{ContactRepository, ContactTransaction};
use crate::services::uniqueness::ensure_unique;
use crate::services::validation::{accept_picture, validate_submission, ValidatedSubmission};
use async_trait::async_trait;
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// All contacts, or those matching `search` when it is not blank.
    async fn list_contacts(&self, search: Option<&str>) -> ContactResult<Vec<ContactView>>;

    /// One page of contacts, optionally filtered by `search`.
    ///
    /// A negative or missing page becomes 0; a non-positive or missing size
    /// becomes the configured default.
    async fn list_contacts_paged(
        &self,
        search: Option<&str>,
        page: Option<i64>,
        size: Option<i64>,
    ) -> ContactResult<Page<ContactView>>;

    /// Get a single contact.
    async fn get_contact(&self, id: ContactId) -> ContactResult<ContactView>;

    /// Validate and store a new contact.
    async fn create_contact(
        &self,
        submission: ContactSubmission,
        picture: Option<ProfilePicture>,
    ) -> ContactResult<ContactView>;

    /// Replace every field of an existing contact except its identity.
    ///
    /// The stored picture is kept when `picture` is `None`.
    async fn update_contact(
        &self,
        id: ContactId,
        submission: ContactSubmission,
        picture: Option<ProfilePicture>,
    ) -> ContactResult<ContactView>;

    /// Remove a contact.
    async fn delete_contact(&self, id: ContactId) -> ContactResult<()>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    repository: Arc<dyn ContactRepository>,
    clock: Arc<dyn Clock + Send + Sync>,
    default_page_size: usize,
    max_page_size: usize,
    max_picture_bytes: usize,
}

impl ContactServiceImpl {
    /// Create a new contact service.
    pub fn new(
        repository: Arc<dyn ContactRepository>,
        clock: Arc<dyn Clock + Send + Sync>,
        config: &Config,
    ) -> Self {
        Self {
            repository,
            clock,
            default_page_size: config.default_page_size,
            max_page_size: config.max_page_size,
            max_picture_bytes: config.max_picture_bytes,
        }
    }

    fn today(&self) -> NaiveDate {
        self.clock.local().date_naive()
    }

    fn validate(&self, submission: &ContactSubmission) -> ContactResult<ValidatedSubmission> {
        validate_submission(submission, self.today()).map_err(|e| {
            warn!("Rejected contact submission ({}): {}", e.field(), e);
            ContactError::from(e)
        })
    }

    async fn insert_contact(
        tx: &mut dyn ContactTransaction,
        validated: ValidatedSubmission,
        picture: Option<ProfilePicture>,
    ) -> ContactResult<Contact> {
        ensure_unique(tx, validated.email.as_str(), validated.phone.as_str(), None).await?;

        let contact = NewContact {
            name: validated.name,
            email: validated.email.into_inner(),
            phone: validated.phone.into_inner(),
            date_of_birth: validated.date_of_birth,
            profile_picture: picture,
        };

        Ok(tx.insert(contact).await?)
    }

    async fn replace_contact(
        &self,
        tx: &mut dyn ContactTransaction,
        id: ContactId,
        submission: &ContactSubmission,
        picture: Option<ProfilePicture>,
    ) -> ContactResult<Contact> {
        let mut existing = tx
            .find_by_id(id)
            .await?
            .ok_or(ContactError::NotFound(id))?;

        let validated = self.validate(submission)?;
        let picture = accept_picture(picture, self.max_picture_bytes)?;

        ensure_unique(
            tx,
            validated.email.as_str(),
            validated.phone.as_str(),
            Some(id),
        )
        .await?;

        existing.name = validated.name;
        existing.email = validated.email.into_inner();
        existing.phone = validated.phone.into_inner();
        existing.date_of_birth = validated.date_of_birth;
        if let Some(picture) = picture {
            info!("Replacing profile picture for contact {}", id);
            existing.profile_picture = Some(picture);
        }

        Ok(tx.update(existing).await?)
    }

    async fn remove_contact(tx: &mut dyn ContactTransaction, id: ContactId) -> ContactResult<()> {
        if !tx.exists_by_id(id).await? {
            return Err(ContactError::NotFound(id));
        }
        Ok(tx.delete_by_id(id).await?)
    }

    fn search_term(search: Option<&str>) -> Option<&str> {
        search.filter(|term| !term.trim().is_empty())
    }
}

/// Commit on success, roll back on failure.
async fn finish<T>(
    tx: Box<dyn ContactTransaction>,
    outcome: ContactResult<T>,
) -> ContactResult<T> {
    match outcome {
        Ok(value) => {
            tx.commit().await.map_err(|e| {
                error!("Failed to commit transaction: {}", e);
                ContactError::from(e)
            })?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                error!("Failed to roll back transaction: {}", rollback_err);
            }
            Err(err)
        }
    }
}

fn log_internal(err: ContactError) -> ContactError {
    if let ContactError::Internal(ref message) = err {
        error!("Contact store failure: {}", message);
    }
    err
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn list_contacts(&self, search: Option<&str>) -> ContactResult<Vec<ContactView>> {
        let contacts = match Self::search_term(search) {
            Some(term) => {
                debug!("Searching contacts for '{}'", term);
                self.repository.find_by_substring(term).await
            }
            None => {
                debug!("Listing all contacts");
                self.repository.find_all().await
            }
        }
        .map_err(|e| log_internal(e.into()))?;

        Ok(contacts.iter().map(ContactView::from).collect())
    }

    async fn list_contacts_paged(
        &self,
        search: Option<&str>,
        page: Option<i64>,
        size: Option<i64>,
    ) -> ContactResult<Page<ContactView>> {
        let request =
            PageRequest::normalized(page, size, self.default_page_size, self.max_page_size);

        let (contacts, total) = match Self::search_term(search) {
            Some(term) => {
                debug!(
                    "Searching contacts for '{}' (page {}, size {})",
                    term,
                    request.page(),
                    request.size()
                );
                self.repository.find_page_by_substring(term, request).await
            }
            None => {
                debug!(
                    "Listing contacts (page {}, size {})",
                    request.page(),
                    request.size()
                );
                self.repository.find_page(request).await
            }
        }
        .map_err(|e| log_internal(e.into()))?;

        let page = Page::new(contacts, request, total).map(|c| ContactView::from(&c));
        debug!(
            "Returning {} contacts (page {} of {})",
            page.content.len(),
            page.page_number + 1,
            page.total_pages
        );
        Ok(page)
    }

    async fn get_contact(&self, id: ContactId) -> ContactResult<ContactView> {
        let contact = self
            .repository
            .find_by_id(id)
            .await
            .map_err(|e| log_internal(e.into()))?
            .ok_or(ContactError::NotFound(id))?;

        Ok(ContactView::from(&contact))
    }

    async fn create_contact(
        &self,
        submission: ContactSubmission,
        picture: Option<ProfilePicture>,
    ) -> ContactResult<ContactView> {
        info!("Creating contact: {}", submission.name);

        let validated = self.validate(&submission)?;
        let picture = accept_picture(picture, self.max_picture_bytes)?;

        let mut tx = self
            .repository
            .begin()
            .await
            .map_err(|e| log_internal(e.into()))?;
        let outcome = Self::insert_contact(tx.as_mut(), validated, picture).await;
        let contact = finish(tx, outcome).await.map_err(log_internal)?;

        info!("Contact created with id {}", contact.id);
        Ok(ContactView::from(&contact))
    }

    async fn update_contact(
        &self,
        id: ContactId,
        submission: ContactSubmission,
        picture: Option<ProfilePicture>,
    ) -> ContactResult<ContactView> {
        info!("Updating contact {}", id);

        let mut tx = self
            .repository
            .begin()
            .await
            .map_err(|e| log_internal(e.into()))?;
        let outcome = self
            .replace_contact(tx.as_mut(), id, &submission, picture)
            .await;
        let contact = finish(tx, outcome).await.map_err(log_internal)?;

        info!("Contact {} updated", contact.id);
        Ok(ContactView::from(&contact))
    }

    async fn delete_contact(&self, id: ContactId) -> ContactResult<()> {
        info!("Deleting contact {}", id);

        let mut tx = self
            .repository
            .begin()
            .await
            .map_err(|e| log_internal(e.into()))?;
        let outcome = Self::remove_contact(tx.as_mut(), id).await;
        finish(tx, outcome).await.map_err(log_internal)?;

        info!("Contact {} deleted", id);
        Ok(())
    }
}
