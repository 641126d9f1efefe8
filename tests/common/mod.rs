//! Shared fixtures for the contact workflow tests.

#![allow(dead_code)]

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use contact_book_server::config::Config;
use contact_book_server::models::{ContactSubmission, ProfilePicture};
use contact_book_server::repositories::ContactRepository;
use contact_book_server::services::ContactServiceImpl;
use mockable::Clock;
use std::sync::Arc;

/// Clock frozen at a fixed instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// The instant every test service treats as "now".
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// The calendar date the test services treat as today.
pub fn today() -> NaiveDate {
    now().with_timezone(&Local).date_naive()
}

/// Build a workflow over `repository` with default configuration.
pub fn service_with(repository: Arc<dyn ContactRepository>) -> ContactServiceImpl {
    service_with_config(repository, &Config::default())
}

/// Build a workflow over `repository` with a custom configuration.
pub fn service_with_config(
    repository: Arc<dyn ContactRepository>,
    config: &Config,
) -> ContactServiceImpl {
    ContactServiceImpl::new(repository, Arc::new(FixedClock(now())), config)
}

/// A valid submission.
pub fn submission(name: &str, email: &str, phone: &str) -> ContactSubmission {
    ContactSubmission::new(name, email, phone, "1990-05-17")
}

/// The `n`th distinct valid submission.
pub fn numbered_submission(n: usize) -> ContactSubmission {
    ContactSubmission::new(
        "Maria da Silva",
        format!("maria{}@example.com", n),
        format!("11{:08}", n),
        "1990-05-17",
    )
}

/// A small PNG-typed picture.
pub fn png(bytes: &[u8]) -> ProfilePicture {
    ProfilePicture::new(bytes.to_vec(), Some("image/png".to_string()))
}
