//! Performance benchmarks for the contact workflow.
//!
//! - Field validation of a full submission
//! - Paged listing and paged search over stores of different sizes

use chrono::NaiveDate;
use contact_book_server::config::Config;
use contact_book_server::domain::{is_valid_name, CanonicalPhone};
use contact_book_server::models::ContactSubmission;
use contact_book_server::repositories::InMemoryContactStore;
use contact_book_server::services::{validate_submission, ContactService, ContactServiceImpl};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;

fn seeded_service(rt: &Runtime, count: usize) -> ContactServiceImpl {
    let service = ContactServiceImpl::new(
        Arc::new(InMemoryContactStore::new()),
        Arc::new(mockable::DefaultClock),
        &Config::default(),
    );

    rt.block_on(async {
        for n in 0..count {
            let name = if n % 2 == 0 { "Maria da Silva" } else { "Bruno Costa" };
            service
                .create_contact(
                    ContactSubmission::new(
                        name,
                        format!("person{}@example.com", n),
                        format!("11{:08}", n),
                        "1990-05-17",
                    ),
                    None,
                )
                .await
                .unwrap();
        }
    });

    service
}

fn bench_validation(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let submission = ContactSubmission::new(
        "Maria da Conceição e Silva",
        "maria@example.com",
        "(11) 9 8765-4321",
        "1990-05-17",
    );

    c.bench_function("is_valid_name", |b| {
        b.iter(|| is_valid_name(black_box("Maria da Conceição e Silva")))
    });

    c.bench_function("normalize_phone", |b| {
        b.iter(|| CanonicalPhone::normalize(black_box("(11) 9 8765-4321")))
    });

    c.bench_function("validate_submission", |b| {
        b.iter(|| validate_submission(black_box(&submission), today))
    });
}

fn bench_listing(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("list_contacts_paged");

    for size in [100, 1_000, 10_000] {
        let service = seeded_service(&rt, size);

        group.bench_with_input(BenchmarkId::new("all", size), &service, |b, service| {
            b.to_async(&rt)
                .iter(|| async { service.list_contacts_paged(None, Some(3), Some(20)).await });
        });

        group.bench_with_input(BenchmarkId::new("search", size), &service, |b, service| {
            b.to_async(&rt).iter(|| async {
                service
                    .list_contacts_paged(Some("MARIA"), Some(3), Some(20))
                    .await
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .sample_size(50);
    targets = bench_validation, bench_listing
}

criterion_main!(benches);
