//! Performance benchmarks for the normalization pipeline.
//!
//! These cover the individual field normalizers and a full create-pipeline
//! pass, which is the hot path when an API layer validates request bodies.

use contact_normalizer::domain::{PersonName, PhoneNumber, TagOverflow, TagSet};
use contact_normalizer::{validate_create, ContactDraft, PipelineConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_name_normalization(c: &mut Criterion) {
    c.bench_function("normalize_name", |b| {
        b.iter(|| PersonName::parse(black_box("  juan carlos DE LA cruz  ")))
    });
}

fn bench_phone_normalization(c: &mut Criterion) {
    c.bench_function("normalize_phone", |b| {
        b.iter(|| PhoneNumber::normalize(black_box("+57 (300) 123-4567"), black_box("+57")))
    });
}

fn bench_tag_normalization(c: &mut Criterion) {
    let raw = ["Work", "work ", "Home", "HOME", "vip", "friend", "family"];
    c.bench_function("normalize_tags", |b| {
        b.iter(|| TagSet::normalize(black_box(raw), 5, TagOverflow::Truncate))
    });
}

fn bench_validate_create(c: &mut Criterion) {
    let config = PipelineConfig::default();
    let draft = ContactDraft {
        first_name: Some("  juan carlos  ".to_string()),
        last_name: Some("PEREZ".to_string()),
        email: Some("juan.carlos@example.com".to_string()),
        phone: Some("+57-300-123-4567".to_string()),
        company: Some("Acme".to_string()),
        tags: Some(
            ["Work", "Home", "VIP"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
        ),
        is_favorite: Some(true),
    };

    c.bench_function("validate_create_full", |b| {
        b.iter(|| validate_create(black_box(&draft), &config))
    });
}

criterion_group!(
    benches,
    bench_name_normalization,
    bench_phone_normalization,
    bench_tag_normalization,
    bench_validate_create
);
criterion_main!(benches);
