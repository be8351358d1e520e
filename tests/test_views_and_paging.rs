//! Integration tests for read-side views: metadata lifecycle and pagination.

use chrono::{TimeZone, Utc};
use contact_normalizer::{
    validate_create, validate_update, ContactDraft, ContactView, PagedContactList, PipelineConfig,
};

fn make_view(id: u64) -> ContactView {
    let draft = ContactDraft {
        first_name: Some("juan".to_string()),
        last_name: Some("perez".to_string()),
        email: Some(format!("juan{}@example.com", id)),
        phone: Some("3001234567".to_string()),
        ..Default::default()
    };
    let record = validate_create(&draft, &PipelineConfig::default()).unwrap();
    let created = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
    ContactView::new(id, record, created)
}

#[test]
fn test_view_lifecycle() {
    let mut view = make_view(1);
    assert!(view.updated_at.is_none());

    let draft = ContactDraft {
        company: Some("Acme".to_string()),
        ..Default::default()
    };
    let patch = validate_update(&draft, &PipelineConfig::default()).unwrap();

    let first_update = Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap();
    view.apply_patch(&patch, first_update);
    assert_eq!(view.updated_at, Some(first_update));
    assert_eq!(view.contact.company.as_deref(), Some("Acme"));

    // A later patch refreshes the stamp
    let second_update = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
    view.apply_patch(&patch, second_update);
    assert_eq!(view.updated_at, Some(second_update));

    // Creation metadata never moves
    assert_eq!(view.id, 1);
    assert_eq!(
        view.created_at,
        Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap()
    );
}

#[test]
fn test_view_serializes_for_api_responses() {
    let view = make_view(42);
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["id"], 42);
    assert_eq!(json["first_name"], "Juan");
    assert_eq!(json["phone"], "+57 300 123 4567");
    assert!(json["updated_at"].is_null());
    assert!(json["created_at"].is_string());
}

#[test]
fn test_paged_list_shape() {
    let all: Vec<ContactView> = (1..=12).map(make_view).collect();

    let page = PagedContactList::paginate(&all, 2, 5);
    assert_eq!(page.items.len(), 5);
    assert_eq!(page.items[0].id, 6);
    assert_eq!(page.total, 12);
    assert_eq!(page.page, 2);
    assert_eq!(page.per_page, 5);

    let json = serde_json::to_value(&page).unwrap();
    assert_eq!(json["total"], 12);
    assert_eq!(json["items"].as_array().unwrap().len(), 5);
}

#[test]
fn test_paged_list_invariant_holds_for_every_page() {
    let all: Vec<ContactView> = (1..=23).map(make_view).collect();

    for page_no in 1..=8 {
        let page = PagedContactList::paginate(&all, page_no, 4);
        assert!(page.items.len() <= page.per_page as usize);
        assert_eq!(page.total, 23);
    }
}

#[test]
fn test_paged_list_round_trip() {
    let all: Vec<ContactView> = (1..=3).map(make_view).collect();
    let page = PagedContactList::paginate(&all, 1, 10);

    let json = serde_json::to_string(&page).unwrap();
    let back: PagedContactList = serde_json::from_str(&json).unwrap();
    assert_eq!(page, back);
}
