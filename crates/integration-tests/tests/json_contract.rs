//! The stable JSON encoding the presentation layer consumes. Field names
//! are camelCase, timestamps are RFC 3339 strings, and `image` disappears
//! from the object when absent.

use rp_core::models::Publication;
use rp_store::PublicationStore;

#[test]
fn feed_entry_encoding() {
    let mut store = PublicationStore::new();
    let created = store
        .create(
            "alice",
            "Gauge wars",
            "Standard vs broad",
            Some("https://img.example/gauge.jpg"),
        )
        .expect("create");
    store.add_comment(created.id, "bob", "team broad").expect("comment");
    store.toggle_favorite(created.id).expect("toggle");

    let value = serde_json::to_value(store.get(created.id).expect("present"))
        .expect("serialize");

    assert_eq!(value["id"], serde_json::json!(created.id));
    assert_eq!(value["author"], "alice");
    assert_eq!(value["image"], "https://img.example/gauge.jpg");
    assert_eq!(value["isFavorite"], serde_json::json!(true));
    assert_eq!(value["comments"][0]["id"], serde_json::json!(1));
    assert_eq!(value["comments"][0]["author"], "bob");

    // chrono's serde emits RFC 3339, which the chrono parser accepts back.
    let raw = value["timestamp"].as_str().expect("timestamp is a string");
    chrono::DateTime::parse_from_rfc3339(raw).expect("RFC 3339 timestamp");
}

#[test]
fn encoding_round_trips_through_the_model() {
    let store = PublicationStore::seeded();
    let json = serde_json::to_string(&store.feed()).expect("serialize feed");

    let decoded: Vec<Publication> = serde_json::from_str(&json).expect("decode");
    assert_eq!(decoded.len(), 3);
    assert_eq!(decoded[0].id, 1);
    assert_eq!(decoded[0].comments.len(), 1);
    assert!(decoded.iter().all(|p| p.image.is_some()));
}
