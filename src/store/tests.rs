use super::*;
use serde_json::json;

fn fields(value: serde_json::Value) -> Fields {
    match value {
        serde_json::Value::Object(map) => map,
        _ => panic!("expected an object"),
    }
}

#[test]
fn test_add_generates_id_and_timestamp() {
    let store = SqliteStore::open_in_memory().unwrap();
    let doc = store
        .add("spots", fields(json!({ "title": "Lubang" })))
        .unwrap();

    assert!(!doc.id.is_empty());
    assert!(doc.get("timestamp").is_some());

    let fetched = store.get("spots", &doc.id).unwrap().unwrap();
    assert_eq!(fetched.get("title"), Some(&json!("Lubang")));
    assert_eq!(fetched.timestamp, doc.timestamp);
}

#[test]
fn test_add_keeps_client_timestamp() {
    let store = SqliteStore::open_in_memory().unwrap();
    let doc = store
        .add(
            "reports",
            fields(json!({ "timestamp": "2024-01-02T03:04:05Z" })),
        )
        .unwrap();

    assert_eq!(doc.timestamp.to_rfc3339(), "2024-01-02T03:04:05+00:00");
    assert_eq!(doc.get("timestamp"), Some(&json!("2024-01-02T03:04:05Z")));
}

#[test]
fn test_get_missing_returns_none() {
    let store = SqliteStore::open_in_memory().unwrap();
    assert!(store.get("reports", "nope").unwrap().is_none());
}

#[test]
fn test_collections_are_isolated() {
    let store = SqliteStore::open_in_memory().unwrap();
    store.set("users", "x", fields(json!({ "name": "A" }))).unwrap();
    store.set("admins", "x", fields(json!({ "nama": "B" }))).unwrap();

    assert_eq!(store.fetch_all("users").unwrap().len(), 1);
    assert_eq!(store.fetch_all("admins").unwrap().len(), 1);
    assert_eq!(store.count("reports").unwrap(), 0);
}

#[test]
fn test_fetch_all_keeps_insertion_order() {
    let store = SqliteStore::open_in_memory().unwrap();
    for id in ["c", "a", "b"] {
        store.set("users", id, fields(json!({}))).unwrap();
    }

    let ids: Vec<String> = store
        .fetch_all("users")
        .unwrap()
        .into_iter()
        .map(|d| d.id)
        .collect();
    assert_eq!(ids, vec!["c", "a", "b"]);
}

#[test]
fn test_ordered_by_timestamp() {
    let store = SqliteStore::open_in_memory().unwrap();
    store
        .set("reports", "mid", fields(json!({ "timestamp": "2024-03-01T00:00:00Z" })))
        .unwrap();
    store
        .set("reports", "old", fields(json!({ "timestamp": "2023-12-31T23:59:59Z" })))
        .unwrap();
    store
        .set(
            "reports",
            "new",
            fields(json!({ "timestamp": { "seconds": 1_735_689_600, "nanoseconds": 0 } })),
        )
        .unwrap();

    let newest_first: Vec<String> = store
        .fetch_ordered_by_timestamp("reports", Order::Descending)
        .unwrap()
        .into_iter()
        .map(|d| d.id)
        .collect();
    assert_eq!(newest_first, vec!["new", "mid", "old"]);

    let oldest_first: Vec<String> = store
        .fetch_ordered_by_timestamp("reports", Order::Ascending)
        .unwrap()
        .into_iter()
        .map(|d| d.id)
        .collect();
    assert_eq!(oldest_first, vec!["old", "mid", "new"]);
}

#[test]
fn test_update_fields_merges() {
    let store = SqliteStore::open_in_memory().unwrap();
    store
        .set("users", "u1", fields(json!({ "name": "Budi", "phone": "0812" })))
        .unwrap();

    let updated = store
        .update_fields("users", "u1", fields(json!({ "status": "blocked" })))
        .unwrap();

    assert_eq!(updated.get("name"), Some(&json!("Budi")));
    assert_eq!(updated.get("status"), Some(&json!("blocked")));

    let fetched = store.get("users", "u1").unwrap().unwrap();
    assert_eq!(fetched.fields, updated.fields);
}

#[test]
fn test_update_missing_document_fails() {
    let store = SqliteStore::open_in_memory().unwrap();
    let err = store
        .update_fields("users", "ghost", fields(json!({ "status": "blocked" })))
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));
}

#[test]
fn test_set_overwrites_but_keeps_timestamp() {
    let store = SqliteStore::open_in_memory().unwrap();
    let first = store
        .set("admins", "a1", fields(json!({ "nama": "Lama", "extra": 1 })))
        .unwrap();
    let second = store
        .set("admins", "a1", fields(json!({ "nama": "Baru" })))
        .unwrap();

    assert_eq!(second.timestamp, first.timestamp);
    let fetched = store.get("admins", "a1").unwrap().unwrap();
    assert_eq!(fetched.get("nama"), Some(&json!("Baru")));
    assert!(fetched.get("extra").is_none());
}

#[test]
fn test_delete() {
    let store = SqliteStore::open_in_memory().unwrap();
    let doc = store.add("reports", fields(json!({}))).unwrap();

    store.delete("reports", &doc.id).unwrap();
    assert!(store.get("reports", &doc.id).unwrap().is_none());

    assert!(matches!(
        store.delete("reports", &doc.id),
        Err(StoreError::NotFound { .. })
    ));
}

#[test]
fn test_decode_injects_id() {
    #[derive(serde::Deserialize)]
    struct Named {
        id: String,
        name: String,
    }

    let store = SqliteStore::open_in_memory().unwrap();
    let doc = store.set("users", "u9", fields(json!({ "name": "Rina" }))).unwrap();
    let named: Named = doc.decode().unwrap();

    assert_eq!(named.id, "u9");
    assert_eq!(named.name, "Rina");
}

#[test]
fn test_file_store_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("console.db");

    {
        let store = SqliteStore::open(&path).unwrap();
        store.set("spots", "s1", fields(json!({ "title": "Retak" }))).unwrap();
    }

    let reopened = SqliteStore::open(&path).unwrap();
    let doc = reopened.get("spots", "s1").unwrap().unwrap();
    assert_eq!(doc.get("title"), Some(&json!("Retak")));
}

#[test]
fn test_parse_timestamp_shapes() {
    let a = parse_timestamp(&json!("2024-05-01T08:30:00+07:00")).unwrap();
    let b = parse_timestamp(&json!({ "_seconds": 1_714_527_000, "_nanoseconds": 0 })).unwrap();
    let c = parse_timestamp(&json!(1_714_527_000)).unwrap();

    assert_eq!(a, b);
    assert_eq!(b, c);
    assert!(parse_timestamp(&json!(null)).is_none());
    assert!(parse_timestamp(&json!("kemarin")).is_none());
}

#[test]
fn test_unreadable_timestamp_column_falls_back_to_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("console.db");

    {
        let store = SqliteStore::open(&path).unwrap();
        store
            .set("reports", "old", fields(json!({ "timestamp": "2023-01-01T00:00:00Z" })))
            .unwrap();
        store
            .set("reports", "new", fields(json!({ "timestamp": "2024-06-01T00:00:00Z" })))
            .unwrap();
    }
    {
        let raw = rusqlite::Connection::open(&path).unwrap();
        raw.execute(
            "UPDATE documents SET timestamp = 'garbled' WHERE id = 'new'",
            [],
        )
        .unwrap();
    }

    let store = SqliteStore::open(&path).unwrap();
    let doc = store.get("reports", "new").unwrap().unwrap();
    assert_eq!(doc.timestamp.to_rfc3339(), "2024-06-01T00:00:00+00:00");
}

#[test]
fn test_import_keeps_string_and_numeric_ids() {
    let store = SqliteStore::open_in_memory().unwrap();
    let imported = import_documents(
        &store,
        "users",
        vec![
            json!({ "id": "u1", "name": "Budi" }),
            json!({ "id": 42, "name": "Sari" }),
            json!({ "name": "Tanpa Id" }),
        ],
    )
    .unwrap();

    assert_eq!(imported, 3);
    assert!(store.get("users", "u1").unwrap().is_some());
    let numeric = store.get("users", "42").unwrap().unwrap();
    assert_eq!(numeric.get("name"), Some(&json!("Sari")));
    assert!(numeric.get("id").is_none());
    assert_eq!(store.count("users").unwrap(), 3);
}

#[test]
fn test_import_rejects_unusable_ids() {
    let store = SqliteStore::open_in_memory().unwrap();
    let err = import_documents(
        &store,
        "users",
        vec![json!({ "id": "ok" }), json!({ "id": { "nested": 1 } })],
    )
    .unwrap_err();

    assert!(matches!(err, StoreError::InvalidImport { index: 1, .. }));

    let err = import_documents(&store, "users", vec![json!("not an object")]).unwrap_err();
    assert!(matches!(err, StoreError::InvalidImport { index: 0, .. }));
}
