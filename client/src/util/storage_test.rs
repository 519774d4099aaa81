use super::*;

#[derive(Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
struct Draft {
    title: String,
    count: u32,
}

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_set_get_remove() {
    let store = MemoryStorage::new();
    assert!(store.is_empty());
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").as_deref(), Some("v"));
    assert_eq!(store.len(), 1);
    store.remove("k").unwrap();
    assert_eq!(store.get("k"), None);
}

#[test]
fn memory_storage_remove_missing_key_is_ok() {
    let store = MemoryStorage::new();
    assert!(store.remove("nothing").is_ok());
}

// =============================================================
// JSON helpers
// =============================================================

#[test]
fn load_json_missing_key() {
    let store = MemoryStorage::new();
    assert_eq!(load_json::<Draft>(&store, "draft"), JsonRead::Missing);
}

#[test]
fn load_json_reads_saved_value() {
    let store = MemoryStorage::new();
    let draft = Draft { title: "notes".into(), count: 3 };
    save_json(&store, "draft", &draft).unwrap();
    assert_eq!(load_json::<Draft>(&store, "draft"), JsonRead::Value(draft));
}

#[test]
fn load_json_reports_malformed_payload() {
    let store = MemoryStorage::new();
    store.set("draft", "{not json").unwrap();
    assert!(matches!(load_json::<Draft>(&store, "draft"), JsonRead::Malformed(_)));
}

// =============================================================
// BrowserStorage outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_without_hydrate() {
    let store = BrowserStorage;
    assert!(store.set("k", "v").is_ok());
    assert_eq!(store.get("k"), None);
    assert!(store.remove("k").is_ok());
}
