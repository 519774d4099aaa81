use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::state::session::Role;
use crate::util::storage::MemoryStorage;

fn patient() -> Session {
    Session::new("user123", "Demo User", "demo@example.com", Role::Patient, None)
}

fn store_with(storage: &Arc<MemoryStorage>) -> SessionStore {
    SessionStore::new(Arc::clone(storage) as Arc<dyn KeyValueStore>)
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn new_store_is_loading_and_signed_out() {
    let store = store_with(&Arc::new(MemoryStorage::new()));
    let state = store.current();
    assert!(state.loading);
    assert!(state.session.is_none());
}

#[test]
fn load_with_empty_storage_finishes_signed_out() {
    let store = store_with(&Arc::new(MemoryStorage::new()));
    store.init();
    let state = store.current();
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn reload_restores_persisted_session() {
    let storage = Arc::new(MemoryStorage::new());
    let first = store_with(&storage);
    first.init();
    first.set(patient());

    let second = store_with(&storage);
    second.init();
    assert!(second.is_authenticated());
    assert_eq!(second.current().session, Some(patient()));
}

#[test]
fn load_discards_malformed_json() {
    let storage = Arc::new(MemoryStorage::new());
    storage.set(SESSION_STORAGE_KEY, "{\"userId\": ").unwrap();
    let store = store_with(&storage);
    store.init();
    assert!(!store.is_authenticated());
    assert!(!store.current().loading);
    assert_eq!(storage.get(SESSION_STORAGE_KEY), None);
}

#[test]
fn load_discards_unknown_role() {
    let storage = Arc::new(MemoryStorage::new());
    storage
        .set(
            SESSION_STORAGE_KEY,
            r#"{"userId":"u1","displayName":"A","email":"a@b.c","role":"wizard"}"#,
        )
        .unwrap();
    let store = store_with(&storage);
    store.init();
    assert!(!store.is_authenticated());
}

#[test]
fn load_discards_blank_user_id() {
    let storage = Arc::new(MemoryStorage::new());
    storage
        .set(SESSION_STORAGE_KEY, r#"{"userId":"","displayName":"A","email":"a@b.c","role":"patient"}"#)
        .unwrap();
    assert_eq!(read_session(storage.as_ref()), Err(SessionReadError::MissingUserId));
    let store = store_with(&storage);
    store.init();
    assert!(!store.is_authenticated());
}

#[test]
fn load_accepts_null_role() {
    let storage = Arc::new(MemoryStorage::new());
    storage
        .set(SESSION_STORAGE_KEY, r#"{"userId":"u1","displayName":"A","email":"a@b.c","role":null}"#)
        .unwrap();
    let store = store_with(&storage);
    store.init();
    assert_eq!(store.current().role(), Role::None);
    assert!(store.is_authenticated());
}

// =============================================================================
// set / clear
// =============================================================================

#[test]
fn set_writes_through_to_storage() {
    let storage = Arc::new(MemoryStorage::new());
    let store = store_with(&storage);
    store.set(patient());
    let raw = storage.get(SESSION_STORAGE_KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["userId"], "user123");
    assert_eq!(value["role"], "patient");
}

#[test]
fn set_marks_loaded() {
    let store = store_with(&Arc::new(MemoryStorage::new()));
    store.set(patient());
    assert!(!store.current().loading);
}

#[test]
fn clear_removes_memory_and_persisted_copy() {
    let storage = Arc::new(MemoryStorage::new());
    let store = store_with(&storage);
    store.set(patient());
    store.clear();
    assert!(!store.is_authenticated());
    assert_eq!(storage.get(SESSION_STORAGE_KEY), None);
}

#[test]
fn clear_when_signed_out_is_harmless() {
    let store = store_with(&Arc::new(MemoryStorage::new()));
    store.clear();
    store.clear();
    assert!(!store.is_authenticated());
}

// =============================================================================
// Subscribers
// =============================================================================

#[test]
fn subscribers_see_every_change() {
    let store = store_with(&Arc::new(MemoryStorage::new()));
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    store.subscribe(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });

    store.init();
    store.set(patient());
    store.clear();
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn subscriber_receives_new_snapshot() {
    let store = store_with(&Arc::new(MemoryStorage::new()));
    let last = Arc::new(Mutex::new(None::<AuthState>));
    let sink = Arc::clone(&last);
    store.subscribe(move |state| {
        *sink.lock().unwrap() = Some(state.clone());
    });

    store.set(patient());
    let snapshot = last.lock().unwrap().clone().unwrap();
    assert_eq!(snapshot.role(), Role::Patient);
    assert!(!snapshot.loading);
}

#[test]
fn unsubscribe_stops_notifications() {
    let store = store_with(&Arc::new(MemoryStorage::new()));
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let id = store.subscribe(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });

    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.set(patient());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn teardown_drops_subscribers_but_keeps_persisted_session() {
    let storage = Arc::new(MemoryStorage::new());
    let store = store_with(&storage);
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    store.subscribe(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });
    store.set(patient());
    store.teardown();
    assert!(storage.get(SESSION_STORAGE_KEY).is_some());
    assert!(store.is_authenticated());

    store.clear();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn subscription_ids_are_unique() {
    let store = store_with(&Arc::new(MemoryStorage::new()));
    let a = store.subscribe(|_| {});
    let b = store.subscribe(|_| {});
    assert_ne!(a, b);
}
