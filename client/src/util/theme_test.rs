use super::*;
use crate::util::storage::MemoryStorage;

#[test]
fn resolve_prefers_stored_choice() {
    let store = MemoryStorage::new();
    store.set(THEME_STORAGE_KEY, "dark").unwrap();
    assert_eq!(resolve(&store, false), Theme::Dark);
    store.set(THEME_STORAGE_KEY, "light").unwrap();
    assert_eq!(resolve(&store, true), Theme::Light);
}

#[test]
fn resolve_falls_back_to_system_preference() {
    let store = MemoryStorage::new();
    assert_eq!(resolve(&store, true), Theme::Dark);
    assert_eq!(resolve(&store, false), Theme::Light);
}

#[test]
fn resolve_ignores_unknown_stored_value() {
    let store = MemoryStorage::new();
    store.set(THEME_STORAGE_KEY, "sepia").unwrap();
    assert_eq!(resolve(&store, true), Theme::Dark);
}

#[test]
fn toggle_flips_and_persists() {
    let store = MemoryStorage::new();
    assert_eq!(toggle(&store, Theme::Light), Theme::Dark);
    assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("dark"));
    assert_eq!(toggle(&store, Theme::Dark), Theme::Light);
    assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("light"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_hooks_are_inert_without_hydrate() {
    assert!(!system_prefers_dark());
    apply(Theme::Dark);
    apply(Theme::Light);
}
