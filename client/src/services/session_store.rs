//! Session store: the single source of truth for who is signed in.
//!
//! ARCHITECTURE
//! ============
//! The store owns the in-memory `AuthState` and writes every change through
//! to a `KeyValueStore` under `SESSION_STORAGE_KEY`. Subscribers get the new
//! snapshot after each `load`, `set` or `clear`; the app root uses one to
//! mirror state into a Leptos signal.
//!
//! TRADE-OFFS
//! ==========
//! A corrupt persisted entry is dropped on load rather than surfaced, so the
//! worst case for a user is being signed out. Write failures are logged and
//! the in-memory session stays authoritative until the next reload.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use leptos::logging::{log, warn};

use crate::state::auth::AuthState;
use crate::state::session::Session;
use crate::util::storage::{self, JsonRead, KeyValueStore};

/// Local storage key holding the serialized session.
pub const SESSION_STORAGE_KEY: &str = "carefusion_user";

/// Persisted session entry exists but cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionReadError {
    #[error("persisted session is not valid JSON: {0}")]
    Malformed(String),
    #[error("persisted session has an empty user id")]
    MissingUserId,
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Arc<dyn Fn(&AuthState) + Send + Sync>;

#[derive(Default)]
struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Subscriber)>,
}

/// Session state with write-through persistence and change notification.
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    state: RwLock<AuthState>,
    subscribers: Mutex<Subscribers>,
}

impl SessionStore {
    /// Create an unloaded store. `current().loading` stays true until `init`.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            state: RwLock::new(AuthState::default()),
            subscribers: Mutex::new(Subscribers::default()),
        }
    }

    /// Lifecycle entry point; loads the persisted session.
    pub fn init(&self) {
        self.load();
    }

    /// Lifecycle exit point; drops every subscriber. Persisted data is kept.
    pub fn teardown(&self) {
        let mut subs = self.subscribers.lock().unwrap_or_else(PoisonError::into_inner);
        subs.entries.clear();
    }

    /// Read the persisted session and make it active.
    ///
    /// Missing or malformed entries leave the store signed out. A malformed
    /// entry is also removed so it is not re-read on every start.
    pub fn load(&self) {
        let session = match read_session(self.storage.as_ref()) {
            Ok(Some(session)) => {
                log!("session restored for {}", session.user_id());
                Some(session)
            }
            Ok(None) => None,
            Err(e) => {
                warn!("discarding persisted session: {e}");
                if let Err(e) = self.storage.remove(SESSION_STORAGE_KEY) {
                    warn!("could not remove persisted session: {e}");
                }
                None
            }
        };
        self.replace(AuthState { session, loading: false });
    }

    /// Make `session` active and persist it.
    pub fn set(&self, session: Session) {
        if let Err(e) = storage::save_json(self.storage.as_ref(), SESSION_STORAGE_KEY, &session) {
            warn!("could not persist session: {e}");
        }
        self.replace(AuthState { session: Some(session), loading: false });
    }

    /// Sign out locally and delete the persisted copy.
    pub fn clear(&self) {
        if let Err(e) = self.storage.remove(SESSION_STORAGE_KEY) {
            warn!("could not remove persisted session: {e}");
        }
        self.replace(AuthState { session: None, loading: false });
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn current(&self) -> AuthState {
        self.state.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_authenticated()
    }

    /// Register `callback` to run after every state change.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&AuthState) + Send + Sync + 'static,
    {
        let mut subs = self.subscribers.lock().unwrap_or_else(PoisonError::into_inner);
        let id = SubscriptionId(subs.next_id);
        subs.next_id += 1;
        subs.entries.push((id, Arc::new(callback)));
        id
    }

    /// Remove a subscriber. Returns false if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subs = self.subscribers.lock().unwrap_or_else(PoisonError::into_inner);
        let before = subs.entries.len();
        subs.entries.retain(|(sub_id, _)| *sub_id != id);
        subs.entries.len() != before
    }

    fn replace(&self, next: AuthState) {
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            *state = next.clone();
        }
        // Clone the list so a callback may subscribe or unsubscribe.
        let callbacks: Vec<Subscriber> = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .iter()
            .map(|(_, cb)| Arc::clone(cb))
            .collect();
        for callback in callbacks {
            callback(&next);
        }
    }
}

/// Decode the persisted session, if any.
///
/// # Errors
///
/// Returns a `SessionReadError` when an entry exists but is unusable.
pub fn read_session(store: &dyn KeyValueStore) -> Result<Option<Session>, SessionReadError> {
    match storage::load_json::<Session>(store, SESSION_STORAGE_KEY) {
        JsonRead::Missing => Ok(None),
        JsonRead::Malformed(reason) => Err(SessionReadError::Malformed(reason)),
        JsonRead::Value(session) if !session.is_well_formed() => Err(SessionReadError::MissingUserId),
        JsonRead::Value(session) => Ok(Some(session)),
    }
}
