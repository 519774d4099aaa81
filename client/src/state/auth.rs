//! Auth-session snapshot for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrored into an `RwSignal<AuthState>` context by the app root so route
//! guards and user-aware components re-render when the session store changes.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::session::{Role, Session};

/// Authentication state tracking the current session and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for AuthState {
    /// Nothing has been read from storage yet, so start out loading.
    fn default() -> Self {
        Self { session: None, loading: true }
    }
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Role of the active session, `Role::None` when signed out.
    #[must_use]
    pub fn role(&self) -> Role {
        self.session.as_ref().map_or(Role::None, Session::role)
    }
}
