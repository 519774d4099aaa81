//! Mock identity provider.
//!
//! ARCHITECTURE
//! ============
//! There is no backend. Each sign-in path fabricates a `Session` and hands it
//! to the `SessionStore`, which persists it and notifies the UI. Passwords are
//! checked for presence (and for matching confirmation on sign-up) but never
//! verified against anything.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use leptos::logging::log;

use super::session_store::SessionStore;
use crate::state::session::{Role, Session};

const DEMO_USER_ID: &str = "user123";
const DEMO_USER_NAME: &str = "Demo User";
const GOOGLE_USER_ID: &str = "google123";
const GOOGLE_USER_NAME: &str = "Google User";
const GOOGLE_USER_EMAIL: &str = "google@example.com";

/// Rejected auth operation, surfaced to the user as a notice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// A required field was left empty.
    #[error("{0}")]
    InvalidInput(&'static str),
    /// Fields are present but inconsistent.
    #[error("{0}")]
    Validation(&'static str),
}

/// Sign-up form contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

/// Check a sign-up form without touching any session state.
///
/// # Errors
///
/// `InvalidInput` when any text field is blank or no role is chosen,
/// `Validation` when the passwords differ.
pub fn validate_sign_up(form: &SignUpForm) -> Result<(), AuthError> {
    let blank = [&form.name, &form.email, &form.password, &form.confirm_password]
        .iter()
        .any(|field| field.trim().is_empty());
    if blank || form.role == Role::None {
        return Err(AuthError::InvalidInput("Please fill in all fields"));
    }
    if form.password != form.confirm_password {
        return Err(AuthError::Validation("Passwords do not match"));
    }
    Ok(())
}

/// Placeholder avatar URL derived from a display name.
#[must_use]
pub fn avatar_url_for(name: &str) -> String {
    let encoded = name.split_whitespace().collect::<Vec<_>>().join("+");
    format!("https://ui-avatars.com/api/?name={encoded}&background=0070F3&color=fff")
}

fn fresh_user_id() -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    format!("user-{}", &id[..8])
}

/// Mock auth operations bound to a session store.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<SessionStore>,
}

impl AuthService {
    #[must_use]
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    /// Sign in with email and password. Any non-empty password is accepted.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the email or password is empty.
    pub fn login(&self, email: &str, password: &str, role: Option<Role>) -> Result<Session, AuthError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::InvalidInput("Please fill in all fields"));
        }
        let session = Session::new(
            DEMO_USER_ID,
            DEMO_USER_NAME,
            email,
            role.unwrap_or(Role::Patient),
            Some(avatar_url_for(DEMO_USER_NAME)),
        );
        log!("login as {:?}", session.role());
        self.store.set(session.clone());
        Ok(session)
    }

    /// Create a new synthetic account and sign in as it.
    ///
    /// # Errors
    ///
    /// See [`validate_sign_up`]. No session is created on error.
    pub fn sign_up(&self, form: &SignUpForm) -> Result<Session, AuthError> {
        validate_sign_up(form)?;
        let name = form.name.trim();
        let session = Session::new(
            fresh_user_id(),
            name,
            form.email.trim(),
            form.role,
            Some(avatar_url_for(name)),
        );
        log!("sign-up created {}", session.user_id());
        self.store.set(session.clone());
        Ok(session)
    }

    /// Pretend OAuth sign-in with a fixed identity.
    pub fn google_sign_in(&self, role: Option<Role>) -> Session {
        let session = Session::new(
            GOOGLE_USER_ID,
            GOOGLE_USER_NAME,
            GOOGLE_USER_EMAIL,
            role.unwrap_or(Role::Patient),
            Some(avatar_url_for(GOOGLE_USER_NAME)),
        );
        log!("google sign-in as {:?}", session.role());
        self.store.set(session.clone());
        session
    }

    /// Sign out. Always succeeds.
    pub fn logout(&self) {
        log!("logout");
        self.store.clear();
    }
}
