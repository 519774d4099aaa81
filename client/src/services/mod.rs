//! Session-owning services shared through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! `session_store` holds and persists the signed-in identity; `auth` is the
//! only writer, fabricating identities for the mock sign-in flows.

pub mod auth;
pub mod session_store;
