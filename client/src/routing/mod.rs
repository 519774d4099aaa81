//! Navigation surface and access control.
//!
//! SYSTEM CONTEXT
//! ==============
//! `routes` is the static path table consumed by `app.rs`; `guard` turns a
//! session snapshot plus a route's access rule into a render/redirect
//! decision for `components::protected_route`.

pub mod guard;
pub mod routes;
