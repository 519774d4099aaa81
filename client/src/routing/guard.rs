//! Route guard decisions.
//!
//! Evaluation is a pure function of an `AuthState` snapshot and a route's
//! access rule. Nothing is remembered between navigations; in particular the
//! requested path is not kept for a post-login redirect.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::routes::{AppRoute, RouteAccess, dashboard_path_for};
use crate::state::auth::AuthState;
use crate::state::session::Role;

/// Guard view of the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    Loading,
    Unauthenticated,
    Authorized(Role),
}

impl GuardState {
    #[must_use]
    pub fn from_auth(auth: &AuthState) -> Self {
        if auth.loading {
            return Self::Loading;
        }
        match &auth.session {
            Some(session) => Self::Authorized(session.role()),
            None => Self::Unauthenticated,
        }
    }
}

/// What the router should do with a navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested view.
    Allow,
    /// Session not loaded yet; render a placeholder.
    Pending,
    /// Replace the current location with this path.
    Redirect(&'static str),
    /// Authorized without a role on a role-restricted route. There is no
    /// dashboard to send the user to, so the view must say so.
    RoleUnassigned { required: Role },
}

/// Decide whether `state` may open a route with `access`.
#[must_use]
pub fn evaluate(state: GuardState, access: RouteAccess) -> GuardDecision {
    let RouteAccess::Protected { required_role } = access else {
        return GuardDecision::Allow;
    };
    match state {
        GuardState::Loading => GuardDecision::Pending,
        GuardState::Unauthenticated => GuardDecision::Redirect(AppRoute::Login.path()),
        GuardState::Authorized(role) => match required_role {
            Some(required) if required != role => match dashboard_path_for(role) {
                Some(path) => GuardDecision::Redirect(path),
                None => GuardDecision::RoleUnassigned { required },
            },
            _ => GuardDecision::Allow,
        },
    }
}

/// Target for the `/dashboard` entry point once the session is known.
#[must_use]
pub fn dashboard_redirect(state: GuardState) -> GuardDecision {
    match state {
        GuardState::Loading => GuardDecision::Pending,
        GuardState::Unauthenticated => GuardDecision::Redirect(AppRoute::Login.path()),
        GuardState::Authorized(role) => match dashboard_path_for(role) {
            Some(path) => GuardDecision::Redirect(path),
            None => GuardDecision::RoleUnassigned { required: Role::None },
        },
    }
}
