//! Route wrapper that applies the session guard before rendering a page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected `<Route>` in `app.rs` wraps its page in this component. The
//! decision is recomputed whenever the auth signal changes, so finishing the
//! initial session load or logging out re-evaluates the current page.

use leptos::logging::warn;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::components::loading_screen::LoadingScreen;
use crate::routing::guard::{self, GuardDecision, GuardState};
use crate::routing::routes::AppRoute;
use crate::state::auth::AuthState;
use crate::state::session::Role;

/// Navigation options for guard redirects: replace, never push.
pub fn replace_navigation() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Render `children` only if the current session may open `route`.
#[component]
pub fn ProtectedRoute(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let decision = Memo::new(move |_| guard::evaluate(GuardState::from_auth(&auth.get()), route.access()));

    move || match decision.get() {
        GuardDecision::Allow => children().into_any(),
        GuardDecision::Pending => view! {
            <LoadingScreen title="Loading..." detail="Please wait while we authenticate you."/>
        }
        .into_any(),
        GuardDecision::Redirect(path) => view! { <Redirect path=path options=replace_navigation()/> }.into_any(),
        GuardDecision::RoleUnassigned { required } => {
            warn!("no role assigned; {:?} requires {:?}", route, required);
            view! { <RoleUnassigned required=required/> }.into_any()
        }
    }
}

/// Shown to a signed-in user whose session carries no role.
#[component]
pub fn RoleUnassigned(required: Role) -> impl IntoView {
    let needed = match required {
        Role::None => "a role".to_owned(),
        other => format!("the {} role", other.label().to_lowercase()),
    };
    view! {
        <div class="role-unassigned">
            <h2>"No role assigned"</h2>
            <p>"This page needs " {needed} ", but your account has no role yet."</p>
            <p>"Sign out and sign in again choosing Patient or Doctor."</p>
            <a class="btn" href=AppRoute::Login.path()>"Go to login"</a>
        </div>
    }
}
