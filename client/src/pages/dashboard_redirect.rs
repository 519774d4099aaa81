//! `/dashboard`: forwards a signed-in user to their role's dashboard.

use leptos::logging::warn;
use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::loading_screen::LoadingScreen;
use crate::components::protected_route::{RoleUnassigned, replace_navigation};
use crate::routing::guard::{self, GuardDecision, GuardState};
use crate::state::auth::AuthState;

#[component]
pub fn DashboardRedirect() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let decision = Memo::new(move |_| guard::dashboard_redirect(GuardState::from_auth(&auth.get())));

    move || match decision.get() {
        GuardDecision::Redirect(path) => view! { <Redirect path=path options=replace_navigation()/> }.into_any(),
        GuardDecision::RoleUnassigned { required } => {
            warn!("no role assigned; no dashboard to open");
            view! { <RoleUnassigned required=required/> }.into_any()
        }
        GuardDecision::Pending | GuardDecision::Allow => view! {
            <LoadingScreen title="Redirecting..." detail="Taking you to your dashboard."/>
        }
        .into_any(),
    }
}
