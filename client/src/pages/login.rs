//! Login page: email + password, or the simulated Google button.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both paths go through `AuthService`, which writes the session into the
//! store. The page then navigates to `/dashboard`, which forwards to the
//! role's own dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::auth_layout::AuthLayout;
use crate::routing::routes::AppRoute;
use crate::services::auth::AuthService;
use crate::state::session::Role;
use crate::state::ui::{Notice, UiState};

/// Roles offered on the login and signup forms.
pub const SELECTABLE_ROLES: [Role; 2] = [Role::Patient, Role::Doctor];

/// Map a `<select>` value to a role. Anything unrecognized means patient.
#[must_use]
pub fn role_choice(raw: &str) -> Role {
    match Role::parse(raw.trim()) {
        Some(Role::None) | None => Role::Patient,
        Some(role) => role,
    }
}

#[component]
pub fn RoleSelect(role: RwSignal<Role>) -> impl IntoView {
    view! {
        <label class="form-field">
            <span>"I am a"</span>
            <select
                class="form-input"
                on:change=move |ev| role.set(role_choice(&event_target_value(&ev)))
            >
                {SELECTABLE_ROLES
                    .into_iter()
                    .map(|r| {
                        view! {
                            <option value=r.as_str().unwrap_or_default() selected=move || role.get() == r>
                                {r.label()}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthService>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Patient);

    let on_submit = {
        let auth = auth.clone();
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            match auth.login(&email.get_untracked(), &password.get_untracked(), Some(role.get_untracked())) {
                Ok(_) => {
                    ui.update(|u| u.notify(Notice::success("Success", "You have successfully logged in")));
                    navigate(AppRoute::Dashboard.path(), NavigateOptions::default());
                }
                Err(e) => ui.update(|u| u.notify(Notice::error("Error", e.to_string()))),
            }
        }
    };

    let on_google = move |_| {
        auth.google_sign_in(Some(role.get_untracked()));
        ui.update(|u| u.notify(Notice::success("Success", "You have successfully logged in with Google")));
        navigate(AppRoute::Dashboard.path(), NavigateOptions::default());
    };

    view! {
        <AuthLayout title="Welcome back" subtitle="Sign in to your CareFusion account">
            <form class="auth-form" on:submit=on_submit>
                <label class="form-field">
                    <span>"Email"</span>
                    <input
                        class="form-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span>"Password"</span>
                    <input
                        class="form-input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <RoleSelect role=role/>
                <button class="btn btn--primary" type="submit">"Sign in"</button>
            </form>
            <div class="auth-divider">"Or"</div>
            <button class="btn" on:click=on_google>"Continue with Google"</button>
            <p class="auth-card__footer">
                "Don't have an account? " <a href=AppRoute::Signup.path()>"Sign up"</a>
            </p>
        </AuthLayout>
    }
}
