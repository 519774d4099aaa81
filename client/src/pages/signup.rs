//! Account creation page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::auth_layout::AuthLayout;
use crate::pages::login::RoleSelect;
use crate::routing::routes::AppRoute;
use crate::services::auth::{AuthService, SignUpForm};
use crate::state::session::Role;
use crate::state::ui::{Notice, UiState};

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<AuthService>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Patient);

    let on_submit = {
        let auth = auth.clone();
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let form = SignUpForm {
                name: name.get_untracked(),
                email: email.get_untracked(),
                password: password.get_untracked(),
                confirm_password: confirm.get_untracked(),
                role: role.get_untracked(),
            };
            match auth.sign_up(&form) {
                Ok(_) => {
                    ui.update(|u| u.notify(Notice::success("Success", "Your account has been created")));
                    navigate(AppRoute::Dashboard.path(), NavigateOptions::default());
                }
                Err(e) => ui.update(|u| u.notify(Notice::error("Error", e.to_string()))),
            }
        }
    };

    let on_google = move |_| {
        auth.google_sign_in(Some(role.get_untracked()));
        ui.update(|u| u.notify(Notice::success("Success", "You have successfully signed up with Google")));
        navigate(AppRoute::Dashboard.path(), NavigateOptions::default());
    };

    let text_field = move |label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <label class="form-field">
                <span>{label}</span>
                <input
                    class="form-input"
                    type=kind
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <AuthLayout title="Create an account" subtitle="Join CareFusion to manage your healthcare journey">
            <form class="auth-form" on:submit=on_submit>
                {text_field("Full name", "text", name)}
                {text_field("Email", "email", email)}
                {text_field("Password", "password", password)}
                {text_field("Confirm password", "password", confirm)}
                <RoleSelect role=role/>
                <button class="btn btn--primary" type="submit">"Create account"</button>
            </form>
            <div class="auth-divider">"Or"</div>
            <button class="btn" on:click=on_google>"Sign up with Google"</button>
            <p class="auth-card__footer">
                "Already have an account? " <a href=AppRoute::Login.path()>"Sign in"</a>
            </p>
        </AuthLayout>
    }
}
