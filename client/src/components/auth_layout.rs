//! Centered card frame shared by the login and signup pages.

use leptos::prelude::*;

#[component]
pub fn AuthLayout(title: &'static str, subtitle: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <a class="auth-card__brand" href="/">"CareFusion"</a>
                <h1>{title}</h1>
                <p class="auth-card__subtitle">{subtitle}</p>
                {children()}
            </div>
        </div>
    }
}
