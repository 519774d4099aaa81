//! Full-page spinner used while the session is still loading.

use leptos::prelude::*;

#[component]
pub fn LoadingScreen(title: &'static str, detail: &'static str) -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-screen__spinner" aria-hidden="true"></div>
            <h2>{title}</h2>
            <p class="loading-screen__detail">{detail}</p>
        </div>
    }
}
