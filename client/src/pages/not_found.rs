//! Fallback for unknown paths, including `/admin-dashboard`.

use leptos::prelude::*;

use crate::routing::routes::AppRoute;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Oops! Page not found"</p>
            <a class="btn" href=AppRoute::Home.path()>"Return to Home"</a>
        </div>
    }
}
