//! Headline number tile for the dashboards.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    title: &'static str,
    value: String,
    #[prop(optional)] detail: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__title">{title}</span>
            <strong class="stat-card__value">{value}</strong>
            {detail.map(|d| view! { <span class="stat-card__detail">{d}</span> })}
        </div>
    }
}
