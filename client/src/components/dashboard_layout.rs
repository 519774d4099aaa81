//! Sidebar + content shell shared by every dashboard page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sidebar menu depends on the session role, highlights the entry for
//! the current location, and hosts the theme toggle and logout action.

#[cfg(test)]
#[path = "dashboard_layout_test.rs"]
mod dashboard_layout_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routing::routes::AppRoute;
use crate::services::auth::AuthService;
use crate::state::auth::AuthState;
use crate::state::session::Role;
use crate::state::ui::{Notice, UiState};
use crate::util::storage::KeyValueStore;
use crate::util::theme;

/// One sidebar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub route: AppRoute,
}

const PATIENT_MENU: &[MenuItem] = &[
    MenuItem { label: "Dashboard", route: AppRoute::Dashboard },
    MenuItem { label: "Appointments", route: AppRoute::Appointments },
    MenuItem { label: "Medical Records", route: AppRoute::MedicalRecords },
    MenuItem { label: "AI Symptom Checker", route: AppRoute::SymptomChecker },
    MenuItem { label: "Chat with Doctor", route: AppRoute::Chat },
];

const DOCTOR_MENU: &[MenuItem] = &[
    MenuItem { label: "Dashboard", route: AppRoute::Dashboard },
    MenuItem { label: "Appointments", route: AppRoute::Appointments },
    MenuItem { label: "Patient Records", route: AppRoute::PatientRecords },
    MenuItem { label: "Medicine Advisor", route: AppRoute::MedicineAdvisor },
    MenuItem { label: "Chat with Patients", route: AppRoute::Chat },
];

/// Sidebar entries for a role. Everyone but doctors gets the patient menu.
#[must_use]
pub fn menu_items(role: Role) -> &'static [MenuItem] {
    if role == Role::Doctor { DOCTOR_MENU } else { PATIENT_MENU }
}

/// Whether `item` should be highlighted at `current`. The role dashboards
/// count as the `Dashboard` entry.
#[must_use]
pub fn is_active(item: MenuItem, current: AppRoute) -> bool {
    match item.route {
        AppRoute::Dashboard => matches!(
            current,
            AppRoute::Dashboard | AppRoute::PatientDashboard | AppRoute::DoctorDashboard
        ),
        route => route == current,
    }
}

#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let auth_service = expect_context::<AuthService>();
    let storage = expect_context::<Arc<dyn KeyValueStore>>();
    let location = use_location();
    let navigate = use_navigate();

    let current = Memo::new(move |_| AppRoute::from_path(&location.pathname.get()));
    let role = Memo::new(move |_| auth.get().role());
    let collapsed = move || ui.get().sidebar_collapsed;

    let on_logout = move |_| {
        auth_service.logout();
        ui.update(|u| u.notify(Notice::success("Success", "You have been logged out")));
        navigate(AppRoute::Login.path(), NavigateOptions::default());
    };

    let on_toggle_theme = move |_| {
        let next = theme::toggle(storage.as_ref(), ui.get_untracked().theme);
        ui.update(|u| u.theme = next);
    };

    let user_name = move || {
        auth.get()
            .session
            .map_or_else(|| "Guest".to_owned(), |s| s.display_name().to_owned())
    };
    let user_initials = move || auth.get().session.map(|s| s.initials()).unwrap_or_default();

    view! {
        <div class="dashboard-layout" class:dashboard-layout--collapsed=collapsed>
            <aside class="sidebar">
                <div class="sidebar__header">
                    <Show when=move || !collapsed()>
                        <h2 class="sidebar__brand">"CareFusion"</h2>
                    </Show>
                    <button
                        class="btn sidebar__collapse"
                        title="Toggle sidebar"
                        on:click=move |_| ui.update(|u| u.sidebar_collapsed = !u.sidebar_collapsed)
                    >
                        {move || if collapsed() { "›" } else { "‹" }}
                    </button>
                </div>

                <nav class="sidebar__nav">
                    {move || {
                        menu_items(role.get())
                            .iter()
                            .map(|item| {
                                let item = *item;
                                view! {
                                    <a
                                        class="sidebar__link"
                                        class:sidebar__link--active=move || is_active(item, current.get())
                                        href=item.route.path()
                                        title=item.label
                                    >
                                        <span class="sidebar__label">{item.label}</span>
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </nav>

                <div class="sidebar__footer">
                    <span class="sidebar__avatar">{user_initials}</span>
                    <Show when=move || !collapsed()>
                        <span class="sidebar__user">
                            {user_name}
                            <small class="sidebar__role">{move || role.get().label()}</small>
                        </span>
                    </Show>
                    <button class="btn sidebar__theme" title="Toggle theme" on:click=on_toggle_theme>
                        {move || if ui.get().theme.is_dark() { "☀" } else { "☾" }}
                    </button>
                    <button class="btn sidebar__logout" title="Logout" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </aside>

            <main class="dashboard-layout__content">{children()}</main>
        </div>
    }
}
