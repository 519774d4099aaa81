//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the single `SessionStore` and mirrors it into an
//! `RwSignal<AuthState>` through a store subscription. Pages and the route
//! guard only read the signal; writes go through `AuthService`.
//!
//! TRADE-OFFS
//! ==========
//! The persisted session is read in a client-side effect, never during SSR.
//! Server output therefore always shows the guard's loading placeholder for
//! protected routes, and all redirects happen after hydration.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::notice_banner::NoticeBanner;
use crate::components::protected_route::ProtectedRoute;
use crate::pages::{
    appointments::AppointmentsPage, book_appointment::BookAppointmentPage, chat::ChatPage,
    dashboard_redirect::DashboardRedirect, doctor_dashboard::DoctorDashboard, home::HomePage, login::LoginPage,
    medical_records::MedicalRecordsPage, medicine_advisor::MedicineAdvisorPage, not_found::NotFoundPage,
    patient_dashboard::PatientDashboard, patient_records::PatientRecordsPage, signup::SignupPage,
    symptom_checker::SymptomCheckerPage,
};
use crate::routing::routes::AppRoute;
use crate::services::auth::AuthService;
use crate::services::session_store::SessionStore;
use crate::state::ui::UiState;
use crate::util::storage::{BrowserStorage, KeyValueStore};
use crate::util::theme;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let storage: Arc<dyn KeyValueStore> = Arc::new(BrowserStorage);
    let store = Arc::new(SessionStore::new(Arc::clone(&storage)));
    let auth = RwSignal::new(store.current());
    let ui = RwSignal::new(UiState::default());

    let subscription = store.subscribe(move |state| auth.set(state.clone()));

    // Runs once in the browser after hydration.
    Effect::new({
        let store = Arc::clone(&store);
        let storage = Arc::clone(&storage);
        move |_| {
            store.init();
            let resolved = theme::resolve(storage.as_ref(), theme::system_prefers_dark());
            theme::apply(resolved);
            ui.update(|u| u.theme = resolved);
        }
    });

    on_cleanup({
        let store = Arc::clone(&store);
        move || {
            store.unsubscribe(subscription);
            store.teardown();
        }
    });

    provide_context(AuthService::new(store));
    provide_context(storage);
    provide_context(auth);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/carefusion.css"/>
        <Title text="CareFusion"/>

        <Router>
            <NoticeBanner/>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment(AppRoute::Home.segment()) view=HomePage/>
                <Route path=StaticSegment(AppRoute::Login.segment()) view=LoginPage/>
                <Route path=StaticSegment(AppRoute::Signup.segment()) view=SignupPage/>
                <Route path=StaticSegment(AppRoute::Dashboard.segment()) view=DashboardRedirect/>
                <Route
                    path=StaticSegment(AppRoute::PatientDashboard.segment())
                    view=|| view! { <ProtectedRoute route=AppRoute::PatientDashboard><PatientDashboard/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment(AppRoute::DoctorDashboard.segment())
                    view=|| view! { <ProtectedRoute route=AppRoute::DoctorDashboard><DoctorDashboard/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment(AppRoute::Appointments.segment())
                    view=|| view! { <ProtectedRoute route=AppRoute::Appointments><AppointmentsPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment(AppRoute::BookAppointment.segment())
                    view=|| view! { <ProtectedRoute route=AppRoute::BookAppointment><BookAppointmentPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment(AppRoute::MedicalRecords.segment())
                    view=|| view! { <ProtectedRoute route=AppRoute::MedicalRecords><MedicalRecordsPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment(AppRoute::PatientRecords.segment())
                    view=|| view! { <ProtectedRoute route=AppRoute::PatientRecords><PatientRecordsPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment(AppRoute::MedicineAdvisor.segment())
                    view=|| view! { <ProtectedRoute route=AppRoute::MedicineAdvisor><MedicineAdvisorPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment(AppRoute::SymptomChecker.segment())
                    view=|| view! { <ProtectedRoute route=AppRoute::SymptomChecker><SymptomCheckerPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment(AppRoute::Chat.segment())
                    view=|| view! { <ProtectedRoute route=AppRoute::Chat><ChatPage/></ProtectedRoute> }
                />
            </Routes>
        </Router>
    }
}
