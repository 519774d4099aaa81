//! Appointment list with upcoming/completed/cancelled tabs.

use leptos::prelude::*;

use crate::components::appointment_card::AppointmentCard;
use crate::components::dashboard_layout::DashboardLayout;
use crate::data::appointments::{AppointmentStatus, with_status};
use crate::routing::routes::AppRoute;
use crate::state::auth::AuthState;
use crate::state::session::Role;

#[component]
pub fn AppointmentsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let tab = RwSignal::new(AppointmentStatus::Upcoming);
    let doctor_view = move || auth.get().role() == Role::Doctor;

    view! {
        <DashboardLayout>
            <header class="page-header">
                <div>
                    <h1>"Appointments"</h1>
                    <p>"Manage your upcoming and past appointments"</p>
                </div>
                <a class="btn btn--primary" href=AppRoute::BookAppointment.path()>"Book New Appointment"</a>
            </header>

            <div class="tabs" role="tablist">
                {AppointmentStatus::ALL
                    .into_iter()
                    .map(|status| {
                        view! {
                            <button
                                class="tabs__tab"
                                class:tabs__tab--active=move || tab.get() == status
                                on:click=move |_| tab.set(status)
                            >
                                {status.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="appointment-list">
                {move || {
                    let rows = with_status(tab.get());
                    if rows.is_empty() {
                        return view! { <p class="empty">"No appointments here."</p> }.into_any();
                    }
                    let doctor_view = doctor_view();
                    rows.into_iter()
                        .map(|a| view! { <AppointmentCard appointment=a doctor_view=doctor_view/> })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>
        </DashboardLayout>
    }
}
