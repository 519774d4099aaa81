//! Patient overview: stats, appointments, symptom checker, recent records.

use leptos::prelude::*;

use crate::components::appointment_card::AppointmentCard;
use crate::components::chatbot_card::ChatbotCard;
use crate::components::dashboard_layout::DashboardLayout;
use crate::components::medical_record_card::MedicalRecordCard;
use crate::components::stat_card::StatCard;
use crate::data::appointments::{APPOINTMENTS, AppointmentStatus, with_status};
use crate::data::records::RECORDS;
use crate::routing::routes::AppRoute;
use crate::state::auth::AuthState;
use crate::util::advisor::AdvisorKind;

const RECENT_RECORDS: usize = 4;

/// First name for the greeting line, `None` when signed out.
pub(crate) fn first_name(auth: &AuthState) -> Option<String> {
    auth.session
        .as_ref()
        .and_then(|s| s.display_name().split_whitespace().next().map(str::to_owned))
}

#[component]
pub fn PatientDashboard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let greeting = move || match first_name(&auth.get()) {
        Some(name) => format!("Welcome back, {name}! Here's an overview of your health"),
        None => "Welcome back! Here's an overview of your health".to_owned(),
    };
    let upcoming = with_status(AppointmentStatus::Upcoming);
    let next = upcoming
        .first()
        .map_or("No upcoming visits", |a| a.doctor.name);

    view! {
        <DashboardLayout>
            <header class="page-header">
                <div>
                    <h1>"Patient Dashboard"</h1>
                    <p>{greeting}</p>
                </div>
                <a class="btn btn--primary" href=AppRoute::BookAppointment.path()>"Book Appointment"</a>
            </header>

            <section class="stat-grid">
                <StatCard title="Upcoming Appointments" value=upcoming.len().to_string() detail=next/>
                <StatCard title="Medical Records" value=RECORDS.len().to_string()/>
                <StatCard title="Daily Steps" value="7,842".to_owned() detail="Goal: 10,000 steps"/>
                <StatCard title="Medications" value="2".to_owned() detail="Next dose in 4 hours"/>
            </section>

            <section class="dashboard-grid">
                <div class="dashboard-grid__main">
                    <h2>"Appointments"</h2>
                    {APPOINTMENTS
                        .iter()
                        .map(|a| view! { <AppointmentCard appointment=*a/> })
                        .collect::<Vec<_>>()}
                </div>
                <ChatbotCard
                    kind=AdvisorKind::SymptomChecker
                    title="Symptom Checker"
                    placeholder="Describe your symptoms..."
                />
            </section>

            <section class="record-grid">
                <h2>"Recent Medical Records"</h2>
                {RECORDS
                    .iter()
                    .take(RECENT_RECORDS)
                    .map(|r| view! { <MedicalRecordCard record=*r/> })
                    .collect::<Vec<_>>()}
            </section>
        </DashboardLayout>
    }
}
