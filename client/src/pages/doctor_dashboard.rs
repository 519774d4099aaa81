//! Doctor overview: practice stats, today's visits, medicine advisor.

use leptos::prelude::*;

use crate::components::appointment_card::AppointmentCard;
use crate::components::chatbot_card::ChatbotCard;
use crate::components::dashboard_layout::DashboardLayout;
use crate::components::stat_card::StatCard;
use crate::data::appointments::{AppointmentStatus, with_status};
use crate::data::patients::{self, PATIENTS};
use crate::pages::patient_dashboard::first_name;
use crate::routing::routes::AppRoute;
use crate::state::auth::AuthState;
use crate::util::advisor::AdvisorKind;
use crate::util::time;

#[component]
pub fn DoctorDashboard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let greeting = move || match first_name(&auth.get()) {
        Some(name) => format!("Welcome back, {name}! Here's an overview of your practice"),
        None => "Welcome back! Here's an overview of your practice".to_owned(),
    };
    let upcoming = with_status(AppointmentStatus::Upcoming);
    let recent = patients::recent(time::now().date_naive()).len();

    view! {
        <DashboardLayout>
            <header class="page-header">
                <div>
                    <h1>"Doctor Dashboard"</h1>
                    <p>{greeting}</p>
                </div>
                <a class="btn btn--primary" href=AppRoute::Appointments.path()>"Manage Schedule"</a>
            </header>

            <section class="stat-grid">
                <StatCard title="Upcoming Appointments" value=upcoming.len().to_string()/>
                <StatCard title="Total Patients" value=PATIENTS.len().to_string()/>
                <StatCard title="Recent Visits" value=recent.to_string() detail="Last 14 days"/>
                <StatCard title="Average Consultation" value="22 min".to_owned()/>
            </section>

            <section class="dashboard-grid">
                <div class="dashboard-grid__main">
                    <h2>"Upcoming Appointments"</h2>
                    {upcoming
                        .into_iter()
                        .map(|a| view! { <AppointmentCard appointment=a doctor_view=true/> })
                        .collect::<Vec<_>>()}
                    <a class="btn" href=AppRoute::PatientRecords.path()>"View patient records"</a>
                </div>
                <ChatbotCard
                    kind=AdvisorKind::MedicineAdvisor
                    title="Medicine Advisor"
                    placeholder="Enter a diagnosis or condition..."
                />
            </section>
        </DashboardLayout>
    }
}
