//! Patient-facing symptom checker.

use leptos::prelude::*;

use crate::components::chatbot_card::ChatbotCard;
use crate::components::dashboard_layout::DashboardLayout;
use crate::routing::routes::AppRoute;
use crate::util::advisor::AdvisorKind;

#[component]
pub fn SymptomCheckerPage() -> impl IntoView {
    view! {
        <DashboardLayout>
            <header class="page-header">
                <div>
                    <h1>"AI Symptom Checker"</h1>
                    <p>"Describe how you feel and get general guidance"</p>
                </div>
            </header>
            <section class="dashboard-grid">
                <ChatbotCard
                    kind=AdvisorKind::SymptomChecker
                    title="Symptom Checker"
                    placeholder="Describe your symptoms..."
                />
                <aside class="disclaimer">
                    <h3>"Important"</h3>
                    <p>
                        "This tool offers general information only and is not a diagnosis. \
                         In an emergency, call your local emergency number."
                    </p>
                    <a class="btn" href=AppRoute::BookAppointment.path()>"Book an appointment"</a>
                </aside>
            </section>
        </DashboardLayout>
    }
}
