//! Patient's own records with a search box.

use leptos::prelude::*;

use crate::components::dashboard_layout::DashboardLayout;
use crate::components::medical_record_card::MedicalRecordCard;
use crate::data::records;

#[component]
pub fn MedicalRecordsPage() -> impl IntoView {
    let query = RwSignal::new(String::new());

    view! {
        <DashboardLayout>
            <header class="page-header">
                <div>
                    <h1>"Medical Records"</h1>
                    <p>"View and manage your medical history"</p>
                </div>
            </header>
            <input
                class="form-input search-input"
                placeholder="Search records, doctors, hospitals..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <section class="record-grid">
                {move || {
                    let found = records::search(&query.get());
                    if found.is_empty() {
                        return view! { <p class="empty">"No records match your search."</p> }.into_any();
                    }
                    found
                        .into_iter()
                        .map(|r| view! { <MedicalRecordCard record=r/> })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </section>
        </DashboardLayout>
    }
}
