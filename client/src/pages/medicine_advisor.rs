//! Doctor-facing medicine advisor: chat plus drug reference.

use leptos::prelude::*;

use crate::components::chatbot_card::ChatbotCard;
use crate::components::dashboard_layout::DashboardLayout;
use crate::data::drugs::{self, DrugInfo};
use crate::util::advisor::AdvisorKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DrugTab {
    Database,
    Saved,
}

#[component]
fn DrugCard(drug: DrugInfo) -> impl IntoView {
    view! {
        <div class="drug-card">
            <div class="drug-card__header">
                <h3>{drug.name}</h3>
                <span class="badge">{drug.category}</span>
            </div>
            <p><strong>"Used for: "</strong>{drug.used_for.join(", ")}</p>
            <p><strong>"Side effects: "</strong>{drug.side_effects.join(", ")}</p>
            <p><strong>"Dosage: "</strong>{drug.dosage}</p>
            <p><strong>"Interactions: "</strong>{drug.interactions.join(", ")}</p>
        </div>
    }
}

#[component]
pub fn MedicineAdvisorPage() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let tab = RwSignal::new(DrugTab::Database);

    let listed = move || match tab.get() {
        DrugTab::Database => drugs::search(&query.get()),
        DrugTab::Saved => drugs::saved(),
    };

    view! {
        <DashboardLayout>
            <header class="page-header">
                <div>
                    <h1>"Medicine Advisor"</h1>
                    <p>"Get medication suggestions and look up drug information"</p>
                </div>
            </header>

            <section class="dashboard-grid">
                <ChatbotCard
                    kind=AdvisorKind::MedicineAdvisor
                    title="Medicine Advisor"
                    placeholder="Enter a diagnosis or condition..."
                />

                <div class="drug-reference">
                    <div class="tabs" role="tablist">
                        <button
                            class="tabs__tab"
                            class:tabs__tab--active=move || tab.get() == DrugTab::Database
                            on:click=move |_| tab.set(DrugTab::Database)
                        >
                            "Drug Database"
                        </button>
                        <button
                            class="tabs__tab"
                            class:tabs__tab--active=move || tab.get() == DrugTab::Saved
                            on:click=move |_| tab.set(DrugTab::Saved)
                        >
                            "Saved Medications"
                        </button>
                    </div>
                    <Show when=move || tab.get() == DrugTab::Database>
                        <input
                            class="form-input search-input"
                            placeholder="Search drugs by name, category or use..."
                            prop:value=move || query.get()
                            on:input=move |ev| query.set(event_target_value(&ev))
                        />
                    </Show>
                    {move || listed().into_iter().map(|d| view! { <DrugCard drug=d/> }).collect::<Vec<_>>()}
                </div>
            </section>
        </DashboardLayout>
    }
}
