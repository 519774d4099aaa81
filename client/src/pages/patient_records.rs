//! Doctor's patient roster: search, all/recent tabs, detail notices.

use leptos::prelude::*;

use crate::components::dashboard_layout::DashboardLayout;
use crate::data::matches_query;
use crate::data::patients::{self, Patient, RECENT_VISIT_DAYS};
use crate::state::ui::{Notice, UiState};
use crate::util::time;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RosterTab {
    All,
    Recent,
}

#[component]
pub fn PatientRecordsPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let query = RwSignal::new(String::new());
    let tab = RwSignal::new(RosterTab::All);

    let rows = move || {
        let q = query.get();
        match tab.get() {
            RosterTab::All => patients::search(&q),
            RosterTab::Recent => patients::recent(time::now().date_naive())
                .into_iter()
                .filter(|p| matches_query(&q, [p.name, p.condition, p.id]))
                .collect::<Vec<Patient>>(),
        }
    };

    let on_add = move |_| {
        ui.update(|u| {
            u.notify(Notice::success(
                "Feature Coming Soon",
                "The ability to add new patient records will be available soon.",
            ));
        });
    };

    view! {
        <DashboardLayout>
            <header class="page-header">
                <div>
                    <h1>"Patient Records"</h1>
                    <p>"View and manage your patients' medical records"</p>
                </div>
                <button class="btn btn--primary" on:click=on_add>"Add New Patient"</button>
            </header>

            <input
                class="form-input search-input"
                placeholder="Search patients by name, condition or ID..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />

            <div class="tabs" role="tablist">
                <button
                    class="tabs__tab"
                    class:tabs__tab--active=move || tab.get() == RosterTab::All
                    on:click=move |_| tab.set(RosterTab::All)
                >
                    "All Patients"
                </button>
                <button
                    class="tabs__tab"
                    class:tabs__tab--active=move || tab.get() == RosterTab::Recent
                    title=format!("Seen in the last {RECENT_VISIT_DAYS} days")
                    on:click=move |_| tab.set(RosterTab::Recent)
                >
                    "Recent Visits"
                </button>
            </div>

            <table class="patient-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th>"Age"</th>
                        <th>"Gender"</th>
                        <th>"Condition"</th>
                        <th>"Last Visit"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        rows()
                            .into_iter()
                            .map(|p| {
                                let last_visit = p
                                    .last_visit_date()
                                    .map_or_else(|| p.last_visit.to_owned(), time::long_date);
                                view! {
                                    <tr>
                                        <td>{p.id}</td>
                                        <td>{p.name}</td>
                                        <td>{p.age}</td>
                                        <td>{p.gender}</td>
                                        <td>{p.condition}</td>
                                        <td>{last_visit}</td>
                                        <td>
                                            <button
                                                class="btn"
                                                on:click=move |_| {
                                                    ui.update(|u| {
                                                        u.notify(Notice::success(
                                                            "Viewing Patient Records",
                                                            format!("Loading detailed records for patient {}", p.id),
                                                        ));
                                                    });
                                                }
                                            >
                                                "View"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </DashboardLayout>
    }
}
