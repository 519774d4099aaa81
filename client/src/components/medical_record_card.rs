//! Summary tile for one medical record.

use leptos::prelude::*;

use crate::data::records::MedicalRecord;
use crate::state::ui::{Notice, UiState};

#[component]
pub fn MedicalRecordCard(record: MedicalRecord) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let on_download = move |_| {
        ui.update(|u| u.notify(Notice::success("Download started", format!("{} is downloading.", record.title))));
    };

    view! {
        <div class="record-card">
            <span class="badge">{record.kind.label()}</span>
            <h3 class="record-card__title">{record.title}</h3>
            <dl class="record-card__meta">
                <dt>"Date"</dt>
                <dd>{record.date}</dd>
                <dt>"Doctor"</dt>
                <dd>{record.doctor}</dd>
                <dt>"Hospital"</dt>
                <dd>{record.hospital}</dd>
            </dl>
            <button class="btn" on:click=on_download>"Download"</button>
        </div>
    }
}
