//! Toast-style banner for the current `UiState::notice`.

use leptos::prelude::*;

use crate::state::ui::{NoticeKind, UiState};

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    move || {
        ui.get().notice.map(|notice| {
            let error = notice.kind == NoticeKind::Error;
            view! {
                <div class="notice" class:notice--error=error role="status">
                    <strong class="notice__title">{notice.title}</strong>
                    <span class="notice__message">{notice.message}</span>
                    <button class="notice__close" title="Dismiss" on:click=move |_| ui.update(UiState::dismiss_notice)>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
