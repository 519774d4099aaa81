//! Messaging page: contact list on the left, active thread on the right.
//!
//! DESIGN
//! ======
//! Threads are local only. Switching contacts reseeds the canned
//! conversation; sent messages live until the page is left.

use leptos::prelude::*;

use crate::components::dashboard_layout::DashboardLayout;
use crate::data::contacts::{self, CONTACTS, ChatThread, Sender};
use crate::util::time;

#[component]
pub fn ChatPage() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let active = RwSignal::new(CONTACTS[0].id);
    let thread = RwSignal::new(ChatThread::seeded(time::now()));
    let draft = RwSignal::new(String::new());

    let select = move |id: &'static str| {
        if active.get_untracked() != id {
            active.set(id);
            thread.set(ChatThread::seeded(time::now()));
            draft.set(String::new());
        }
    };

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let body = draft.get_untracked();
        let mut sent = false;
        thread.update(|t| sent = t.send(&body, time::now()));
        if sent {
            draft.set(String::new());
        }
    };

    let contact = move || contacts::find(active.get());

    view! {
        <DashboardLayout>
            <div class="chat">
                <aside class="chat__contacts">
                    <input
                        class="form-input"
                        placeholder="Search contacts..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    {move || {
                        contacts::search(&query.get())
                            .into_iter()
                            .map(|c| {
                                let last_seen = time::relative_label(
                                    time::now(),
                                    time::now() - chrono::Duration::minutes(c.minutes_since_last),
                                );
                                view! {
                                    <button
                                        class="chat__contact"
                                        class:chat__contact--active=move || active.get() == c.id
                                        on:click=move |_| select(c.id)
                                    >
                                        <span class=format!("presence presence--{}", c.presence.label())></span>
                                        <strong>{c.name}</strong>
                                        <small>{c.specialty}</small>
                                        <span class="chat__preview">{c.last_message}</span>
                                        <span class="chat__time">{last_seen}</span>
                                        <Show when=move || (c.unread > 0)>
                                            <span class="badge">{c.unread}</span>
                                        </Show>
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </aside>

                <section class="chat__thread">
                    <header class="chat__header">
                        {move || {
                            contact()
                                .map(|c| {
                                    view! {
                                        <strong>{c.name}</strong>
                                        <small>{c.specialty} " · " {c.presence.label()}</small>
                                    }
                                })
                        }}
                    </header>
                    <div class="chat__messages">
                        <For each=move || thread.get().messages key=|m| m.id let:message>
                            <div class="chat__message" class:chat__message--mine={message.sender == Sender::Me}>
                                <p>{message.body.clone()}</p>
                                <small>{time::relative_label(time::now(), message.sent_at)}</small>
                            </div>
                        </For>
                    </div>
                    <form class="chat__compose" on:submit=on_send>
                        <input
                            class="form-input"
                            placeholder="Type a message..."
                            prop:value=move || draft.get()
                            on:input=move |ev| draft.set(event_target_value(&ev))
                        />
                        <button class="btn btn--primary" type="submit">"Send"</button>
                    </form>
                </section>
            </div>
        </DashboardLayout>
    }
}
