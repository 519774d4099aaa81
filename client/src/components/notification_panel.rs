//! Notification dropdown: all/unread tabs, mark read, delete.

use leptos::prelude::*;

use crate::data::notifications::Inbox;
use crate::state::ui::{Notice, UiState};

#[component]
pub fn NotificationPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let inbox = RwSignal::new(Inbox::seeded());
    let unread_only = RwSignal::new(false);

    let unread = move || inbox.with(Inbox::unread_count);
    let listed = move || {
        inbox.with(|i| if unread_only.get() { i.unread() } else { i.items.clone() })
    };

    let on_mark_all = move |_| {
        inbox.update(|i| {
            i.mark_all_read();
        });
        ui.update(|u| u.notify(Notice::success("All notifications marked as read", "")));
    };

    view! {
        <div class="notification-panel">
            <div class="notification-panel__header">
                <h3>"Notifications"</h3>
                <Show when=move || (unread() > 0)>
                    <button class="btn" on:click=on_mark_all>"Mark all as read"</button>
                </Show>
            </div>
            <div class="tabs" role="tablist">
                <button
                    class="tabs__tab"
                    class:tabs__tab--active=move || !unread_only.get()
                    on:click=move |_| unread_only.set(false)
                >
                    "All"
                </button>
                <button
                    class="tabs__tab"
                    class:tabs__tab--active=move || unread_only.get()
                    on:click=move |_| unread_only.set(true)
                >
                    {move || match unread() {
                        0 => "Unread".to_owned(),
                        n => format!("Unread ({n})"),
                    }}
                </button>
            </div>
            <ul class="notification-panel__list">
                {move || {
                    let items = listed();
                    if items.is_empty() {
                        return view! { <li class="empty">"No notifications"</li> }.into_any();
                    }
                    items
                        .into_iter()
                        .map(|n| {
                            view! {
                                <li
                                    class=format!("notification notification--{}", n.kind.css_modifier())
                                    class:notification--unread=!n.read
                                >
                                    <strong>{n.title}</strong>
                                    <p>{n.message}</p>
                                    <small>{n.time}</small>
                                    <Show when=move || !n.read>
                                        <button
                                            class="btn notification__action"
                                            title="Mark as read"
                                            on:click=move |_| {
                                                inbox.update(|i| {
                                                    i.mark_read(n.id);
                                                });
                                            }
                                        >
                                            "✓"
                                        </button>
                                    </Show>
                                    <button
                                        class="btn notification__action"
                                        title="Delete"
                                        on:click=move |_| {
                                            inbox.update(|i| {
                                                i.remove(n.id);
                                            });
                                        }
                                    >
                                        "×"
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </ul>
        </div>
    }
}
