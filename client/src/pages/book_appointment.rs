//! Booking form: pick a doctor, a date, and a time slot.

use leptos::prelude::*;

use crate::components::dashboard_layout::DashboardLayout;
use crate::components::notification_panel::NotificationPanel;
use crate::data::appointments::{AVAILABLE_TIMES, BookingRequest, DOCTORS, confirm_booking};
use crate::data::matches_query;
use crate::state::ui::{Notice, UiState};

#[component]
pub fn BookAppointmentPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let query = RwSignal::new(String::new());
    let request = RwSignal::new(BookingRequest::default());
    let show_notifications = RwSignal::new(false);

    let on_book = move |_| match confirm_booking(&request.get_untracked()) {
        Ok(text) => ui.update(|u| u.notify(Notice::success("Appointment Booked", text))),
        Err(message) => ui.update(|u| u.notify(Notice::error("Missing Information", message))),
    };

    view! {
        <DashboardLayout>
            <header class="page-header">
                <div>
                    <h1>"Book Appointment"</h1>
                    <p>"Schedule your next visit with our healthcare providers"</p>
                </div>
                <button
                    class="btn"
                    title="Notifications"
                    on:click=move |_| show_notifications.update(|open| *open = !*open)
                >
                    "🔔"
                </button>
            </header>
            <Show when=move || show_notifications.get()>
                <NotificationPanel/>
            </Show>

            <section class="booking">
                <div class="booking__doctors">
                    <input
                        class="form-input"
                        placeholder="Search doctors, specialties..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    {move || {
                        let q = query.get();
                        DOCTORS
                            .iter()
                            .filter(|d| matches_query(&q, [d.name, d.specialty]))
                            .map(|d| {
                                let name = d.name;
                                view! {
                                    <button
                                        class="doctor-option"
                                        class:doctor-option--selected=move || request.get().doctor == name
                                        on:click=move |_| request.update(|r| r.doctor = name.to_owned())
                                    >
                                        <strong>{name}</strong>
                                        <span>{d.specialty}</span>
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <div class="booking__slot">
                    <label class="form-field">
                        <span>"Date"</span>
                        <input
                            class="form-input"
                            type="date"
                            prop:value=move || request.get().date
                            on:input=move |ev| request.update(|r| r.date = event_target_value(&ev))
                        />
                    </label>
                    <div class="time-grid">
                        {AVAILABLE_TIMES
                            .iter()
                            .map(|slot| {
                                let slot = *slot;
                                view! {
                                    <button
                                        class="time-option"
                                        class:time-option--selected=move || request.get().time == slot
                                        on:click=move |_| request.update(|r| r.time = slot.to_owned())
                                    >
                                        {slot}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <button class="btn btn--primary" on:click=on_book>"Book Appointment"</button>
                </div>
            </section>
        </DashboardLayout>
    }
}
