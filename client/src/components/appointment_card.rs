//! One appointment row, shown from either side of the visit.

use leptos::prelude::*;

use crate::data::appointments::Appointment;

/// Render `appointment`. Patients see the doctor; doctors see the patient.
#[component]
pub fn AppointmentCard(appointment: Appointment, #[prop(optional)] doctor_view: bool) -> impl IntoView {
    let status = appointment.status;
    let (who, subtitle) = if doctor_view {
        (appointment.patient, "Patient")
    } else {
        (appointment.doctor.name, appointment.doctor.specialty)
    };
    let mode = if appointment.video { "Video call" } else { "In person" };

    view! {
        <div class="appointment-card">
            <div class="appointment-card__who">
                <strong>{who}</strong>
                <span class="appointment-card__subtitle">{subtitle}</span>
            </div>
            <div class="appointment-card__when">
                <span>{appointment.date}</span>
                <span>{appointment.time}</span>
            </div>
            <span class="appointment-card__mode">{mode}</span>
            <span class=format!("badge badge--{}", status.css_modifier())>{status.label()}</span>
        </div>
    }
}
