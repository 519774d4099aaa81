//! Public landing page.

use chrono::Datelike;
use leptos::prelude::*;

use crate::routing::routes::AppRoute;

const FEATURES: &[(&str, &str)] = &[
    (
        "AI Symptom Checker",
        "Describe your symptoms and get AI-powered insights on possible conditions and next steps.",
    ),
    ("Appointment Booking", "Schedule appointments with doctors, receive reminders, and manage your medical calendar."),
    ("Medical Records", "Store and access your medical history, prescriptions, and reports in one secure location."),
    ("Video Consultations", "Connect with healthcare providers through secure video calls."),
    ("Doctor Chat", "Message your healthcare providers directly for quick questions and follow-ups."),
    ("Health Analytics", "Get personalized health analytics and recommendations based on your medical data."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let year = crate::util::time::now().year();

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"CareFusion"</h1>
                <p>
                    "AI-powered healthcare platform connecting patients and doctors for seamless medical care and consultation"
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href=AppRoute::Signup.path()>"Get Started"</a>
                    <a class="btn" href=AppRoute::Login.path()>"Sign In"</a>
                </div>
            </section>

            <section class="features">
                {FEATURES
                    .iter()
                    .map(|(title, body)| {
                        view! {
                            <div class="feature">
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>

            <section class="cta">
                <p>
                    "Join thousands of patients and healthcare providers already using CareFusion to streamline their healthcare journey."
                </p>
                <a class="btn btn--primary" href=AppRoute::Signup.path()>"Sign Up"</a>
            </section>

            <footer class="home-footer">
                <p>"© " {year} " CareFusion. All rights reserved."</p>
            </footer>
        </div>
    }
}
