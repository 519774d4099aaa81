//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render portal chrome (layouts, cards, notices) and the route
//! guard wrapper, reading shared state from Leptos context providers.

pub mod appointment_card;
pub mod auth_layout;
pub mod chatbot_card;
pub mod dashboard_layout;
pub mod loading_screen;
pub mod medical_record_card;
pub mod notice_banner;
pub mod notification_panel;
pub mod protected_route;
pub mod stat_card;
