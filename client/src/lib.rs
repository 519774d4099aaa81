//! # client
//!
//! Leptos + WASM frontend for the CareFusion patient/doctor portal.
//!
//! This crate holds the session store and mock auth service, the route table
//! and guard, and the pages and components that render the portal. It is
//! compiled twice: for the browser under `hydrate` and into the host under
//! `ssr`.

pub mod app;
pub mod components;
pub mod data;
pub mod pages;
pub mod routing;
pub mod services;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
