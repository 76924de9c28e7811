//! # fittrack
//!
//! Leptos + WASM browser client for the fitness-tracking backend.
//! A thin presentation and state-synchronization layer over the remote
//! HTTP API: registration/login, workout and body-progress CRUD,
//! barcode food lookup, meal-plan view, and curated workout videos.
//!
//! Browser-only code (network, storage, navigation) is gated behind the
//! `hydrate` feature so the pure logic compiles and tests on any host.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs the panic hook and console logger, then
/// mounts the root [`app::App`] component onto `<body>`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
