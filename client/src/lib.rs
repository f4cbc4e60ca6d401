//! # iaone-site
//!
//! Leptos frontend for the Industrial-AI.One marketing site: three product
//! module pages behind a single navigation shell.
//!
//! The crate renders on the server (`ssr`) and hydrates in the browser
//! (`hydrate`). Browser-only behaviour (intersection observers, timers,
//! window scrolling) is compiled in only with `hydrate`; the pure state
//! behind it lives in `state` and `util` so it can be tested natively.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs the panic hook and console logger, then
/// hydrates the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
