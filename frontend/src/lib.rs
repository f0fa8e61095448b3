mod api;
mod app;
mod components;
pub mod config;
mod pages;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use app::App;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Starting Udyam registration frontend (wasm)");

    // Runtime config (window.__UDYAM_CONFIG or ./config.json) must be resolved
    // before the gateway reads its delays, so mount only after it settles.
    leptos::spawn_local(async move {
        let cfg = config::init().await;
        log::info!(
            "Runtime config initialized (dispatch {} ms, verify {} ms)",
            cfg.otp_dispatch_delay_ms,
            cfg.otp_verify_delay_ms
        );
        app::mount_app();
    });
}
