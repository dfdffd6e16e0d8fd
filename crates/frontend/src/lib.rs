pub mod app;
pub mod config;
pub mod domain;
pub mod layout;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    let (config, problem) = config::load();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level());
    console_error_panic_hook::set_once();

    if let Some(e) = problem {
        log::warn!("{}; using defaults", e);
    }
    config::install(config);

    if let Err(e) = shared::style::inject_fade_out_style() {
        log::warn!("Fade-out style not installed: {}", e);
    }
    if let Err(e) = shared::globals::expose_globals() {
        log::error!("Page functions not exposed: {}", e);
    }

    app::run_when_ready();
}
