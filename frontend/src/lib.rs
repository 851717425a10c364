use app::App;
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(debug_assertions)]
const LOG_LEVEL: log::Level = log::Level::Debug;
#[cfg(not(debug_assertions))]
const LOG_LEVEL: log::Level = log::Level::Info;

/// WASM entry point: sets up logging and mounts the app on `<body>`.
#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    let _ = console_log::init_with_level(LOG_LEVEL);
    console_error_panic_hook::set_once();

    log::info!("Starting {} v{}", app::APP_TITLE, env!("CARGO_PKG_VERSION"));
    leptos::mount::mount_to_body(App);
}
