mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("starting hrm frontend (wasm)");

    // Config load races the first render; requests await the resolved URL
    // themselves, so mounting early is safe.
    leptos::spawn_local(async {
        config::init().await;
    });

    router::mount_app();
}
