use wasm_bindgen_futures::spawn_local;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("starting hrm frontend");

    spawn_local(async {
        hrm_frontend::config::init().await;
        hrm_frontend::router::mount_app();
    });
}
