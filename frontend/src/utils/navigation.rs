#[cfg(target_arch = "wasm32")]
pub fn redirect_to(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn redirect_to(_path: &str) {}

#[cfg(target_arch = "wasm32")]
pub fn current_pathname() -> Option<String> {
    let window = web_sys::window()?;
    window.location().pathname().ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_pathname() -> Option<String> {
    None
}

/// Query string including the leading `?`, empty when there is none.
#[cfg(target_arch = "wasm32")]
pub fn current_search() -> String {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_search() -> String {
    String::new()
}
