use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Fallback when neither a window global nor ./config.json provides a URL.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

static API_BASE_URL: OnceLock<String> = OnceLock::new();

#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "apiBaseUrl")]
    pub api_base_url: Option<String>,
}

/// Deploy-time override: env.js sets `window.__HRM_ENV.API_BASE_URL`, an
/// inline bootstrap script may set `window.__HRM_CONFIG.apiBaseUrl`.
#[cfg(target_arch = "wasm32")]
fn read_window_global(global: &str, key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let object = js_sys::Reflect::get(&window, &global.into()).ok()?;
    if object.is_undefined() || object.is_null() {
        return None;
    }
    let value = js_sys::Reflect::get(&object, &key.into()).ok()?;
    value.as_string().filter(|v| !v.is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
fn read_window_global(_global: &str, _key: &str) -> Option<String> {
    None
}

fn base_url_from_globals() -> Option<String> {
    read_window_global("__HRM_ENV", "API_BASE_URL")
        .or_else(|| read_window_global("__HRM_CONFIG", "apiBaseUrl"))
}

#[cfg(target_arch = "wasm32")]
fn config_json_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .map(|origin| format!("{origin}/config.json"))
        .unwrap_or_else(|| "/config.json".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn config_json_url() -> String {
    "http://localhost/config.json".to_string()
}

async fn fetch_runtime_config() -> Result<RuntimeConfig> {
    let url = config_json_url();
    let response = reqwest::get(&url)
        .await
        .with_context(|| format!("requesting {url}"))?;
    let config = response
        .json::<RuntimeConfig>()
        .await
        .context("parsing config.json")?;
    Ok(config)
}

/// Resolves the API base URL once and caches it. Precedence: window globals,
/// then ./config.json, then the compile-time default. Concurrent callers may
/// both fetch; the first write wins.
pub async fn await_api_base_url() -> String {
    if let Some(url) = API_BASE_URL.get() {
        return url.clone();
    }
    let resolved = match base_url_from_globals() {
        Some(url) => url,
        None => match fetch_runtime_config().await {
            Ok(config) => config
                .api_base_url
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            Err(err) => {
                log::warn!("runtime config unavailable, using default API base URL: {err:#}");
                DEFAULT_API_BASE_URL.to_string()
            }
        },
    };
    API_BASE_URL.get_or_init(|| resolved).clone()
}

/// Warm the cache at boot so the first screen's requests don't pay for it.
pub async fn init() {
    let url = await_api_base_url().await;
    log::info!("API base URL: {url}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_config_accepts_camel_case_key() {
        let config: RuntimeConfig =
            serde_json::from_str(r#"{"apiBaseUrl":"https://hrm.example.com/api"}"#).unwrap();
        assert_eq!(
            config.api_base_url.as_deref(),
            Some("https://hrm.example.com/api")
        );
    }

    #[test]
    fn runtime_config_tolerates_missing_key() {
        let config: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert!(config.api_base_url.is_none());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[tokio::test]
    async fn base_url_falls_back_to_default_without_a_browser() {
        let url = await_api_base_url().await;
        assert_eq!(url, DEFAULT_API_BASE_URL);
        // Cached for subsequent callers.
        assert_eq!(await_api_base_url().await, DEFAULT_API_BASE_URL);
    }
}
