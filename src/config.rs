//! API endpoint configuration.
//!
//! The base URL comes from `IIKO_API_BASE_URL` at build time and may be
//! overridden at runtime through `window.IIKO_CONFIG.api_base_url`, so a static
//! deployment can point at another backend without rebuilding.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api/users/";

/// Frontend configuration resolved once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Users API root, always ending in `/`.
    pub api_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
        }
    }
}

impl AppConfig {
    /// Build-time value, then runtime override, then the default.
    pub fn load() -> Self {
        let build_time = option_env!("IIKO_API_BASE_URL");
        let build_time = build_time.and_then(normalize_base_url);
        Self::resolve(build_time, runtime_base_url())
    }

    fn resolve(build_time: Option<String>, runtime: Option<String>) -> Self {
        let api_base_url = runtime
            .or(build_time)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned());
        Self { api_base_url }
    }

    /// Absolute URL for an endpoint relative to the users API root.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(format!("{}/", trimmed.trim_end_matches('/')))
}

#[cfg(feature = "csr")]
fn runtime_base_url() -> Option<String> {
    use js_sys::Reflect;
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let key = JsValue::from_str("IIKO_CONFIG");
    let config = Reflect::get(&window, &key).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let key = JsValue::from_str("api_base_url");
    let value = Reflect::get(&config, &key).ok()?.as_string()?;
    normalize_base_url(&value)
}

#[cfg(not(feature = "csr"))]
fn runtime_base_url() -> Option<String> {
    None
}
