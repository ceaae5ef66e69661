use super::*;

#[test]
fn normalize_base_url_trims_and_rejects_blank() {
    assert_eq!(normalize_base_url(""), None);
    assert_eq!(normalize_base_url("   "), None);
    assert_eq!(
        normalize_base_url("  https://api.iiko.test/api/users  "),
        Some("https://api.iiko.test/api/users/".to_owned())
    );
    assert_eq!(
        normalize_base_url("https://api.iiko.test/api/users///"),
        Some("https://api.iiko.test/api/users/".to_owned())
    );
}

#[test]
fn resolve_falls_back_to_default() {
    assert_eq!(AppConfig::resolve(None, None), AppConfig::default());
    assert_eq!(
        AppConfig::default().api_base_url,
        "http://127.0.0.1:8000/api/users/"
    );
}

#[test]
fn resolve_prefers_runtime_over_build_time() {
    let config = AppConfig::resolve(
        Some("https://build.example/api/users/".to_owned()),
        Some("https://runtime.example/api/users/".to_owned()),
    );
    assert_eq!(config.api_base_url, "https://runtime.example/api/users/");

    let build = Some("https://build.example/api/users/".to_owned());
    let config = AppConfig::resolve(build, None);
    assert_eq!(config.api_base_url, "https://build.example/api/users/");
}

#[test]
fn endpoint_joins_relative_paths() {
    let config = AppConfig::default();
    assert_eq!(
        config.endpoint("login/"),
        "http://127.0.0.1:8000/api/users/login/"
    );
    assert_eq!(
        config.endpoint("/login_code/"),
        "http://127.0.0.1:8000/api/users/login_code/"
    );
}

#[test]
fn load_without_browser_uses_default_or_build_value() {
    let config = AppConfig::load();
    assert!(config.api_base_url.ends_with('/'));
}
