use super::*;

#[test]
fn default_endpoint_is_same_origin() {
    let endpoint = ApiEndpoint::default();
    assert_eq!(endpoint.base_url(), "");
    assert_eq!(endpoint.config_url(), "/api/v1/config");
}

#[test]
fn config_url_appends_fixed_path() {
    let endpoint = ApiEndpoint::new("https://assist.example.test");
    assert_eq!(endpoint.config_url(), "https://assist.example.test/api/v1/config");
}

#[test]
fn trailing_slash_is_trimmed() {
    let endpoint = ApiEndpoint::new("http://127.0.0.1:8080/");
    assert_eq!(endpoint.config_url(), "http://127.0.0.1:8080/api/v1/config");
}

// Only test that touches `API_BASE_URL`; keep it that way to avoid env races.
#[test]
fn from_env_reads_base_url_and_defaults_to_empty() {
    unsafe { std::env::remove_var(BASE_URL_ENV) };
    assert_eq!(ApiEndpoint::from_env(), ApiEndpoint::default());

    unsafe { std::env::set_var(BASE_URL_ENV, "https://cfg.example.test/") };
    assert_eq!(ApiEndpoint::from_env().base_url(), "https://cfg.example.test");

    unsafe { std::env::remove_var(BASE_URL_ENV) };
}
