use super::*;

// =============================================================
// ApiConfig::parse
// =============================================================

#[test]
fn parse_accepts_https_and_strips_trailing_slash() {
    let cfg = ApiConfig::parse(Some("https://api.example.com/")).unwrap();
    assert_eq!(cfg.base_url(), "https://api.example.com");
}

#[test]
fn parse_trims_whitespace() {
    let cfg = ApiConfig::parse(Some("  http://localhost:8000  ")).unwrap();
    assert_eq!(cfg.base_url(), "http://localhost:8000");
}

#[test]
fn parse_keeps_path_prefix() {
    let cfg = ApiConfig::parse(Some("https://example.com/api//")).unwrap();
    assert_eq!(cfg.base_url(), "https://example.com/api");
}

#[test]
fn parse_rejects_missing_value() {
    assert_eq!(ApiConfig::parse(None), Err(ConfigError::Missing("API_BASE_URL")));
}

#[test]
fn parse_rejects_blank_value() {
    assert_eq!(ApiConfig::parse(Some("   ")), Err(ConfigError::Missing("API_BASE_URL")));
}

#[test]
fn parse_rejects_missing_scheme() {
    let err = ApiConfig::parse(Some("api.example.com")).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));
}

#[test]
fn parse_rejects_scheme_without_host() {
    let err = ApiConfig::parse(Some("https:///")).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { reason: "missing host", .. }));
}

// =============================================================
// ApiConfig::endpoint
// =============================================================

#[test]
fn endpoint_joins_with_and_without_leading_slash() {
    let cfg = ApiConfig::parse(Some("http://localhost:8000/")).unwrap();
    assert_eq!(cfg.endpoint("/threads/"), "http://localhost:8000/threads/");
    assert_eq!(cfg.endpoint("threads/users/"), "http://localhost:8000/threads/users/");
    assert_eq!(cfg.endpoint(""), "http://localhost:8000");
}

#[test]
fn config_error_messages_name_the_variable() {
    assert_eq!(
        ConfigError::Missing(API_BASE_ENV).to_string(),
        "missing required configuration: API_BASE_URL"
    );
}

#[test]
fn from_document_outside_browser_uses_build_time_value() {
    let resolved = ApiConfig::from_document();
    match option_env!("API_BASE_URL") {
        Some(raw) => assert_eq!(resolved, ApiConfig::parse(Some(raw))),
        None => assert_eq!(resolved, Err(ConfigError::Missing(API_BASE_ENV))),
    }
}
