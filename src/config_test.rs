use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults_port() {
    let cfg = HostConfig::from_lookup(lookup(&[("API_BASE_URL", "https://api.example.com/")])).unwrap();
    assert_eq!(cfg.api.base_url(), "https://api.example.com");
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn from_lookup_parses_port_override() {
    let cfg =
        HostConfig::from_lookup(lookup(&[("API_BASE_URL", "http://localhost:8000"), ("PORT", " 8080 ")])).unwrap();
    assert_eq!(cfg.port, 8080);
}

#[test]
fn missing_api_base_is_fatal() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "8080")])).unwrap_err();
    assert!(matches!(err, HostError::ApiBase(ConfigError::Missing("API_BASE_URL"))));
    assert_eq!(err.to_string(), "API_BASE_URL: missing required configuration: API_BASE_URL");
}

#[test]
fn invalid_api_base_is_fatal() {
    let err = HostConfig::from_lookup(lookup(&[("API_BASE_URL", "ftp://files.example.com")])).unwrap_err();
    assert!(matches!(err, HostError::ApiBase(ConfigError::Invalid { .. })));
}

#[test]
fn unparseable_port_is_fatal() {
    let err =
        HostConfig::from_lookup(lookup(&[("API_BASE_URL", "http://localhost:8000"), ("PORT", "eighty")])).unwrap_err();
    let HostError::Port { value, .. } = err else { panic!("expected port error, got {err:?}") };
    assert_eq!(value, "eighty");
}

#[test]
fn out_of_range_port_is_fatal() {
    let err =
        HostConfig::from_lookup(lookup(&[("API_BASE_URL", "http://localhost:8000"), ("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, HostError::Port { .. }));
}
