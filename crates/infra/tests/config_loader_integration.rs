//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::io::Write;
use std::time::Duration;

use carcatalogue_domain::CatalogueError;
use carcatalogue_infra::config;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_config_from_json_file() {
    let json_content = r#"{
        "api": {
            "base_url": "https://cars.example.com/",
            "connect_timeout_secs": 10,
            "request_timeout_secs": 20,
            "user_agent": "carcatalogue-tests"
        },
        "session": {
            "credentials_path": "/tmp/carcatalogue-creds.json",
            "access_cookie_name": "jwt"
        },
        "paging": { "page_size": 25 }
    }"#;

    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(json_content.as_bytes()).expect("Failed to write to temp file");

    let path = temp_file.path().with_extension("json");
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");

    let config = config::load_from_file(Some(path.clone())).expect("Failed to load config from JSON file");
    config::validate(&config).expect("loaded config should be valid");

    assert_eq!(config.api.base_url, "https://cars.example.com/");
    assert_eq!(config.api.connect_timeout(), Duration::from_secs(10));
    assert_eq!(config.api.request_timeout(), Duration::from_secs(20));
    assert_eq!(config.api.user_agent.as_deref(), Some("carcatalogue-tests"));
    assert_eq!(config.session.access_cookie_name, "jwt");
    assert_eq!(config.paging.page_size, 25);

    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_config_from_toml_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("carcatalogue.toml");
    std::fs::write(
        &path,
        r#"
[api]
base_url = "http://10.0.2.2:8082/"

[paging]
page_size = 40
"#,
    )
    .expect("Failed to write config");

    let config = config::load_from_file(Some(path)).expect("Failed to load config from TOML file");

    assert_eq!(config.api.base_url, "http://10.0.2.2:8082/");
    assert_eq!(config.api.request_timeout_secs, 30);
    assert_eq!(config.paging.page_size, 40);
}

#[test]
fn test_zero_timeout_fails_validation() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"api": {"connect_timeout_secs": 0}}"#).expect("Failed to write config");

    let config = config::load_from_file(Some(path)).expect("file itself is well-formed");
    assert!(matches!(config::validate(&config), Err(CatalogueError::Config(_))));
}

#[test]
fn test_malformed_toml_is_config_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[api\nbase_url = ").expect("Failed to write config");

    let result = config::load_from_file(Some(path));
    assert!(matches!(result, Err(CatalogueError::Config(_))));
}
