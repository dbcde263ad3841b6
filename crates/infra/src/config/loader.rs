//! Configuration loader
//!
//! ## Loading Strategy
//! 1. Environment variables, when `CARCATALOGUE_API_BASE_URL` is set
//! 2. Otherwise the first config file found by [`probe_config_paths`]
//! 3. Otherwise built-in defaults
//!
//! Whatever the source, the result is validated before it is returned.
//!
//! ## Environment Variables
//! - `CARCATALOGUE_API_BASE_URL`: Remote service base URL (selects env mode)
//! - `CARCATALOGUE_CONNECT_TIMEOUT_SECS`: Connect timeout in seconds
//! - `CARCATALOGUE_REQUEST_TIMEOUT_SECS`: Whole-request timeout in seconds
//! - `CARCATALOGUE_CREDENTIALS_PATH`: Credentials record location
//! - `CARCATALOGUE_ACCESS_COOKIE`: Name of the access-token cookie
//! - `CARCATALOGUE_PAGE_SIZE`: List page size
//!
//! ## File Locations
//! `carcatalogue.{json,toml}` then `config.{json,toml}`, in the working
//! directory and then next to the executable.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use carcatalogue_domain::{CatalogueError, Config, Result};
use tracing::{debug, info};

use crate::session::context::normalize_base_url;

pub const ENV_BASE_URL: &str = "CARCATALOGUE_API_BASE_URL";
pub const ENV_CONNECT_TIMEOUT: &str = "CARCATALOGUE_CONNECT_TIMEOUT_SECS";
pub const ENV_REQUEST_TIMEOUT: &str = "CARCATALOGUE_REQUEST_TIMEOUT_SECS";
pub const ENV_CREDENTIALS_PATH: &str = "CARCATALOGUE_CREDENTIALS_PATH";
pub const ENV_ACCESS_COOKIE: &str = "CARCATALOGUE_ACCESS_COOKIE";
pub const ENV_PAGE_SIZE: &str = "CARCATALOGUE_PAGE_SIZE";

const FILE_NAMES: [&str; 4] =
    ["carcatalogue.json", "carcatalogue.toml", "config.json", "config.toml"];

/// Load configuration with the env → file → defaults fallback.
///
/// # Errors
/// Returns `CatalogueError::Config` when the selected source is malformed or
/// the resulting configuration is invalid.
pub fn load() -> Result<Config> {
    let config = match load_from_env() {
        Ok(config) => {
            info!("Configuration loaded from environment variables");
            config
        }
        Err(CatalogueError::Config(reason)) if std::env::var_os(ENV_BASE_URL).is_none() => {
            debug!(reason = %reason, "Environment not configured, trying file");
            match probe_config_paths() {
                Some(path) => load_from_file(Some(path))?,
                None => {
                    info!("No configuration found, using defaults");
                    Config::default()
                }
            }
        }
        Err(err) => return Err(err),
    };
    validate(&config)?;
    Ok(config)
}

/// Load configuration from environment variables.
///
/// `CARCATALOGUE_API_BASE_URL` is required; every other variable falls back
/// to its default when unset.
///
/// # Errors
/// Returns `CatalogueError::Config` if the base URL is missing or a numeric
/// variable does not parse.
pub fn load_from_env() -> Result<Config> {
    let mut config = Config::default();
    config.api.base_url = env_var(ENV_BASE_URL)?;

    if let Some(secs) = env_parse::<u64>(ENV_CONNECT_TIMEOUT)? {
        config.api.connect_timeout_secs = secs;
    }
    if let Some(secs) = env_parse::<u64>(ENV_REQUEST_TIMEOUT)? {
        config.api.request_timeout_secs = secs;
    }
    if let Some(path) = env_opt(ENV_CREDENTIALS_PATH) {
        config.session.credentials_path = PathBuf::from(path);
    }
    if let Some(name) = env_opt(ENV_ACCESS_COOKIE) {
        config.session.access_cookie_name = name;
    }
    if let Some(size) = env_parse::<u32>(ENV_PAGE_SIZE)? {
        config.paging.page_size = size;
    }
    Ok(config)
}

/// Load configuration from a file.
///
/// If `path` is `None`, probes the standard locations.
///
/// # Errors
/// Returns `CatalogueError::Config` if the file is missing, unreadable or
/// malformed.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(CatalogueError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            CatalogueError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| CatalogueError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration, picking the format from the file extension.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| CatalogueError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| CatalogueError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(CatalogueError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// First existing config file among the standard locations.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }
    if let Some(exe_dir) = std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf)) {
        dirs.push(exe_dir);
    }

    dirs.iter()
        .flat_map(|dir| FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.is_file())
}

/// Semantic checks plus a parseable http(s) base URL.
///
/// # Errors
/// Returns `CatalogueError::Config` describing the first violation.
pub fn validate(config: &Config) -> Result<()> {
    config.validate()?;
    normalize_base_url(&config.api.base_url)?;
    Ok(())
}

fn env_var(key: &str) -> Result<String> {
    env_opt(key).ok_or_else(|| {
        CatalogueError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Non-blank value of `key`, trimmed.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env_opt(key)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|e| CatalogueError::Config(format!("Invalid value for {key}: {e}")))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ALL_VARS: [&str; 6] = [
        ENV_BASE_URL,
        ENV_CONNECT_TIMEOUT,
        ENV_REQUEST_TIMEOUT,
        ENV_CREDENTIALS_PATH,
        ENV_ACCESS_COOKIE,
        ENV_PAGE_SIZE,
    ];

    fn clear_env() {
        for key in ALL_VARS {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn env_requires_base_url() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();

        assert!(matches!(load_from_env(), Err(CatalogueError::Config(_))));
    }

    #[test]
    fn env_overrides_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        std::env::set_var(ENV_BASE_URL, "https://cars.example.com/");
        std::env::set_var(ENV_REQUEST_TIMEOUT, "45");
        std::env::set_var(ENV_PAGE_SIZE, "50");
        std::env::set_var(ENV_ACCESS_COOKIE, "jwt");

        let config = load_from_env().unwrap();
        assert_eq!(config.api.base_url, "https://cars.example.com/");
        assert_eq!(config.api.request_timeout_secs, 45);
        assert_eq!(config.api.connect_timeout_secs, 30);
        assert_eq!(config.paging.page_size, 50);
        assert_eq!(config.session.access_cookie_name, "jwt");

        clear_env();
    }

    #[test]
    fn env_rejects_non_numeric_timeout() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        std::env::set_var(ENV_BASE_URL, "https://cars.example.com/");
        std::env::set_var(ENV_CONNECT_TIMEOUT, "soon");

        assert!(matches!(load_from_env(), Err(CatalogueError::Config(_))));
        clear_env();
    }

    #[test]
    fn invalid_env_is_not_masked_by_file_fallback() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        std::env::set_var(ENV_BASE_URL, "https://cars.example.com/");
        std::env::set_var(ENV_PAGE_SIZE, "many");

        assert!(matches!(load(), Err(CatalogueError::Config(_))));
        clear_env();
    }

    #[test]
    fn json_file_fills_missing_sections() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(br#"{"api": {"base_url": "http://localhost:9000/"}, "paging": {"page_size": 10}}"#)
            .unwrap();
        let path = temp_file.path().with_extension("json");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let config = load_from_file(Some(path.clone())).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:9000/");
        assert_eq!(config.paging.page_size, 10);
        assert_eq!(config.session.access_cookie_name, "access_token");

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn toml_is_parsed_by_extension() {
        let toml_content = r#"
[api]
base_url = "http://localhost:9000/"
connect_timeout_secs = 5

[session]
credentials_path = "/tmp/creds.json"
"#;
        let config = parse_config(toml_content, Path::new("carcatalogue.toml")).unwrap();
        assert_eq!(config.api.connect_timeout_secs, 5);
        assert_eq!(config.session.credentials_path, PathBuf::from("/tmp/creds.json"));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/carcatalogue.json")));
        assert!(matches!(result, Err(CatalogueError::Config(_))));
    }

    #[test]
    fn unsupported_format_is_rejected() {
        assert!(parse_config("a: b", Path::new("config.yaml")).is_err());
    }

    #[test]
    fn validation_rejects_unparsable_base_url() {
        let mut config = Config::default();
        config.api.base_url = "::not a url::".into();
        assert!(matches!(validate(&config), Err(CatalogueError::Config(_))));
        assert!(validate(&Config::default()).is_ok());
    }
}
