//! Application constants
//!
//! Centralized location for wire paths and defaults shared across crates.

// Remote service defaults
pub const DEFAULT_BASE_URL: &str = "http://10.0.2.2:8082/";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PAGE_SIZE: u32 = 20;

// Session
pub const DEFAULT_ACCESS_COOKIE: &str = "access_token";
pub const DEFAULT_CREDENTIALS_PATH: &str = ".carcatalogue/credentials.json";

// Endpoints that establish or rotate the session themselves
pub const LOGIN_PATH: &str = "api/auth";
pub const REGISTRATION_PATH: &str = "api/registration";
pub const REFRESH_PATH: &str = "api/refresh";

// Local validation
pub const MIN_LOGIN_LENGTH: usize = 6;
pub const MIN_PASSWORD_LENGTH: usize = 6;

// Catalogue price bounds shown before the server provides real ones
pub const DEFAULT_MIN_PRICE: f64 = 500.0;
pub const DEFAULT_MAX_PRICE: f64 = 20000.0;

/// Role id the server assigns to ordinary users on registration.
pub const DEFAULT_USER_ROLE_ID: i64 = 2;
