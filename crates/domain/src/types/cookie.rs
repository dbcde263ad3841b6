//! Session cookie model
//!
//! Matching follows the subset of RFC 6265 the remote service relies on:
//! host-only versus domain cookies, path prefixes at `/` boundaries, and the
//! `Secure` flag. Parsing `Set-Cookie` headers lives in the infra crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A cookie held by the session cookie store.
///
/// At most one cookie exists per `(name, domain, path)`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCookie {
    pub name: String,
    pub value: String,
    /// Lower-case host or domain, without a leading dot.
    pub domain: String,
    pub path: String,
    /// `None` for session cookies, which live as long as the process.
    pub expires_at: Option<DateTime<Utc>>,
    pub secure: bool,
    /// Set when the server sent no `Domain` attribute.
    pub host_only: bool,
}

impl SessionCookie {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }

    /// Whether `other` would replace this cookie.
    pub fn same_identity(&self, other: &Self) -> bool {
        self.name == other.name && self.domain == other.domain && self.path == other.path
    }

    pub fn domain_matches(&self, host: &str) -> bool {
        let host = host.to_ascii_lowercase();
        if self.host_only {
            return host == self.domain;
        }
        host == self.domain
            || host
                .strip_suffix(self.domain.as_str())
                .is_some_and(|prefix| prefix.ends_with('.'))
    }

    pub fn path_matches(&self, request_path: &str) -> bool {
        let request_path = if request_path.is_empty() { "/" } else { request_path };
        if request_path == self.path {
            return true;
        }
        request_path.starts_with(&self.path)
            && (self.path.ends_with('/') || request_path[self.path.len()..].starts_with('/'))
    }

    /// Whether this cookie should be sent with a request to `host` and
    /// `path`. Expiry is checked separately.
    pub fn matches(&self, host: &str, path: &str, https: bool) -> bool {
        (!self.secure || https) && self.domain_matches(host) && self.path_matches(path)
    }
}

impl std::fmt::Debug for SessionCookie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCookie")
            .field("name", &self.name)
            .field("value", &"[REDACTED]")
            .field("domain", &self.domain)
            .field("path", &self.path)
            .field("expires_at", &self.expires_at)
            .field("secure", &self.secure)
            .field("host_only", &self.host_only)
            .finish()
    }
}

/// Default cookie path for a response to `request_path`: its directory.
pub fn default_cookie_path(request_path: &str) -> String {
    if !request_path.starts_with('/') {
        return "/".to_string();
    }
    match request_path.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(index) => request_path[..index].to_string(),
    }
}
