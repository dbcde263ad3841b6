//! Session cookie store
//!
//! In-memory cookie jar shared by every in-flight request. It plugs into
//! reqwest as a [`reqwest::cookie::CookieStore`], so responses feed it
//! automatically and a retried request picks up rotated cookies.
//!
//! Expired entries are pruned against the injected [`Clock`] before any
//! cookie is handed out.

use std::sync::Arc;

use carcatalogue_core::Clock;
use carcatalogue_domain::{default_cookie_path, SessionCookie};
use chrono::{DateTime, Utc};
use cookie::Cookie;
use parking_lot::Mutex;
use reqwest::header::HeaderValue;
use tracing::{debug, trace};
use url::Url;

/// Cookie jar keyed by `(name, domain, path)`.
pub struct SessionCookieStore {
    cookies: Mutex<Vec<SessionCookie>>,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for SessionCookieStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCookieStore").field("len", &self.cookies.lock().len()).finish()
    }
}

impl SessionCookieStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { cookies: Mutex::new(Vec::new()), clock }
    }

    /// Absorb cookies received from `origin`.
    ///
    /// A cookie replaces any stored cookie with the same name, domain and
    /// path. Cookies whose `Domain` does not cover the origin host are
    /// rejected.
    pub fn save_from_response(&self, origin: &Url, cookies: Vec<Cookie<'_>>) {
        let now = self.clock.now();
        let mut stored = self.cookies.lock();
        for raw in cookies {
            let Some(cookie) = to_session_cookie(&raw, origin, now) else {
                debug!(name = %raw.name(), host = ?origin.host_str(), "cookies.rejected");
                continue;
            };
            stored.retain(|existing| !existing.same_identity(&cookie));
            trace!(name = %cookie.name, domain = %cookie.domain, path = %cookie.path, "cookies.saved");
            stored.push(cookie);
        }
    }

    /// Cookies to send with a request to `url`, most specific path first.
    ///
    /// Expired cookies are purged first and never returned.
    pub fn load_for_request(&self, url: &Url) -> Vec<SessionCookie> {
        let now = self.clock.now();
        let mut stored = self.cookies.lock();
        prune_expired(&mut stored, now);

        let Some(host) = url.host_str() else {
            return Vec::new();
        };
        let https = url.scheme() == "https";
        let mut matching: Vec<SessionCookie> = stored
            .iter()
            .filter(|cookie| cookie.matches(host, url.path(), https))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.path.len().cmp(&a.path.len()));
        matching
    }

    /// Value of the live cookie `name` whose domain covers `url`'s host,
    /// regardless of path. The most specific path wins.
    pub fn value_for_host(&self, url: &Url, name: &str) -> Option<String> {
        let now = self.clock.now();
        let mut stored = self.cookies.lock();
        prune_expired(&mut stored, now);

        let host = url.host_str()?;
        stored
            .iter()
            .filter(|cookie| cookie.name == name && cookie.domain_matches(host))
            .max_by_key(|cookie| cookie.path.len())
            .map(|cookie| cookie.value.clone())
    }

    /// Number of stored cookies, expired ones included until the next load.
    pub fn len(&self) -> usize {
        self.cookies.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.lock().is_empty()
    }

    /// Forget every cookie.
    pub fn clear(&self) {
        self.cookies.lock().clear();
    }
}

impl reqwest::cookie::CookieStore for SessionCookieStore {
    fn set_cookies(&self, cookie_headers: &mut dyn Iterator<Item = &HeaderValue>, url: &Url) {
        let parsed: Vec<Cookie<'static>> = cookie_headers
            .filter_map(|value| value.to_str().ok())
            .filter_map(|value| Cookie::parse(value.to_string()).ok())
            .collect();
        if !parsed.is_empty() {
            self.save_from_response(url, parsed);
        }
    }

    fn cookies(&self, url: &Url) -> Option<HeaderValue> {
        let cookies = self.load_for_request(url);
        if cookies.is_empty() {
            return None;
        }
        let header = cookies
            .iter()
            .map(|cookie| format!("{}={}", cookie.name, cookie.value))
            .collect::<Vec<_>>()
            .join("; ");
        HeaderValue::from_str(&header).ok()
    }
}

fn prune_expired(cookies: &mut Vec<SessionCookie>, now: DateTime<Utc>) {
    let before = cookies.len();
    cookies.retain(|cookie| !cookie.is_expired(now));
    let pruned = before - cookies.len();
    if pruned > 0 {
        debug!(pruned, "cookies.pruned_expired");
    }
}

/// Resolve a parsed `Set-Cookie` against its origin.
fn to_session_cookie(raw: &Cookie<'_>, origin: &Url, now: DateTime<Utc>) -> Option<SessionCookie> {
    let host = origin.host_str()?.to_ascii_lowercase();

    let (domain, host_only) = match raw.domain().map(|d| d.trim_start_matches('.').to_ascii_lowercase()) {
        Some(domain) if !domain.is_empty() => {
            let covers_origin = host == domain || host.ends_with(&format!(".{domain}"));
            if !covers_origin {
                return None;
            }
            (domain, false)
        }
        _ => (host, true),
    };

    let path = match raw.path() {
        Some(path) if path.starts_with('/') => path.to_string(),
        _ => default_cookie_path(origin.path()),
    };

    // Max-Age wins over Expires; zero or negative means "delete now".
    let expires_at = if let Some(max_age) = raw.max_age() {
        let seconds = max_age.whole_seconds();
        if seconds <= 0 {
            Some(now)
        } else {
            Some(now + chrono::Duration::seconds(seconds))
        }
    } else {
        raw.expires_datetime()
            .and_then(|at| DateTime::<Utc>::from_timestamp(at.unix_timestamp(), 0))
    };

    Some(SessionCookie {
        name: raw.name().to_string(),
        value: raw.value().to_string(),
        domain,
        path,
        expires_at,
        secure: raw.secure().unwrap_or(false),
        host_only,
    })
}
