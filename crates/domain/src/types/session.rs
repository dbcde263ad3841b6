//! Session and cached identity
//!
//! The credential store owns both. The session pipeline reads the token and
//! clears it; nothing else mutates it.

use serde::{Deserialize, Serialize};

/// The current access credential. `None` means signed out.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub access_token: Option<String>,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self { access_token: Some(token.into()) }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    /// The token, when present and non-blank.
    pub fn token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|token| !token.trim().is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Display identity cached for the profile screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedIdentity {
    pub user_id: Option<i64>,
    pub display_name: Option<String>,
    pub email: Option<String>,
}

impl CachedIdentity {
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none() && self.display_name.is_none() && self.email.is_none()
    }

    /// Overlay the fields set in `other` onto `self`.
    #[must_use]
    pub fn merged(mut self, other: Self) -> Self {
        if other.user_id.is_some() {
            self.user_id = other.user_id;
        }
        if other.display_name.is_some() {
            self.display_name = other.display_name;
        }
        if other.email.is_some() {
            self.email = other.email;
        }
        self
    }
}

/// The single record persisted by the credential store.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCredentials {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl StoredCredentials {
    pub fn session(&self) -> Session {
        Session { access_token: self.token.clone() }
    }

    pub fn identity(&self) -> CachedIdentity {
        CachedIdentity {
            user_id: self.user_id,
            display_name: self.display_name.clone(),
            email: self.email.clone(),
        }
    }

    pub fn set_identity(&mut self, identity: CachedIdentity) {
        self.user_id = identity.user_id;
        self.display_name = identity.display_name;
        self.email = identity.email;
    }
}

impl std::fmt::Debug for StoredCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredCredentials")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("user_id", &self.user_id)
            .field("display_name", &self.display_name)
            .field("email", &self.email)
            .finish()
    }
}
