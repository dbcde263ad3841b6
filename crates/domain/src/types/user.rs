//! Account and profile wire types

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_USER_ROLE_ID;

/// The signed-in user's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    pub last_name: String,
    pub login: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub email: String,
    #[serde(default)]
    pub email_verified: bool,
}

impl UserResponse {
    /// First and last name joined, or just the last name when the first is
    /// unset or blank.
    pub fn full_name(&self) -> String {
        match self.first_name.as_deref().map(str::trim) {
            Some(first) if !first.is_empty() => format!("{first} {}", self.last_name),
            _ => self.last_name.clone(),
        }
    }
}

/// A user row as seen by an administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllUserResponse {
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    pub last_name: String,
    pub login: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub email: String,
    pub role_name: String,
    #[serde(default)]
    pub banned: bool,
    #[serde(default)]
    pub email_verified: bool,
}

/// Body of the login call.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthRequest {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for AuthRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub login: String,
    pub password: String,
    pub last_name: String,
    pub email: String,
    #[serde(rename = "RoleId", default = "default_role_id")]
    pub role_id: i64,
}

fn default_role_id() -> i64 {
    DEFAULT_USER_ROLE_ID
}

impl RegistrationRequest {
    /// Registration with the default user role.
    pub fn new(
        login: impl Into<String>,
        password: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
            last_name: last_name.into(),
            email: email.into(),
            role_id: DEFAULT_USER_ROLE_ID,
        }
    }
}

/// Partial profile update. Absent fields are omitted from the body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRequest {
    #[serde(rename = "RoleName")]
    pub role_name: String,
}

/// Token returned in a login response body, when the server sends one.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtResponse {
    pub token: String,
}

impl std::fmt::Debug for JwtResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtResponse").field("token", &"[REDACTED]").finish()
    }
}

/// Rental statistics for the profile screen. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserStats {
    pub favorite_car_id: Option<i64>,
    pub favorite_car_brand: Option<String>,
    pub favorite_car_model_name: Option<String>,
    pub favorite_car_car_class: Option<String>,
    pub total_rides: Option<i32>,
    pub rides_this_month: Option<i64>,
    pub total_spent: Option<i64>,
    pub favorite_brand: Option<String>,
    pub top_used_car_class: Option<String>,
    pub last_ride_date: Option<String>,
    pub average_time_drive: Option<f64>,
    pub average_time_to_start_drive: Option<String>,
    pub average_cost: Option<f64>,
}
