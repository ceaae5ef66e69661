//! Wire DTOs for the users API.
//!
//! DESIGN
//! ======
//! `User` keeps unknown server fields in `extra` so whatever identity shape the
//! API returns survives a round-trip through the session store.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authenticated user identity as returned by the login endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Any other server-supplied fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl User {
    /// Identity carrying only a username.
    pub fn named(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Self::default()
        }
    }
}

/// Body of `POST login/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PasswordLogin {
    pub username: String,
    pub password: String,
}

/// Body of `POST login_code/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CodeLogin {
    pub code: String,
}

/// Body of `POST registration/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Token pair plus identity issued on a successful login.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    pub user: User,
}
