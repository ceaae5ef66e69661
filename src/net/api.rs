//! REST client for the external users API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: every call fails with `AuthError::Unavailable`, which keeps
//! the crate testable without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses and undecodable bodies all surface as
//! `AuthError`. Callers collapse them into one user-facing message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{CodeLogin, LoginResponse, PasswordLogin, Registration, User};
use crate::config::AppConfig;
use crate::error::AuthError;

pub const LOGIN_PATH: &str = "login/";
pub const LOGIN_CODE_PATH: &str = "login_code/";
pub const REGISTRATION_PATH: &str = "registration/";

/// Calls the auth forms depend on. Tests substitute a scripted fake.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// `POST login/` with username and password.
    async fn login_with_password(&self, body: &PasswordLogin) -> Result<LoginResponse, AuthError>;
    /// `POST login_code/` with a one-time code.
    async fn login_with_code(&self, body: &CodeLogin) -> Result<LoginResponse, AuthError>;
    /// `POST registration/`; the created account is returned without tokens.
    async fn register(&self, body: &Registration) -> Result<User, AuthError>;
}

/// `AuthApi` over HTTP against the configured base URL.
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    config: AppConfig,
}

impl HttpAuthApi {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl AuthApi for HttpAuthApi {
    async fn login_with_password(&self, body: &PasswordLogin) -> Result<LoginResponse, AuthError> {
        let url = self.config.endpoint(LOGIN_PATH);
        post_json(&url, body).await
    }

    async fn login_with_code(&self, body: &CodeLogin) -> Result<LoginResponse, AuthError> {
        let url = self.config.endpoint(LOGIN_CODE_PATH);
        post_json(&url, body).await
    }

    async fn register(&self, body: &Registration) -> Result<User, AuthError> {
        let url = self.config.endpoint(REGISTRATION_PATH);
        post_json(&url, body).await
    }
}

/// POST `body` as JSON and decode a JSON reply from a 2xx response.
async fn post_json<B, T>(url: &str, body: &B) -> Result<T, AuthError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(AuthError::Status(resp.status()));
        }
        resp.json::<T>()
            .await
            .map_err(|e| AuthError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (url, body);
        Err(AuthError::Unavailable)
    }
}
