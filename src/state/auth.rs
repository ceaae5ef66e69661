//! Login, registration and logout flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages collect input and hand it here. A successful login is the only path
//! that writes the token cookies and the session identity; logout is the only
//! path that clears them. Failures leave both untouched.
//!
//! CONCURRENCY
//! ===========
//! Submit handlers suspend on the network call. `SubmitGuard` rejects a second
//! submit while one is in flight, so a slow earlier response can never
//! overwrite a later one. Its flag is a signal, so the same value also drives
//! the disabled state of the submit button.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::error::AuthError;
use crate::net::api::AuthApi;
use crate::net::types::{CodeLogin, PasswordLogin, Registration, User};
use crate::routes;
use crate::state::cookies::{TokenStore, clear_token_pair, save_token_pair};
use crate::state::session::SessionStore;

pub const PASSWORD_LOGIN_FAILED: &str = "Неверное имя пользователя или пароль";
pub const CODE_LOGIN_FAILED: &str = "Неверный код";
pub const REGISTRATION_FAILED: &str = "Ошибка регистрации";
pub const REGISTRATION_SUCCEEDED: &str = "Аккаунт создан. Подтвердите email и войдите.";

/// Which credential set the login form submits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginMode {
    #[default]
    Password,
    Code,
}

impl LoginMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Password => Self::Code,
            Self::Code => Self::Password,
        }
    }

    /// Static message shown for any failed attempt in this mode.
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Password => PASSWORD_LOGIN_FAILED,
            Self::Code => CODE_LOGIN_FAILED,
        }
    }

    /// Label of the button that switches to the other mode.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Password => "Авторизация по коду",
            Self::Code => "Авторизация по логину и паролю",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Password => "Войти",
            Self::Code => "Войти по коду",
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Password => "password",
            Self::Code => "code",
        }
    }
}

/// Raw login form fields. Toggling the mode keeps every field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub mode: LoginMode,
    pub username: String,
    pub password: String,
    pub code: String,
}

impl LoginForm {
    /// Request for the active mode; the other mode's fields are not sent.
    pub fn request(&self) -> LoginRequest {
        match self.mode {
            LoginMode::Password => LoginRequest::Password(PasswordLogin {
                username: self.username.clone(),
                password: self.password.clone(),
            }),
            LoginMode::Code => LoginRequest::Code(CodeLogin {
                code: self.code.trim().to_owned(),
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginRequest {
    Password(PasswordLogin),
    Code(CodeLogin),
}

impl LoginRequest {
    pub fn mode(&self) -> LoginMode {
        match self {
            Self::Password(_) => LoginMode::Password,
            Self::Code(_) => LoginMode::Code,
        }
    }
}

/// Authenticate, then store the token pair and the returned identity.
///
/// # Errors
///
/// Returns the API error unchanged; tokens and session are not touched.
pub async fn submit_login<A: AuthApi>(
    api: &A,
    tokens: &dyn TokenStore,
    session: &SessionStore,
    request: &LoginRequest,
) -> Result<User, AuthError> {
    let result = match request {
        LoginRequest::Password(body) => api.login_with_password(body).await,
        LoginRequest::Code(body) => api.login_with_code(body).await,
    };
    let response = result.inspect_err(|e| {
        log::error!("{} login failed: {e}", request.mode().as_str());
    })?;

    save_token_pair(tokens, &response.access, &response.refresh);
    session.set_user(Some(response.user.clone()));
    log::info!("signed in as {:?}", response.user.username);
    Ok(response.user)
}

/// Route to open after a login attempt, or the message to display instead.
///
/// # Errors
///
/// Returns the mode's static failure message when the attempt failed.
pub fn login_outcome(
    result: &Result<User, AuthError>,
    mode: LoginMode,
) -> Result<&'static str, &'static str> {
    match result {
        Ok(_) => Ok(routes::DASHBOARD),
        Err(_) => Err(mode.failure_message()),
    }
}

/// Create an account. Registration issues no tokens.
///
/// # Errors
///
/// Returns the API error after logging it.
pub async fn submit_registration<A: AuthApi>(
    api: &A,
    body: &Registration,
) -> Result<User, AuthError> {
    let user = api
        .register(body)
        .await
        .inspect_err(|e| log::error!("registration failed: {e}"))?;
    log::info!("registered {:?}", user.username);
    Ok(user)
}

/// Drop both token cookies and the session identity; returns the route to open.
pub fn logout(tokens: &dyn TokenStore, session: &SessionStore) -> &'static str {
    clear_token_pair(tokens);
    session.clear();
    log::info!("signed out");
    routes::LOGIN
}

/// In-flight flag shared by a form's submit handler and its submit button.
#[derive(Clone, Copy, Debug)]
pub struct SubmitGuard {
    busy: RwSignal<bool>,
}

impl Default for SubmitGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmitGuard {
    pub fn new() -> Self {
        Self {
            busy: RwSignal::new(false),
        }
    }

    /// Claim the guard, or `None` if a submit is already pending.
    pub fn try_begin(self) -> Option<SubmitTicket> {
        if self.busy.get_untracked() {
            return None;
        }
        self.busy.set(true);
        Some(SubmitTicket { busy: self.busy })
    }

    /// Tracked read; views re-render when a submit starts or ends.
    pub fn is_busy(self) -> bool {
        self.busy.get()
    }
}

/// Releases its `SubmitGuard` when dropped.
#[derive(Debug)]
pub struct SubmitTicket {
    busy: RwSignal<bool>,
}

impl Drop for SubmitTicket {
    fn drop(&mut self) {
        // The page may already be gone; a disposed flag needs no reset.
        let _ = self.busy.try_set(false);
    }
}
