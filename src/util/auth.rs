//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route gate and the header both derive what to show from the token
//! cookie. They must agree, so the decisions live here.
//!
//! TRADE-OFFS
//! ==========
//! The gate checks presence only. A hand-written `access_token` cookie passes;
//! the API remains the real security boundary and rejects it on use.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos_router::NavigateOptions;

use crate::net::types::User;
use crate::routes;
use crate::state::cookies::{TokenStore, has_access_token};

/// Outcome of the route gate for a protected view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Render,
    /// Navigate to `to`, replacing the blocked entry in history when `replace` is set.
    Redirect { to: &'static str, replace: bool },
}

pub fn gate(tokens: &dyn TokenStore) -> GateDecision {
    if has_access_token(tokens) {
        GateDecision::Render
    } else {
        GateDecision::Redirect {
            to: routes::LOGIN,
            replace: true,
        }
    }
}

/// Build the protected view only when the gate allows it.
///
/// # Errors
///
/// Returns the redirect target without calling `render` when no access token exists.
pub fn guard_view<T>(
    tokens: &dyn TokenStore,
    render: impl FnOnce() -> T,
) -> Result<T, &'static str> {
    match gate(tokens) {
        GateDecision::Render => Ok(render()),
        GateDecision::Redirect { to, .. } => Err(to),
    }
}

/// Router options for a gate redirect: the blocked page is not kept in history.
pub fn gate_redirect_options() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..NavigateOptions::default()
    }
}

/// What the navigation header offers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavState {
    /// Token present; `username` is empty when the session was lost on reload.
    SignedIn { username: String },
    SignedOut,
}

pub fn nav_state(tokens: &dyn TokenStore, user: Option<&User>) -> NavState {
    if !has_access_token(tokens) {
        return NavState::SignedOut;
    }
    let username = user.map(|u| u.username.clone()).unwrap_or_default();
    NavState::SignedIn { username }
}
