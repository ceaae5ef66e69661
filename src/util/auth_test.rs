use super::*;
use std::cell::Cell;

use crate::state::cookies::{ACCESS_TOKEN, MemoryCookies, REFRESH_TOKEN};

fn login_redirect() -> GateDecision {
    GateDecision::Redirect {
        to: "/login",
        replace: true,
    }
}

fn signed_in(username: &str) -> NavState {
    NavState::SignedIn {
        username: username.to_owned(),
    }
}

#[test]
fn gate_redirects_to_login_without_token() {
    let tokens = MemoryCookies::new();
    assert_eq!(gate(&tokens), login_redirect());
}

#[test]
fn gate_renders_with_token() {
    let tokens = MemoryCookies::new();
    tokens.set(ACCESS_TOKEN, "issued", 7);
    assert_eq!(gate(&tokens), GateDecision::Render);
}

#[test]
fn gate_ignores_refresh_token_alone() {
    let tokens = MemoryCookies::new();
    tokens.set(REFRESH_TOKEN, "r", 7);
    assert!(matches!(gate(&tokens), GateDecision::Redirect { .. }));
}

#[test]
fn protected_view_never_built_without_token() {
    let tokens = MemoryCookies::new();
    let rendered = Cell::new(false);
    let out = guard_view(&tokens, || rendered.set(true));
    assert_eq!(out, Err("/login"));
    assert!(!rendered.get());
}

#[test]
fn forged_token_still_renders_protected_view() {
    let tokens = MemoryCookies::new();
    tokens.accept("access_token=not-a-real-jwt; path=/");
    assert_eq!(guard_view(&tokens, || "dashboard"), Ok("dashboard"));
}

#[test]
fn gate_redirects_after_token_expires() {
    let tokens = MemoryCookies::new();
    tokens.set(ACCESS_TOKEN, "issued", 7);
    tokens.advance(chrono::TimeDelta::days(8));
    assert_eq!(gate(&tokens), login_redirect());
}

#[test]
fn gate_redirect_options_replace_history() {
    assert!(gate_redirect_options().replace);
}

#[test]
fn nav_state_signed_out_without_token_even_with_user() {
    let tokens = MemoryCookies::new();
    let user = User::named("vova");
    assert_eq!(nav_state(&tokens, Some(&user)), NavState::SignedOut);
}

#[test]
fn nav_state_shows_session_username() {
    let tokens = MemoryCookies::new();
    tokens.set(ACCESS_TOKEN, "t", 7);
    let user = User::named("vova");
    assert_eq!(nav_state(&tokens, Some(&user)), signed_in("vova"));
}

#[test]
fn nav_state_signed_in_with_empty_name_after_reload() {
    let tokens = MemoryCookies::new();
    tokens.set(ACCESS_TOKEN, "t", 7);
    assert_eq!(nav_state(&tokens, None), signed_in(""));
}
