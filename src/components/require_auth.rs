//! Route guard for protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps `/dashboard`. The decision is taken when the route renders, so
//! children are never built for a visitor without an access token.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::cookies::SharedTokenStore;
use crate::util::auth::{gate_redirect_options, guard_view};

/// Render `children` when an access token cookie exists, else redirect to login.
#[component]
pub fn RequireAuth(children: Children) -> impl IntoView {
    let tokens = expect_context::<SharedTokenStore>();

    match guard_view(tokens.as_ref(), children) {
        Ok(view) => view.into_any(),
        Err(target) => {
            log::debug!("no access token, redirecting to {target}");
            let options = gate_redirect_options();
            view! { <Redirect path=target options=options/> }.into_any()
        }
    }
}
