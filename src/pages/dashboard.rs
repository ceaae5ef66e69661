//! Protected landing page shown after login.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::session::SessionStore;

fn greeting(user: Option<&User>) -> String {
    match user.map(|u| u.username.as_str()) {
        Some(name) if !name.is_empty() => format!("Добро пожаловать, {name}!"),
        _ => "Добро пожаловать!".to_owned(),
    }
}

/// Dashboard page. Mounted only behind `RequireAuth`.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let user = expect_context::<SessionStore>().user_signal();
    let email = move || user.with(|u| u.as_ref().and_then(|u| u.email.clone()));

    view! {
        <div class="dashboard-page">
            <h1>{move || greeting(user.get().as_ref())}</h1>
            <Show when=move || email().is_some()>
                <p class="dashboard-page__email">{move || email().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
