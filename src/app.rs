//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::components::require_auth::RequireAuth;
use crate::config::AppConfig;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, register::RegisterPage};
use crate::state::cookies::{BrowserCookies, SharedTokenStore};
use crate::state::session::SessionStore;

/// Root application component.
///
/// Owns the session store and token store and hands them to every route
/// through context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::load();
    log::debug!("users api at {}", config.api_base_url);

    let tokens: SharedTokenStore = Arc::new(BrowserCookies);
    let session = SessionStore::new();

    provide_context(config);
    provide_context(tokens);
    provide_context(session);

    view! {
        <Title text="vovaiiko"/>

        <Router>
            <Header/>
            <main>
                <Routes fallback=|| "Страница не найдена.".into_view()>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
