//! Top navigation bar with login/logout affordances.
//!
//! SYSTEM CONTEXT
//! ==============
//! Re-derives its state whenever the route or session identity changes, so a
//! login or logout elsewhere is reflected on the next navigation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routes;
use crate::state::auth::logout;
use crate::state::cookies::SharedTokenStore;
use crate::state::session::SessionStore;
use crate::util::auth::{NavState, nav_state};

#[component]
pub fn Header() -> impl IntoView {
    let tokens = expect_context::<SharedTokenStore>();
    let session = expect_context::<SessionStore>();
    let user = session.user_signal();
    let location = use_location();
    let navigate = use_navigate();

    let nav_tokens = tokens.clone();
    let nav = move || {
        location.pathname.track();
        nav_state(nav_tokens.as_ref(), user.get().as_ref())
    };

    let on_logout = move |_| {
        let route = logout(tokens.as_ref(), &session);
        navigate(route, NavigateOptions::default());
    };

    view! {
        <header class="app-header">
            <div class="app-header__logo">"vovaiiko"</div>
            <div class="app-header__actions">
                {move || match nav() {
                    NavState::SignedIn { username } => {
                        view! {
                            <span class="app-header__user">{username}</span>
                            <button class="app-header__button" on:click=on_logout.clone()>
                                "Выйти"
                            </button>
                        }
                            .into_any()
                    }
                    NavState::SignedOut => {
                        view! {
                            <A href=routes::REGISTER attr:class="app-header__button">
                                "Регистрация"
                            </A>
                            <A href=routes::LOGIN attr:class="app-header__button">
                                "Авторизация"
                            </A>
                        }
                            .into_any()
                    }
                }}
            </div>
        </header>
    }
}
