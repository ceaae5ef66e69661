//! Login page supporting username/password and one-time code auth.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::AppConfig;
use crate::net::api::HttpAuthApi;
use crate::state::auth::{LoginForm, LoginMode, SubmitGuard, login_outcome, submit_login};
use crate::state::cookies::SharedTokenStore;
use crate::state::session::SessionStore;

const CODE_LEN: usize = 6;

/// Keep only digits, at most six of them.
fn normalize_code_input(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(CODE_LEN)
        .collect()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let tokens = expect_context::<SharedTokenStore>();
    let session = expect_context::<SessionStore>();
    let config = expect_context::<AppConfig>();
    let navigate = use_navigate();

    let mode = RwSignal::new(LoginMode::default());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let guard = SubmitGuard::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(ticket) = guard.try_begin() else {
            return;
        };
        error.set(String::new());

        let request = LoginForm {
            mode: mode.get_untracked(),
            username: username.get_untracked(),
            password: password.get_untracked(),
            code: code.get_untracked(),
        }
        .request();
        let api = HttpAuthApi::new(config.clone());
        let tokens = tokens.clone();
        let session = session.clone();
        let navigate = navigate.clone();

        leptos::task::spawn_local(async move {
            let store = tokens.as_ref();
            let result = submit_login(&api, store, &session, &request).await;
            drop(ticket);
            match login_outcome(&result, request.mode()) {
                Ok(route) => navigate(route, NavigateOptions::default()),
                Err(message) => error.set(message.to_owned()),
            }
        });
    };

    let is_code = move || mode.get() == LoginMode::Code;

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h2>"Авторизация"</h2>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-form__error">{move || error.get()}</p>
                </Show>

                <button
                    class="auth-form__toggle"
                    type="button"
                    on:click=move |_| mode.update(|m| *m = m.toggled())
                >
                    {move || mode.get().toggle_label()}
                </button>

                <Show
                    when=is_code
                    fallback=move || view! { <PasswordFields username=username password=password/> }
                >
                    <CodeField code=code/>
                </Show>

                <button class="auth-form__submit" type="submit" disabled=move || guard.is_busy()>
                    {move || mode.get().submit_label()}
                </button>
            </form>
        </div>
    }
}

#[component]
fn PasswordFields(username: RwSignal<String>, password: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="auth-form__group">
            <label>"Имя пользователя:"</label>
            <input
                type="text"
                name="username"
                required
                prop:value=move || username.get()
                on:input=move |ev| username.set(event_target_value(&ev))
            />
        </div>
        <div class="auth-form__group">
            <label>"Пароль:"</label>
            <input
                type="password"
                name="password"
                required
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
        </div>
    }
}

/// One-time code input; keeps only the first six digits typed or pasted.
#[component]
fn CodeField(code: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="auth-form__group">
            <label>"Код:"</label>
            <input
                type="text"
                inputmode="numeric"
                name="code"
                maxlength="6"
                required
                placeholder="Введите 6-значный код"
                prop:value=move || code.get()
                on:input=move |ev| code.set(normalize_code_input(&event_target_value(&ev)))
            />
        </div>
    }
}
