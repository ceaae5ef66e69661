//! Account registration page.
//!
//! SYSTEM CONTEXT
//! ==============
//! New accounts start inactive until the email link is confirmed, so a
//! successful registration does not sign the visitor in. The page shows an
//! activation notice and links to `/login`.
//! Neither the token cookies nor the session are touched here.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::AppConfig;
use crate::net::api::HttpAuthApi;
use crate::net::types::Registration;
use crate::routes;
use crate::state::auth::{
    REGISTRATION_FAILED, REGISTRATION_SUCCEEDED, SubmitGuard, submit_registration,
};

const FIELDS_REQUIRED: &str = "Заполните все поля";

/// Trim identity fields and require all three values.
fn validate_registration_input(
    email: &str,
    username: &str,
    password: &str,
) -> Result<Registration, &'static str> {
    let email = email.trim();
    let username = username.trim();
    if email.is_empty() || username.is_empty() || password.is_empty() {
        return Err(FIELDS_REQUIRED);
    }
    Ok(Registration {
        email: email.to_owned(),
        username: username.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();

    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let guard = SubmitGuard::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let body = match validate_registration_input(
            &email.get_untracked(),
            &username.get_untracked(),
            &password.get_untracked(),
        ) {
            Ok(body) => body,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        let Some(ticket) = guard.try_begin() else {
            return;
        };
        info.set(String::new());

        let api = HttpAuthApi::new(config.clone());
        leptos::task::spawn_local(async move {
            let result = submit_registration(&api, &body).await;
            drop(ticket);
            match result {
                Ok(_) => {
                    password.set(String::new());
                    info.set(REGISTRATION_SUCCEEDED.to_owned());
                }
                Err(_) => info.set(REGISTRATION_FAILED.to_owned()),
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h2>"Регистрация"</h2>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-form__message">{move || info.get()}</p>
                </Show>
                <div class="auth-form__group">
                    <label>"Email:"</label>
                    <input
                        type="email"
                        name="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
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
                <button class="auth-form__submit" type="submit" disabled=move || guard.is_busy()>
                    "Зарегистрироваться"
                </button>
                <p class="auth-form__hint">
                    "Уже есть аккаунт? " <A href=routes::LOGIN>"Войти"</A>
                </p>
            </form>
        </div>
    }
}
