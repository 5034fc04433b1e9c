//! Username + password login.
//!
//! A successful login stores the token, fetches the profile (a failed profile
//! fetch is logged by the client and otherwise ignored), and moves to the
//! dashboard. The spinner stays up for at least [`MIN_SPINNER_MS`].

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loading::LoadingSpinner;
use crate::net::api::{ApiClient, ApiConfig};
use crate::net::error::ApiError;
use crate::state::session::SessionState;
use crate::util::auth;
use crate::util::timing::sleep_ms;

pub const MIN_SPINNER_MS: u32 = 1_500;

const MISSING_CREDENTIALS: &str = "Por favor, ingrese tanto el usuario como la contraseña";

/// Both fields are required; surrounding whitespace in the username is dropped.
pub fn validate_credentials(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Rejections from the server read as bad credentials; anything else is a generic failure.
pub fn login_error_message(err: &ApiError) -> &'static str {
    if err.status().is_some() { "Credenciales inválidas" } else { "Error en el inicio de sesión" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = use_context::<ApiConfig>().unwrap_or_default();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let navigate_home = navigate.clone();
    Effect::new(move || {
        if session.with(SessionState::is_authenticated) {
            navigate_home("/dashboard", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (user, pass) = match validate_credentials(&username.get_untracked(), &password.get_untracked()) {
            Ok(pair) => pair,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        let config = config.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let attempt = async {
                let token = ApiClient::new(&config, None).login(&user, &pass).await?;
                let profile = ApiClient::new(&config, Some(token.clone())).fetch_user_info().await.ok();
                Ok::<_, ApiError>((token, profile))
            };
            let (result, ()) = futures::join!(attempt, sleep_ms(MIN_SPINNER_MS));
            busy.set(false);
            match result {
                Ok((token, profile)) => {
                    auth::sign_in(session, token, profile);
                    navigate("/dashboard", NavigateOptions::default());
                }
                Err(err) => error.set(Some(login_error_message(&err).to_owned())),
            }
        });
    };

    view! {
        <div class="login-page">
            <Show
                when=move || !busy.get()
                fallback=|| view! { <LoadingSpinner label="Iniciando sesión..." /> }
            >
                <div class="login-card">
                    <a class="login-card__back" href="/">"← Volver"</a>
                    <h1>"Plant Tracker"</h1>
                    <p class="login-card__subtitle">"Inicia sesión para continuar"</p>
                    <form class="login-form" on:submit=on_submit.clone()>
                        <input
                            class="login-input"
                            type="text"
                            autocomplete="username"
                            placeholder="Usuario"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            autocomplete="current-password"
                            placeholder="Contraseña"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button class="login-button" type="submit">
                            "Iniciar sesión"
                        </button>
                    </form>
                    {move || error.get().map(|message| view! { <p class="login-message login-message--error">{message}</p> })}
                </div>
            </Show>
        </div>
    }
}
