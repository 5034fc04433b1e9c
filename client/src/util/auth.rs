//! Shared session helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical unauthenticated redirect behavior, and
//! every token transition goes through `sign_in`/`sign_out` here so local
//! storage and the `SessionState` context never disagree.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;

use super::storage;
use crate::net::api::{ApiClient, ApiConfig};
use crate::net::types::UserInfo;
use crate::state::session::SessionState;

/// True once the stored token has been read and none was found.
pub fn should_redirect_to_login(state: &SessionState) -> bool {
    !state.loading && !state.is_authenticated()
}

/// Redirect to `/login` whenever the session has loaded without a token.
pub fn install_login_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_to_login(&session.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Read the persisted token into the session and reload the profile for it.
/// Called once at startup.
pub fn restore(session: RwSignal<SessionState>) {
    let token = storage::load_token();
    session.update(|s| s.restore(token));
    if !session.with_untracked(SessionState::is_authenticated) {
        return;
    }
    let client = api_client(session);
    spawn_local(async move {
        if let Ok(user) = client.fetch_user_info().await {
            session.update(|s| s.restore_profile(user));
        }
    });
}

pub fn sign_in(session: RwSignal<SessionState>, token: String, user: Option<UserInfo>) {
    storage::save_token(&token);
    session.update(|s| s.sign_in(token, user));
}

pub fn sign_out(session: RwSignal<SessionState>) {
    storage::clear_token();
    session.update(SessionState::sign_out);
}

/// API handle carrying the current token.
///
/// Must be called synchronously from a component or event handler (it reads
/// the `ApiConfig` context), never from inside a spawned future.
pub fn api_client(session: RwSignal<SessionState>) -> ApiClient {
    let config = use_context::<ApiConfig>().unwrap_or_default();
    ApiClient::new(&config, session.with_untracked(|s| s.token().map(str::to_owned)))
}
