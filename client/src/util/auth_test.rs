use super::*;
use crate::net::types::Role;

#[test]
fn should_redirect_when_loaded_without_token() {
    let mut state = SessionState::restoring();
    state.restore(None);
    assert!(should_redirect_to_login(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = SessionState::restoring();
    assert!(!should_redirect_to_login(&state));
}

#[test]
fn should_not_redirect_when_token_exists() {
    let mut state = SessionState::default();
    state.sign_in(
        "abc".to_owned(),
        Some(UserInfo { id: "1".to_owned(), username: "ana".to_owned(), role: Role::Admin }),
    );
    assert!(!should_redirect_to_login(&state));
}

#[test]
fn should_redirect_after_sign_out() {
    let mut state = SessionState::default();
    state.sign_in("abc".to_owned(), None);
    state.sign_out();
    assert!(should_redirect_to_login(&state));
}
