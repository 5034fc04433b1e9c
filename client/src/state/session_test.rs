use super::*;

fn profile() -> UserInfo {
    UserInfo { id: "1".to_owned(), username: "ana".to_owned(), role: Role::Supervisor }
}

// =============================================================
// Section
// =============================================================

#[test]
fn section_labels_are_spanish() {
    assert_eq!(Section::Home.label(), "Inicio");
    assert_eq!(Section::PlantStatus.label(), "Estado de Plantas");
    assert_eq!(Section::Production.summary(), "Resumen de producción");
}

#[test]
fn home_cards_skip_home() {
    let cards: Vec<Section> = Section::cards().collect();
    assert_eq!(cards.len(), Section::ALL.len() - 1);
    assert!(!cards.contains(&Section::Home));
    assert_eq!(cards[0], Section::Plants);
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn restoring_state_is_loading_and_signed_out() {
    let state = SessionState::restoring();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn restore_ignores_blank_tokens() {
    let mut state = SessionState::restoring();
    state.restore(Some("  ".to_owned()));
    assert!(!state.loading);
    assert_eq!(state.token(), None);

    state.restore(Some("abc".to_owned()));
    assert_eq!(state.token(), Some("abc"));
}

#[test]
fn restored_token_picks_up_profile_later() {
    let mut state = SessionState::restoring();
    state.restore(Some("abc".to_owned()));
    assert_eq!(state.display_name(), "");

    state.restore_profile(profile());
    assert_eq!(state.display_name(), "ana");
    assert_eq!(state.role(), Some(Role::Supervisor));
}

#[test]
fn profile_arriving_after_sign_out_is_dropped() {
    let mut state = SessionState::restoring();
    state.restore(Some("abc".to_owned()));
    state.sign_out();
    state.restore_profile(profile());
    assert_eq!(state.user, None);
}

#[test]
fn selecting_a_section_leaves_authentication_unchanged() {
    let mut state = SessionState::restoring();
    state.restore(Some("abc".to_owned()));
    let before = state.is_authenticated();
    for section in Section::ALL {
        state.select(section);
        assert_eq!(state.is_authenticated(), before);
    }
}

#[test]
fn sign_in_keeps_token_even_without_profile() {
    let mut state = SessionState::default();
    state.sign_in("abc".to_owned(), None);
    assert!(state.is_authenticated());
    assert_eq!(state.role(), None);
    assert_eq!(state.display_name(), "");

    state.sign_in("abc".to_owned(), Some(profile()));
    assert_eq!(state.role(), Some(Role::Supervisor));
    assert_eq!(state.display_name(), "ana");
}

#[test]
fn sign_out_clears_session_and_returns_home() {
    let mut state = SessionState::default();
    state.sign_in("abc".to_owned(), Some(profile()));
    state.select(Section::Reports);

    state.sign_out();

    assert_eq!(state.token(), None);
    assert_eq!(state.user, None);
    assert_eq!(state.active_section, Section::Home);
}
