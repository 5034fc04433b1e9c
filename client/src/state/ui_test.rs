use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_light_desktop() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.sidebar_open);
    assert!(!state.is_mobile());
}

// =============================================================
// Viewport
// =============================================================

#[test]
fn mobile_threshold_is_inclusive() {
    let mut state = UiState::default();
    state.set_viewport_width(600.0);
    assert!(state.is_mobile());
    state.set_viewport_width(600.5);
    assert!(!state.is_mobile());
}

#[test]
fn leaving_mobile_closes_sidebar() {
    let mut state = UiState::default();
    state.set_viewport_width(400.0);
    state.toggle_sidebar();
    assert!(state.sidebar_open);

    state.set_viewport_width(500.0);
    assert!(state.sidebar_open);

    state.set_viewport_width(1200.0);
    assert!(!state.sidebar_open);
}
