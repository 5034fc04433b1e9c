use super::*;
use crate::net::error::ApiError;

#[test]
fn default_is_loading() {
    let state: Loadable<Vec<u8>> = Loadable::default();
    assert!(state.is_loading());
    assert_eq!(state.ready(), None);
}

#[test]
fn from_result_keeps_error_text() {
    let state: Loadable<()> = Loadable::from_result(Err(ApiError::Network("offline".to_owned())));
    assert_eq!(state.error(), Some("Error de conexión: offline"));
    assert!(!state.is_loading());
}

#[test]
fn from_result_wraps_value() {
    let state = Loadable::<u32>::from_result::<ApiError>(Ok(7));
    assert_eq!(state.ready(), Some(&7));
    assert_eq!(state.error(), None);
}
