use super::*;
use crate::net::error::status_error;
use crate::net::types::Role;

fn user(id: &str, name: &str) -> User {
    User { id: id.to_owned(), username: name.to_owned(), role: Role::Caretaker }
}

fn loaded() -> UsersState {
    let mut state = UsersState::default();
    state.list_loaded(Ok(vec![user("1", "Ana"), user("2", "Bruno"), user("3", "Mariana")]));
    state
}

#[test]
fn list_failure_prefers_server_message() {
    let mut state = UsersState::default();
    state.list_loaded(Err(status_error(403, r#"{"message":"Acceso denegado"}"#)));
    assert_eq!(state.users.error(), Some("Acceso denegado"));

    state.list_loaded(Err(ApiError::Network("offline".to_owned())));
    assert_eq!(state.users.error(), Some("Error al obtener la lista de usuarios"));
}

#[test]
fn filter_matches_substrings_case_insensitively() {
    let mut state = loaded();
    state.query = "ana".to_owned();
    let names: Vec<String> = state.filtered().into_iter().map(|u| u.username).collect();
    assert_eq!(names, vec!["Ana", "Mariana"]);

    state.query = "  ".to_owned();
    assert_eq!(state.filtered().len(), 3);
}

#[test]
fn filter_is_empty_while_loading() {
    assert!(UsersState::default().filtered().is_empty());
}

#[test]
fn delete_requires_confirmation() {
    let mut state = loaded();
    assert_eq!(state.confirm_delete(), None);

    state.request_delete(user("2", "Bruno"));
    state.cancel_delete();
    assert_eq!(state.confirm_delete(), None);

    state.request_delete(user("2", "Bruno"));
    assert_eq!(state.confirm_delete(), Some("2".to_owned()));
    assert!(state.deleting);
}

#[test]
fn delete_outcomes_set_messages() {
    let mut state = loaded();
    state.request_delete(user("2", "Bruno"));
    state.confirm_delete();
    state.delete_finished(Ok(()));
    assert_eq!(state.success.as_deref(), Some("Usuario eliminado exitosamente"));
    assert!(!state.deleting);

    state.request_delete(user("3", "Mariana"));
    state.confirm_delete();
    assert_eq!(state.success, None);
    state.delete_finished(Err(status_error(500, "")));
    assert_eq!(state.error.as_deref(), Some("Error al eliminar el usuario"));
}
