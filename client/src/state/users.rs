//! User management view state: the account list and delete confirmation.
//!
//! The create form reuses `FormState<UserDraft>`; after any successful create
//! or delete the component refetches the list rather than patching it.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use crate::net::error::ApiError;
use crate::net::types::User;
use crate::state::loadable::Loadable;

const LIST_FAILED: &str = "Error al obtener la lista de usuarios";
const DELETE_FAILED: &str = "Error al eliminar el usuario";
const DELETE_SUCCEEDED: &str = "Usuario eliminado exitosamente";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UsersState {
    pub users: Loadable<Vec<User>>,
    /// Client-side filter over usernames.
    pub query: String,
    pub confirm_delete: Option<User>,
    pub deleting: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl UsersState {
    pub fn list_loaded(&mut self, result: Result<Vec<User>, ApiError>) {
        self.users = match result {
            Ok(users) => Loadable::Ready(users),
            Err(err) => Loadable::Failed(err.message_or(LIST_FAILED)),
        };
    }

    /// Users whose name contains the query, case-insensitively.
    pub fn filtered(&self) -> Vec<User> {
        let needle = self.query.trim().to_lowercase();
        self.users
            .ready()
            .map(|users| {
                users
                    .iter()
                    .filter(|u| needle.is_empty() || u.username.to_lowercase().contains(&needle))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn request_delete(&mut self, user: User) {
        self.confirm_delete = Some(user);
    }

    pub fn cancel_delete(&mut self) {
        self.confirm_delete = None;
    }

    /// Returns the id to delete, or `None` if nothing is awaiting confirmation
    /// or a delete is already running.
    pub fn confirm_delete(&mut self) -> Option<String> {
        if self.deleting {
            return None;
        }
        let user = self.confirm_delete.take()?;
        self.deleting = true;
        self.error = None;
        self.success = None;
        Some(user.id)
    }

    pub fn delete_finished(&mut self, result: Result<(), ApiError>) {
        self.deleting = false;
        match result {
            Ok(()) => self.success = Some(DELETE_SUCCEEDED.to_owned()),
            Err(err) => self.error = Some(err.message_or(DELETE_FAILED)),
        }
    }
}
