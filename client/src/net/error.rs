//! Error taxonomy for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is caught by the component that issued the call and shown
//! as a string (notification or inline banner). Nothing is retried.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No bearer token is held; the request was never sent.
    #[error("No hay token de autenticación disponible")]
    MissingToken,
    /// Transport failure (DNS, CORS, connection reset, ...).
    #[error("Error de conexión: {0}")]
    Network(String),
    /// Non-2xx HTTP response.
    #[error("{}", status_text(*status, message.as_deref()))]
    Status { status: u16, message: Option<String> },
    /// Well-formed JSON with the wrong shape, e.g. an object where a list was expected.
    #[error("Respuesta inesperada del servidor: {0}")]
    Shape(String),
    /// Body could not be parsed or did not match the expected record type.
    #[error("Respuesta inválida del servidor: {0}")]
    Decode(String),
    /// Called outside the browser (server-side rendering).
    #[error("No disponible durante el renderizado en servidor")]
    Unavailable,
}

impl ApiError {
    /// HTTP status for `Status` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-provided message, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Server message when present and non-blank, otherwise `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        self.server_message().map(str::trim).filter(|m| !m.is_empty()).unwrap_or(fallback).to_owned()
    }
}

fn status_text(status: u16, message: Option<&str>) -> String {
    match message {
        Some(msg) if !msg.trim().is_empty() => format!("{} (HTTP {status})", msg.trim()),
        _ => format!("Error HTTP {status}"),
    }
}

/// Build a `Status` error from a failed response body.
///
/// The API does not document an error schema; a top-level `message` string is
/// the only field the client reads.
pub fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned));
    ApiError::Status { status, message }
}
