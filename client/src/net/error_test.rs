use super::*;

#[test]
fn status_error_reads_message_field() {
    let err = status_error(400, r#"{"message":"Usuario ya existe"}"#);
    assert_eq!(err, ApiError::Status { status: 400, message: Some("Usuario ya existe".to_owned()) });
    assert_eq!(err.to_string(), "Usuario ya existe (HTTP 400)");
    assert_eq!(err.server_message(), Some("Usuario ya existe"));
}

#[test]
fn status_error_without_json_body_has_no_message() {
    let err = status_error(500, "Internal Server Error");
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.server_message(), None);
    assert_eq!(err.to_string(), "Error HTTP 500");
}

#[test]
fn blank_server_message_falls_back_to_status_text() {
    let err = ApiError::Status { status: 502, message: Some("  ".to_owned()) };
    assert_eq!(err.to_string(), "Error HTTP 502");
}

#[test]
fn status_is_reported_for_http_failures_only() {
    assert_eq!(status_error(401, "").status(), Some(401));
    assert_eq!(ApiError::Network("offline".to_owned()).status(), None);
}

#[test]
fn transport_and_shape_errors_are_human_readable() {
    assert_eq!(ApiError::Network("timeout".to_owned()).to_string(), "Error de conexión: timeout");
    assert!(ApiError::Shape("se esperaba una lista".to_owned()).to_string().contains("se esperaba una lista"));
    assert_eq!(ApiError::MissingToken.status(), None);
}

#[test]
fn message_or_prefers_non_blank_server_message() {
    assert_eq!(status_error(400, r#"{"message":" Duplicado "}"#).message_or("x"), "Duplicado");
    assert_eq!(status_error(400, r#"{"message":""}"#).message_or("x"), "x");
    assert_eq!(ApiError::Network("offline".to_owned()).message_or("x"), "x");
}
