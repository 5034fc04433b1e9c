use super::*;

// =============================================================================
// validate_credentials
// =============================================================================

#[test]
fn validate_credentials_trims_username() {
    assert_eq!(
        validate_credentials("  ana  ", "secreto"),
        Ok(("ana".to_owned(), "secreto".to_owned()))
    );
}

#[test]
fn validate_credentials_keeps_password_verbatim() {
    assert_eq!(
        validate_credentials("ana", " con espacios "),
        Ok(("ana".to_owned(), " con espacios ".to_owned()))
    );
}

#[test]
fn validate_credentials_requires_both_fields() {
    assert_eq!(validate_credentials("", "secreto"), Err(MISSING_CREDENTIALS));
    assert_eq!(validate_credentials("   ", "secreto"), Err(MISSING_CREDENTIALS));
    assert_eq!(validate_credentials("ana", ""), Err(MISSING_CREDENTIALS));
}

// =============================================================================
// login_error_message
// =============================================================================

#[test]
fn rejected_login_reads_as_invalid_credentials() {
    let err = ApiError::Status { status: 401, message: Some("bad".to_owned()) };
    assert_eq!(login_error_message(&err), "Credenciales inválidas");
}

#[test]
fn transport_failure_reads_as_generic_error() {
    assert_eq!(login_error_message(&ApiError::Network("reset".to_owned())), "Error en el inicio de sesión");
    assert_eq!(login_error_message(&ApiError::Decode("eof".to_owned())), "Error en el inicio de sesión");
}

#[test]
fn minimum_spinner_is_one_and_a_half_seconds() {
    assert_eq!(MIN_SPINNER_MS, 1_500);
}
