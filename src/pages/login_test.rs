use super::*;

#[test]
fn validate_builds_request_from_filled_form() {
    let request = validate_login_input("test@example.com", "password123").unwrap();
    assert_eq!(request.email, "test@example.com");
    assert_eq!(request.password, "password123");
}

#[test]
fn validate_trims_email_whitespace() {
    let request = validate_login_input("  test@example.com  ", "pw").unwrap();
    assert_eq!(request.email, "test@example.com");
}

#[test]
fn validate_requires_both_fields() {
    assert_eq!(validate_login_input("", "pw"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("a@b.com", ""), Err("Enter both email and password."));
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter both email and password."));
}

#[test]
fn backend_rejection_message_reaches_the_banner_text() {
    // The page stores ApiError::message() verbatim; a rejected login with a
    // structured body must surface "Invalid credentials".
    use crate::net::error::{ApiError, extract_error_message};

    let body = r#"{"message":"Invalid credentials"}"#;
    let err = ApiError::Status { status: 401, message: extract_error_message(401, body) };
    assert_eq!(err.message(), "Invalid credentials");
}
