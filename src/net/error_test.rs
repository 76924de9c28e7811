use super::*;

#[test]
fn extract_prefers_structured_message_field() {
    let body = r#"{"error":"Unauthorized","message":"Invalid credentials"}"#;
    assert_eq!(extract_error_message(401, body), "Invalid credentials");
}

#[test]
fn extract_falls_back_to_error_field_when_message_missing() {
    let body = r#"{"error":"Bad Request"}"#;
    assert_eq!(extract_error_message(400, body), "Bad Request");
}

#[test]
fn extract_uses_raw_body_when_not_structured() {
    assert_eq!(extract_error_message(500, "database is down"), "database is down");
}

#[test]
fn extract_uses_json_string_body() {
    assert_eq!(extract_error_message(404, r#""workout not found""#), "workout not found");
}

#[test]
fn extract_generates_generic_message_for_empty_body() {
    assert_eq!(extract_error_message(502, ""), "request failed with status 502");
    assert_eq!(extract_error_message(502, "   "), "request failed with status 502");
}

#[test]
fn extract_ignores_empty_structured_fields() {
    let body = r#"{"message":"","error":""}"#;
    assert_eq!(extract_error_message(500, body), body);
}

#[test]
fn message_accessor_returns_display_text() {
    let err = ApiError::Status { status: 401, message: "Invalid credentials".to_owned() };
    assert_eq!(err.message(), "Invalid credentials");
    assert_eq!(err.status(), Some(401));

    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.message(), "connection refused");
    assert_eq!(err.status(), None);
}

#[test]
fn display_includes_status_code() {
    let err = ApiError::Status { status: 404, message: "not found".to_owned() };
    assert_eq!(err.to_string(), "404: not found");
}
