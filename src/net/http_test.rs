use super::*;

#[test]
fn endpoint_prefixes_api_base() {
    assert_eq!(endpoint("/api/login"), format!("{}/api/login", api_base()));
}

#[test]
fn api_base_is_an_http_origin() {
    assert!(api_base().starts_with("http"));
    assert!(!api_base().ends_with('/'));
}

#[test]
fn bearer_value_formats_authorization_header() {
    assert_eq!(bearer_value("abc123"), "Bearer abc123");
}

#[test]
fn unauthorized_is_401() {
    assert_eq!(UNAUTHORIZED, 401);
}
