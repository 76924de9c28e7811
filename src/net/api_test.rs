use super::*;

#[test]
fn auth_paths_match_backend_routes() {
    assert_eq!(LOGIN_PATH, "/api/login");
    assert_eq!(REGISTER_PATH, "/api/register");
    assert_eq!(LOGOUT_PATH, "/api/logout");
    assert_eq!(PROFILE_PATH, "/api/profile");
    assert_eq!(HEALTH_PATH, "/health");
}

#[test]
fn login_request_serializes_credentials() {
    let request = LoginRequest {
        email: "test@example.com".to_owned(),
        password: "password123".to_owned(),
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value, serde_json::json!({"email": "test@example.com", "password": "password123"}));
}

#[test]
fn register_request_omits_unset_measurements() {
    use crate::net::types::Goal;

    let request = RegisterRequest {
        name: "Alice".to_owned(),
        email: "a@b.com".to_owned(),
        password: "secret1".to_owned(),
        goal: Goal::Hypertrophy,
        height: None,
        weight: Some(70.0),
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["goal"], "hypertrophy");
    assert!(value.get("height").is_none());
    assert_eq!(value["weight"], serde_json::json!(70.0));
}
