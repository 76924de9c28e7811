use super::*;

#[test]
fn builds_request_with_optional_measurements() {
    let request =
        build_register_request("Alice", "a@b.com", "secret1", Goal::Hypertrophy, "170.5", "").unwrap();
    assert_eq!(request.goal, Goal::Hypertrophy);
    assert_eq!(request.height, Some(170.5));
    assert_eq!(request.weight, None);
}

#[test]
fn requires_name_email_and_password() {
    assert_eq!(
        build_register_request("", "a@b.com", "secret1", Goal::LoseWeight, "", ""),
        Err("Name, email, and password are required.")
    );
    assert_eq!(
        build_register_request("Alice", "  ", "secret1", Goal::LoseWeight, "", ""),
        Err("Name, email, and password are required.")
    );
}

#[test]
fn enforces_minimum_password_length() {
    assert_eq!(
        build_register_request("Alice", "a@b.com", "short", Goal::LoseWeight, "", ""),
        Err("Password must be at least 6 characters.")
    );
}

#[test]
fn rejects_unparseable_measurements() {
    assert_eq!(
        build_register_request("Alice", "a@b.com", "secret1", Goal::LoseWeight, "tall", ""),
        Err("Enter a valid height.")
    );
    assert_eq!(
        build_register_request("Alice", "a@b.com", "secret1", Goal::LoseWeight, "", "heavy"),
        Err("Enter a valid weight.")
    );
}

#[test]
fn goal_select_defaults_to_lose_weight() {
    assert_eq!(goal_from_value("hypertrophy"), Goal::Hypertrophy);
    assert_eq!(goal_from_value("lose_weight"), Goal::LoseWeight);
    assert_eq!(goal_from_value("unexpected"), Goal::LoseWeight);
}
