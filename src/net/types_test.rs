use super::*;

#[test]
fn goal_serializes_as_snake_case() {
    assert_eq!(serde_json::to_string(&Goal::LoseWeight).unwrap(), r#""lose_weight""#);
    assert_eq!(serde_json::to_string(&Goal::Hypertrophy).unwrap(), r#""hypertrophy""#);
}

#[test]
fn goal_labels_match_ui_copy() {
    assert_eq!(Goal::LoseWeight.label(), "Lose Weight");
    assert_eq!(Goal::Hypertrophy.label(), "Hypertrophy");
}

#[test]
fn user_deserializes_without_optional_fields() {
    let body = r#"{"id":1,"name":"Alice","email":"a@b.com","goal":"hypertrophy"}"#;
    let user: User = serde_json::from_str(body).unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.goal, Goal::Hypertrophy);
    assert_eq!(user.role, None);
    assert_eq!(user.height, None);
}

#[test]
fn user_deserializes_role_variants() {
    let body = r#"{"id":2,"name":"B","email":"b@c.com","goal":"lose_weight","role":"premium"}"#;
    let user: User = serde_json::from_str(body).unwrap();
    assert_eq!(user.role, Some(Role::Premium));
}

#[test]
fn workout_payload_serializes_numbers_not_strings() {
    let payload = WorkoutPayload {
        name: "Morning Run".to_owned(),
        description: None,
        duration: 30,
        calories_burned: 250.0,
        workout_date: "2024-01-01".to_owned(),
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["duration"], serde_json::json!(30));
    assert_eq!(value["calories_burned"], serde_json::json!(250.0));
    // Unset description is omitted entirely rather than sent as null.
    assert!(value.get("description").is_none());
}

#[test]
fn progress_entry_defaults_unmeasured_metrics_to_zero() {
    let body = r#"{"id":7,"user_id":1,"weight":80.5,"progress_date":"2024-02-01"}"#;
    let entry: Progress = serde_json::from_str(body).unwrap();
    assert_eq!(entry.body_fat, 0.0);
    assert_eq!(entry.muscle_mass, 0.0);
    assert_eq!(entry.notes, None);
}

#[test]
fn meal_plan_tolerates_missing_foods_array() {
    let body = r#"{"user_id":1,"goal":"lose_weight","total_calories":1800.0,"total_protein":120.0,"total_carbs":150.0,"total_fat":60.0}"#;
    let plan: MealPlan = serde_json::from_str(body).unwrap();
    assert!(plan.foods.is_empty());
}

#[test]
fn auth_response_round_trips() {
    let body = r#"{"user":{"id":1,"name":"Alice","email":"a@b.com","goal":"lose_weight"},"token":"opaque-token"}"#;
    let resp: AuthResponse = serde_json::from_str(body).unwrap();
    assert_eq!(resp.token, "opaque-token");
    assert_eq!(resp.user.name, "Alice");
}
