use super::*;

#[test]
fn update_and_delete_paths_use_query_parameter_ids() {
    assert_eq!(update_path(3), "/api/progress/update?id=3");
    assert_eq!(delete_path(9), "/api/progress/delete?id=9");
}

#[test]
fn payload_sends_zero_for_unmeasured_metrics() {
    let payload = ProgressPayload {
        weight: 81.2,
        body_fat: 0.0,
        muscle_mass: 0.0,
        notes: None,
        progress_date: "2024-02-01".to_owned(),
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["body_fat"], serde_json::json!(0.0));
    assert_eq!(value["muscle_mass"], serde_json::json!(0.0));
    assert!(value.get("notes").is_none());
}
