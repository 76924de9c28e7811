use super::*;

#[test]
fn update_path_carries_id_as_query_parameter() {
    assert_eq!(update_path(42), "/api/workouts/update?id=42");
}

#[test]
fn delete_path_carries_id_as_query_parameter() {
    assert_eq!(delete_path(7), "/api/workouts/delete?id=7");
}

#[test]
fn null_list_body_means_no_workouts() {
    let workouts: Option<Vec<Workout>> = serde_json::from_str("null").unwrap();
    assert_eq!(workouts.unwrap_or_default(), Vec::<Workout>::new());
}
