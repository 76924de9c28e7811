use super::*;

fn filled_form() -> WorkoutForm {
    WorkoutForm {
        name: "Morning Run".to_owned(),
        description: String::new(),
        duration: "30".to_owned(),
        calories_burned: "250".to_owned(),
        workout_date: "2024-01-01".to_owned(),
    }
}

#[test]
fn parse_coerces_duration_to_integer_and_calories_to_float() {
    let payload = parse_workout_form(&filled_form()).unwrap();
    assert_eq!(payload.duration, 30);
    assert_eq!(payload.calories_burned, 250.0);
    assert_eq!(payload.name, "Morning Run");
    assert_eq!(payload.workout_date, "2024-01-01");
}

#[test]
fn parse_omits_empty_description() {
    let payload = parse_workout_form(&filled_form()).unwrap();
    assert_eq!(payload.description, None);

    let mut form = filled_form();
    form.description = "  easy pace  ".to_owned();
    let payload = parse_workout_form(&form).unwrap();
    assert_eq!(payload.description.as_deref(), Some("easy pace"));
}

#[test]
fn parse_requires_name_and_date() {
    let mut form = filled_form();
    form.name = "  ".to_owned();
    assert_eq!(parse_workout_form(&form), Err("Workout name is required."));

    let mut form = filled_form();
    form.workout_date = String::new();
    assert_eq!(parse_workout_form(&form), Err("Workout date is required."));
}

#[test]
fn parse_rejects_fractional_duration() {
    let mut form = filled_form();
    form.duration = "30.5".to_owned();
    assert_eq!(parse_workout_form(&form), Err("Enter the duration in whole minutes."));
}

#[test]
fn parse_rejects_non_numeric_calories() {
    let mut form = filled_form();
    form.calories_burned = "lots".to_owned();
    assert_eq!(parse_workout_form(&form), Err("Enter the calories burned as a number."));
}

#[test]
fn parse_accepts_fractional_calories() {
    let mut form = filled_form();
    form.calories_burned = "250.5".to_owned();
    assert_eq!(parse_workout_form(&form).unwrap().calories_burned, 250.5);
}
