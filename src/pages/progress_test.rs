use super::*;

fn filled_form() -> ProgressForm {
    ProgressForm {
        weight: "80.5".to_owned(),
        body_fat: String::new(),
        muscle_mass: String::new(),
        notes: String::new(),
        progress_date: "2024-02-01".to_owned(),
    }
}

#[test]
fn parse_coerces_weight_to_float() {
    let payload = parse_progress_form(&filled_form()).unwrap();
    assert_eq!(payload.weight, 80.5);
    assert_eq!(payload.progress_date, "2024-02-01");
}

#[test]
fn empty_optional_metrics_default_to_zero() {
    let payload = parse_progress_form(&filled_form()).unwrap();
    assert_eq!(payload.body_fat, 0.0);
    assert_eq!(payload.muscle_mass, 0.0);
    assert_eq!(payload.notes, None);
}

#[test]
fn filled_optional_metrics_are_parsed() {
    let mut form = filled_form();
    form.body_fat = "18.5".to_owned();
    form.muscle_mass = "40".to_owned();
    form.notes = " feeling strong ".to_owned();
    let payload = parse_progress_form(&form).unwrap();
    assert_eq!(payload.body_fat, 18.5);
    assert_eq!(payload.muscle_mass, 40.0);
    assert_eq!(payload.notes.as_deref(), Some("feeling strong"));
}

#[test]
fn parse_requires_numeric_weight_and_date() {
    let mut form = filled_form();
    form.weight = "heavy".to_owned();
    assert_eq!(parse_progress_form(&form), Err("Enter your weight as a number."));

    let mut form = filled_form();
    form.weight = String::new();
    assert_eq!(parse_progress_form(&form), Err("Enter your weight as a number."));

    let mut form = filled_form();
    form.progress_date = "  ".to_owned();
    assert_eq!(parse_progress_form(&form), Err("Progress date is required."));
}

#[test]
fn parse_rejects_non_numeric_optional_metrics() {
    let mut form = filled_form();
    form.body_fat = "some".to_owned();
    assert_eq!(parse_progress_form(&form), Err("Enter body fat as a number."));
}
