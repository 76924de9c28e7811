use super::*;

#[test]
fn default_category_follows_training_goal() {
    assert_eq!(default_category(Goal::Hypertrophy), Category::Hypertrophy);
    assert_eq!(default_category(Goal::LoseWeight), Category::Cardio);
}

#[test]
fn each_category_has_a_curated_list() {
    assert_eq!(videos_for(Category::Hypertrophy).len(), 6);
    assert_eq!(videos_for(Category::Cardio).len(), 6);
}

#[test]
fn embed_url_targets_youtube() {
    assert_eq!(embed_url("TLnVgSs1YXY"), "https://www.youtube.com/embed/TLnVgSs1YXY");
}

#[test]
fn category_labels_match_ui_copy() {
    assert_eq!(Category::Hypertrophy.label(), "Muscle Building (Hypertrophy)");
    assert_eq!(Category::Cardio.label(), "Weight Loss (Cardio)");
}
