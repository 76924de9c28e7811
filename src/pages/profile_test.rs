use super::*;

#[test]
fn role_badges_highlight_admin_and_premium() {
    assert_eq!(role_badge_class(Some(Role::Admin)), "badge badge--admin");
    assert_eq!(role_badge_class(Some(Role::Premium)), "badge badge--premium");
}

#[test]
fn missing_role_renders_as_regular_user() {
    assert_eq!(role_badge_class(Some(Role::User)), "badge badge--user");
    assert_eq!(role_badge_class(None), "badge badge--user");
}
