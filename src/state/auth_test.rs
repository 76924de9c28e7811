use super::*;
use crate::net::types::Goal;

fn sample_user() -> User {
    User {
        id: 1,
        name: "Alice".to_owned(),
        email: "test@example.com".to_owned(),
        goal: Goal::LoseWeight,
        role: None,
        height: None,
        weight: None,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn booting_state_is_loading_and_unauthenticated() {
    let state = AuthState::booting();
    assert!(state.loading);
    assert!(!state.authenticated);
    assert!(state.user.is_none());
}

#[test]
fn logged_in_state_is_authenticated_and_resolved() {
    let state = AuthState::logged_in(sample_user());
    assert!(state.authenticated);
    assert!(!state.loading);
    assert_eq!(state.user.as_ref().map(|u| u.email.as_str()), Some("test@example.com"));
}

#[test]
fn login_followed_by_unauthorized_converges_on_cleared_state() {
    // A 401 after a successful login must land in exactly the same state
    // as never having logged in: invalidation and logout share cleared().
    let after_login = AuthState::logged_in(sample_user());
    assert!(after_login.authenticated);

    let after_invalidation = AuthState::cleared();
    assert_eq!(after_invalidation, AuthState::restored(None, None));
    assert!(!after_invalidation.authenticated);
    assert!(after_invalidation.user.is_none());
}

#[test]
fn restoration_is_idempotent() {
    let token = Some("opaque".to_owned());
    let first = AuthState::restored(token.clone(), Some(sample_user()));
    let second = AuthState::restored(token, Some(sample_user()));
    assert_eq!(first, second);
    assert!(first.authenticated);
    assert!(!first.loading);

    let empty_first = AuthState::restored(None, None);
    let empty_second = AuthState::restored(None, None);
    assert_eq!(empty_first, empty_second);
    assert!(!empty_first.loading);
}

#[test]
fn restoration_requires_both_token_and_user() {
    assert!(!AuthState::restored(Some("t".to_owned()), None).authenticated);
    assert!(!AuthState::restored(None, Some(sample_user())).authenticated);
}

#[test]
fn invalidation_redirects_except_on_login_view() {
    assert!(should_redirect_after_invalidation("/dashboard"));
    assert!(should_redirect_after_invalidation("/workouts"));
    assert!(!should_redirect_after_invalidation("/login"));
}
