use super::*;
use crate::net::types::{Goal, User};

fn authed_state() -> AuthState {
    AuthState::logged_in(User {
        id: 1,
        name: "Alice".to_owned(),
        email: "a@b.com".to_owned(),
        goal: Goal::Hypertrophy,
        role: None,
        height: None,
        weight: None,
        created_at: None,
        updated_at: None,
    })
}

#[test]
fn protected_route_shows_loading_while_unresolved() {
    let state = AuthState::booting();
    assert_eq!(protected_outcome(&state), GuardOutcome::Loading);
}

#[test]
fn protected_route_redirects_unauthenticated_to_login() {
    let state = AuthState::cleared();
    assert_eq!(protected_outcome(&state), GuardOutcome::RedirectToLogin);
}

#[test]
fn protected_route_allows_live_session() {
    assert_eq!(protected_outcome(&authed_state()), GuardOutcome::Allow);
}

#[test]
fn guest_route_redirects_authenticated_to_dashboard() {
    assert_eq!(guest_redirect_target(&authed_state()), Some("/dashboard"));
}

#[test]
fn guest_route_renders_for_unauthenticated_or_loading() {
    assert_eq!(guest_redirect_target(&AuthState::cleared()), None);
    assert_eq!(guest_redirect_target(&AuthState::booting()), None);
}

#[test]
fn guard_redirects_replace_history() {
    assert!(replace_options().replace);
}
