use super::*;

#[test]
fn storage_keys_match_backend_contract() {
    assert_eq!(TOKEN_KEY, "token");
    assert_eq!(USER_KEY, "user");
}

#[test]
fn host_target_has_no_durable_storage() {
    // Off the browser the mirror is inert: reads are empty and writes are
    // no-ops, so pure-logic tests never observe stale session data.
    assert_eq!(token(), None);
    assert!(stored_user().is_none());
    clear_session();
}
