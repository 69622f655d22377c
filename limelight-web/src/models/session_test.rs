//! Tests for the session state machine.
//!
//! Validates every transition the session store exposes, including the
//! properties the auth flow relies on: failures leave the session at its
//! prior value, logout always clears it, and bootstrap always settles.

use limelight_shared::models::User;

use super::session::{SessionPhase, SessionState};

fn user(id: i64) -> User {
    User {
        id,
        username: format!("user{id}"),
        email: format!("user{id}@example.com"),
    }
}

#[test]
fn starts_unknown_with_no_user() {
    let state = SessionState::default();

    assert_eq!(state.phase, SessionPhase::Unknown);
    assert!(state.user.is_none());
    assert!(state.error.is_none());
    assert!(state.is_loading());
    assert!(!state.is_authenticated());
}

#[test]
fn bootstrap_moves_through_loading() {
    let state = SessionState::begin_bootstrap();

    assert_eq!(state.phase, SessionPhase::Loading);
    assert!(state.is_loading());
}

#[test]
fn bootstrap_never_leaves_loading_set() {
    let authenticated = SessionState::bootstrap_resolved(Some(user(1)));
    assert!(!authenticated.is_loading());
    assert_eq!(authenticated.phase, SessionPhase::Authenticated);

    let anonymous = SessionState::bootstrap_resolved(None);
    assert!(!anonymous.is_loading());
    assert_eq!(anonymous.phase, SessionPhase::Anonymous);
}

#[test]
fn successful_sign_in_binds_exactly_one_user() {
    let state = SessionState::signed_in(user(3));

    assert!(state.is_authenticated());
    assert_eq!(state.user.as_ref().map(|u| u.id), Some(3));
    assert!(state.error.is_none());
}

#[test]
fn rejection_keeps_prior_session() {
    let anonymous = SessionState::signed_out();
    let after_failure = anonymous.rejected("bad credentials");

    assert_eq!(after_failure.phase, SessionPhase::Anonymous);
    assert!(after_failure.user.is_none());
    assert_eq!(after_failure.error.as_deref(), Some("bad credentials"));

    // A failed attempt while signed in keeps the signed-in user too.
    let authenticated = SessionState::signed_in(user(5));
    let still_authenticated = authenticated.rejected("bad credentials");

    assert!(still_authenticated.is_authenticated());
    assert_eq!(still_authenticated.user.as_ref().map(|u| u.id), Some(5));
}

#[test]
fn sign_in_after_rejection_clears_error() {
    let state = SessionState::signed_out().rejected("bad credentials");
    let recovered = SessionState::signed_in(user(9));

    assert!(state.error.is_some());
    assert!(recovered.error.is_none());
    assert!(recovered.is_authenticated());
}

#[test]
fn sign_out_always_clears_session() {
    let from_authenticated = SessionState::signed_out();
    assert_eq!(from_authenticated.phase, SessionPhase::Anonymous);
    assert!(from_authenticated.user.is_none());

    // Signing out while already anonymous stays anonymous.
    let again = SessionState::signed_out();
    assert_eq!(again, from_authenticated);
}

#[test]
fn user_present_iff_authenticated() {
    let states = [
        SessionState::default(),
        SessionState::begin_bootstrap(),
        SessionState::bootstrap_resolved(None),
        SessionState::bootstrap_resolved(Some(user(1))),
        SessionState::signed_in(user(2)),
        SessionState::signed_out(),
        SessionState::signed_out().rejected("nope"),
    ];

    for state in states {
        assert_eq!(
            state.user.is_some(),
            state.phase == SessionPhase::Authenticated,
            "invariant violated in {state:?}"
        );
    }
}
