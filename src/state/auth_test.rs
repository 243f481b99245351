use super::*;
use serde_json::json;

fn session(user: serde_json::Value, role: Role) -> Session {
    Session { user, role, raw_claims: json!({}), expires_at: 0 }
}

#[test]
fn auth_state_default_is_signed_out_and_not_loading() {
    let state = AuthState::default();
    assert!(state.session.is_none());
    assert!(!state.loading);
}

#[test]
fn auth_state_pending_is_loading() {
    assert!(AuthState::pending().loading);
}

#[test]
fn auth_state_exposes_role_and_user_id() {
    let state = AuthState {
        session: Some(session(json!({ "ID": 3, "Name": "Bo" }), Role::Admin)),
        loading: false,
    };
    assert_eq!(state.role(), Some(Role::Admin));
    assert_eq!(state.user_id(), Some(3));
    assert_eq!(state.display_name(), "Bo");
}

#[test]
fn display_name_falls_back_to_role() {
    let state = AuthState { session: Some(session(json!(null), Role::Staff)), loading: false };
    assert_eq!(state.display_name(), "staff");
}

#[test]
fn display_name_is_empty_when_signed_out() {
    assert_eq!(AuthState::default().display_name(), "");
}
