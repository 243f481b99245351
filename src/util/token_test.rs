use super::*;
use serde_json::json;

#[test]
fn decode_claims_reads_role_data_and_expiry() {
    let token = unsigned_token(&json!({
        "role": "student",
        "data": { "ID": 7, "Name": "Alice" },
        "exp": 1_900_000_000
    }));
    let (claims, raw) = decode_claims(&token).unwrap();
    assert_eq!(claims.role, Role::Student);
    assert_eq!(claims.data["Name"], "Alice");
    assert_eq!(claims.exp, 1_900_000_000);
    assert_eq!(raw["role"], "student");
}

#[test]
fn decode_claims_accepts_padded_payload() {
    let token = unsigned_token(&json!({ "role": "admin", "exp": 10 }));
    let mut parts = token.split('.').map(str::to_owned).collect::<Vec<_>>();
    parts[1].push_str("==");
    let (claims, _) = decode_claims(&parts.join(".")).unwrap();
    assert_eq!(claims.role, Role::Admin);
}

#[test]
fn decode_claims_maps_unknown_role() {
    let token = unsigned_token(&json!({ "role": "auditor", "exp": 10 }));
    let (claims, _) = decode_claims(&token).unwrap();
    assert_eq!(claims.role, Role::Unknown);
}

#[test]
fn decode_claims_rejects_token_without_payload() {
    assert!(matches!(decode_claims("just-a-string"), Err(TokenError::MissingPayload)));
    assert!(matches!(decode_claims("header..sig"), Err(TokenError::MissingPayload)));
}

#[test]
fn decode_claims_rejects_bad_base64() {
    assert!(matches!(decode_claims("h.***.s"), Err(TokenError::Base64(_))));
}

#[test]
fn decode_claims_rejects_missing_expiry() {
    let token = unsigned_token(&json!({ "role": "staff" }));
    assert!(matches!(decode_claims(&token), Err(TokenError::Json(_))));
}

#[test]
fn decode_claims_floors_fractional_expiry() {
    let token = unsigned_token(&json!({ "role": "student", "exp": 1_700_000_060.5 }));
    let (claims, raw) = decode_claims(&token).unwrap();
    assert_eq!(claims.exp, 1_700_000_060);
    assert_eq!(raw["exp"], 1_700_000_060.5);
}

#[test]
fn decode_claims_rejects_non_numeric_expiry() {
    let token = unsigned_token(&json!({ "role": "student", "exp": "tomorrow" }));
    assert!(matches!(decode_claims(&token), Err(TokenError::Json(_))));
}

#[test]
fn is_live_at_compares_in_milliseconds() {
    let claims = Claims { role: Role::Staff, data: serde_json::Value::Null, exp: 100 };
    assert!(claims.is_live_at(99_999));
    assert!(!claims.is_live_at(100_000));
    assert!(!claims.is_live_at(200_000));
}

#[test]
fn is_live_at_rejects_negative_expiry() {
    let claims = Claims { role: Role::Staff, data: serde_json::Value::Null, exp: -5 };
    assert!(!claims.is_live_at(0));
}

#[test]
fn role_route_prefix_matches_server_mounts() {
    assert_eq!(Role::Student.route_prefix(), Some("student"));
    assert_eq!(Role::Staff.route_prefix(), Some("staff"));
    assert_eq!(Role::Admin.route_prefix(), Some("admin"));
    assert_eq!(Role::Unknown.route_prefix(), None);
}
