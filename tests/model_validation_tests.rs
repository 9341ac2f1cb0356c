//! Model and request validation tests

use carnet_service::models::auth::*;
use carnet_service::models::member::*;
use validator::Validate;

#[test]
fn test_member_login_request_requires_fields() {
    let valid: MemberLoginRequest =
        serde_json::from_str(r#"{"national_id": "12345678", "password": "secret"}"#).unwrap();
    assert!(valid.validate().is_ok());

    let empty: MemberLoginRequest =
        serde_json::from_str(r#"{"national_id": "", "password": ""}"#).unwrap();
    assert!(empty.validate().is_err());
}

#[test]
fn test_create_member_request_requires_fields() {
    let json = r#"{
        "national_id": "12.345.678",
        "first_name": "Ana",
        "last_name": "García",
        "member_number": "1042",
        "password": "secret",
        "expires_on": "2026-12-31"
    }"#;
    let req: CreateMemberRequest = serde_json::from_str(json).unwrap();
    assert!(req.validate().is_ok());
    assert!(req.category.is_none());

    let missing_expiry = r#"{
        "national_id": "12345678",
        "first_name": "Ana",
        "last_name": "García",
        "member_number": "1042",
        "password": "secret"
    }"#;
    assert!(serde_json::from_str::<CreateMemberRequest>(missing_expiry).is_err());
}

#[test]
fn test_national_id_normalization() {
    assert_eq!(normalize_national_id("12.345.678").unwrap(), "12345678");
    assert_eq!(normalize_national_id("12 345 678").unwrap(), "12345678");
    assert!(normalize_national_id("12345").is_err());
    assert!(normalize_national_id("abcdefg").is_err());
}

#[test]
fn test_verify_request_requires_number() {
    let empty: VerifyCardRequest = serde_json::from_str(r#"{"member_number": ""}"#).unwrap();
    assert!(empty.validate().is_err());

    let ok: VerifyCardRequest = serde_json::from_str(r#"{"member_number": "1042"}"#).unwrap();
    assert!(ok.validate().is_ok());
}

#[test]
fn test_update_request_password_is_optional() {
    let json = r#"{
        "first_name": "Ana",
        "last_name": "García",
        "expires_on": "2027-06-30"
    }"#;
    let req: UpdateMemberRequest = serde_json::from_str(json).unwrap();
    assert!(req.validate().is_ok());
    assert!(req.password.is_none());
}

#[test]
fn test_role_tag_round_trip() {
    for (role, tag) in [(Role::Member, "\"member\""), (Role::Admin, "\"admin\"")] {
        assert_eq!(serde_json::to_string(&role).unwrap(), tag);
        let parsed: Role = serde_json::from_str(tag).unwrap();
        assert_eq!(parsed, role);
    }
}

#[test]
fn test_category_fixed_set() {
    for name in ["Titular", "Adherente", "Vitalicio"] {
        assert!(MemberCategory::parse(name).is_some());
    }
    assert!(MemberCategory::parse("Premium").is_none());
}
