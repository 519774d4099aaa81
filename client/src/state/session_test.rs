use super::*;

fn doctor() -> Session {
    Session::new("user123", "Demo User", "demo@example.com", Role::Doctor, None)
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_default_is_none() {
    assert_eq!(Role::default(), Role::None);
}

#[test]
fn role_parse_known_tags() {
    assert_eq!(Role::parse("patient"), Some(Role::Patient));
    assert_eq!(Role::parse("doctor"), Some(Role::Doctor));
    assert_eq!(Role::parse("admin"), Some(Role::Admin));
    assert_eq!(Role::parse("none"), Some(Role::None));
}

#[test]
fn role_parse_rejects_unknown_and_wrong_case() {
    assert_eq!(Role::parse("nurse"), None);
    assert_eq!(Role::parse("Doctor"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn role_serializes_none_as_null() {
    assert_eq!(serde_json::to_value(Role::None).unwrap(), serde_json::Value::Null);
    assert_eq!(serde_json::to_value(Role::Doctor).unwrap(), serde_json::json!("doctor"));
}

#[test]
fn role_deserializes_null_and_none_tag() {
    let from_null: Role = serde_json::from_str("null").unwrap();
    let from_tag: Role = serde_json::from_str("\"none\"").unwrap();
    assert_eq!(from_null, Role::None);
    assert_eq!(from_tag, Role::None);
}

#[test]
fn role_deserialize_unknown_tag_errors() {
    assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
}

// =============================================================
// Session
// =============================================================

#[test]
fn session_serializes_with_camel_case_keys() {
    let value = serde_json::to_value(doctor()).unwrap();
    assert_eq!(value["userId"], "user123");
    assert_eq!(value["displayName"], "Demo User");
    assert_eq!(value["email"], "demo@example.com");
    assert_eq!(value["role"], "doctor");
    assert!(value["avatarUrl"].is_null());
}

#[test]
fn session_missing_role_defaults_to_none() {
    let raw = r#"{"userId":"u1","displayName":"A","email":"a@b.c"}"#;
    let session: Session = serde_json::from_str(raw).unwrap();
    assert_eq!(session.role(), Role::None);
    assert_eq!(session.avatar_url(), None);
}

#[test]
fn session_with_unknown_role_fails_to_parse() {
    let raw = r#"{"userId":"u1","displayName":"A","email":"a@b.c","role":"pilot"}"#;
    assert!(serde_json::from_str::<Session>(raw).is_err());
}

#[test]
fn session_well_formed_requires_user_id() {
    assert!(doctor().is_well_formed());
    let blank = Session::new("  ", "A", "a@b.c", Role::Patient, None);
    assert!(!blank.is_well_formed());
}

#[test]
fn session_initials_take_first_two_words() {
    assert_eq!(doctor().initials(), "DU");
    let single = Session::new("u", "jane", "j@x.y", Role::Patient, None);
    assert_eq!(single.initials(), "J");
    let triple = Session::new("u", "Mary Ann Lee", "m@x.y", Role::Patient, None);
    assert_eq!(triple.initials(), "MA");
}
