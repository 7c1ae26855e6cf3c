use serde_json::json;
use slotmodel_schema::{Member, StdMember, ValidationError};
use slotmodel_types::ValueKind;

// ── Defaults ──────────────────────────────────────────────────────

#[test]
fn int_default() {
    let m = StdMember::int(7);
    assert_eq!(m.default_value(), json!(7));
}

#[test]
fn text_default() {
    let m = StdMember::text("hello");
    assert_eq!(m.default_value(), json!("hello"));
}

#[test]
fn boolean_default() {
    let m = StdMember::boolean(true);
    assert_eq!(m.default_value(), json!(true));
}

#[test]
fn list_defaults_empty() {
    let m = StdMember::list();
    assert_eq!(m.default_value(), json!([]));
}

#[test]
fn map_defaults_empty() {
    let m = StdMember::map();
    assert_eq!(m.default_value(), json!({}));
}

#[test]
fn any_default_is_verbatim() {
    let m = StdMember::any(json!({"nested": [1, 2]}));
    assert_eq!(m.default_value(), json!({"nested": [1, 2]}));
}

#[test]
fn enumeration_defaults_to_first_option() {
    let m = StdMember::enumeration(vec!["open".into(), "closed".into()]);
    assert_eq!(m.default_value(), json!("open"));
}

// ── Kind validation ───────────────────────────────────────────────

#[test]
fn int_accepts_int() {
    let m = StdMember::int(0);
    assert!(m.validate(&json!(41)).is_ok());
    assert!(m.validate(&json!(-3)).is_ok());
}

#[test]
fn int_rejects_text() {
    let m = StdMember::int(0);
    let err = m.validate(&json!("41")).unwrap_err();
    assert_eq!(
        err,
        ValidationError::KindMismatch {
            expected: ValueKind::Int,
            found: ValueKind::Text,
        }
    );
}

#[test]
fn int_rejects_float() {
    let m = StdMember::int(0);
    assert!(m.validate(&json!(1.5)).is_err());
}

#[test]
fn float_accepts_int() {
    let m = StdMember::float(0.0);
    assert!(m.validate(&json!(2)).is_ok());
    assert!(m.validate(&json!(2.5)).is_ok());
}

#[test]
fn text_rejects_null() {
    let m = StdMember::text("");
    assert!(m.validate(&json!(null)).is_err());
}

#[test]
fn list_rejects_map() {
    let m = StdMember::list();
    assert!(m.validate(&json!({"a": 1})).is_err());
}

#[test]
fn any_accepts_everything() {
    let m = StdMember::any(json!(null));
    for value in [json!(null), json!(true), json!(3), json!("x"), json!([1])] {
        assert!(m.validate(&value).is_ok());
    }
}

// ── Enumeration options ───────────────────────────────────────────

#[test]
fn enumeration_accepts_listed_option() {
    let m = StdMember::enumeration(vec!["draft".into(), "sent".into()]);
    assert!(m.validate(&json!("sent")).is_ok());
}

#[test]
fn enumeration_rejects_unlisted_option() {
    let m = StdMember::enumeration(vec!["draft".into(), "sent".into()]);
    let err = m.validate(&json!("paid")).unwrap_err();
    assert_eq!(
        err,
        ValidationError::NotAnOption {
            value: "paid".into()
        }
    );
}

#[test]
fn enumeration_rejects_non_text() {
    let m = StdMember::enumeration(vec!["draft".into()]);
    assert!(matches!(
        m.validate(&json!(1)),
        Err(ValidationError::KindMismatch { .. })
    ));
}

// ── Kind reporting ────────────────────────────────────────────────

#[test]
fn std_members_report_their_kind() {
    assert_eq!(StdMember::int(0).kind(), Some(ValueKind::Int));
    assert_eq!(StdMember::float(0.0).kind(), Some(ValueKind::Float));
    assert_eq!(StdMember::text("").kind(), Some(ValueKind::Text));
    assert_eq!(StdMember::boolean(false).kind(), Some(ValueKind::Bool));
    assert_eq!(StdMember::list().kind(), Some(ValueKind::List));
    assert_eq!(StdMember::map().kind(), Some(ValueKind::Map));
}

#[test]
fn enumeration_kind_is_text() {
    let m = StdMember::enumeration(vec!["a".into()]);
    assert_eq!(m.kind(), Some(ValueKind::Text));
}

#[test]
fn any_member_reports_no_kind() {
    let m = StdMember::any(serde_json::json!(null));
    assert_eq!(m.kind(), None);
}

#[test]
fn kind_defaults_to_none_for_custom_members() {
    struct Tally;
    impl Member for Tally {
        fn default_value(&self) -> slotmodel_types::Value {
            serde_json::json!(0)
        }
    }
    assert_eq!(Tally.kind(), None);
}

// ── Error display ─────────────────────────────────────────────────

#[test]
fn kind_mismatch_message() {
    let err = ValidationError::KindMismatch {
        expected: ValueKind::Int,
        found: ValueKind::Text,
    };
    assert_eq!(err.to_string(), "expected int value, got text");
}

#[test]
fn not_an_option_message() {
    let err = ValidationError::NotAnOption { value: "x".into() };
    assert_eq!(err.to_string(), "'x' is not an allowed option");
}
