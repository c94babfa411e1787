use logdesk::core::validator::{from_value, is_valid, retain_valid};
use logdesk::models::TimeLogRecord;
use serde_json::json;

#[test]
fn test_accepts_login_only_and_complete_records() {
    assert!(is_valid(&json!({"date": "2024-01-01", "loginTime": "9:00 AM"})));
    assert!(is_valid(&json!({
        "date": "2024-01-01",
        "loginTime": "09:00 AM",
        "logoutTime": "5:30 PM",
        "duration": "8h 30m"
    })));
}

#[test]
fn test_extra_keys_are_ignored() {
    let v = json!({"date": "2024-01-01", "loginTime": "9:00 AM", "note": "hi"});
    assert!(is_valid(&v));

    let r = from_value(&v).expect("valid record");
    assert_eq!(r, TimeLogRecord::new("2024-01-01", "9:00 AM"));
}

#[test]
fn test_rejects_non_objects() {
    for v in [json!(null), json!("2024-01-01"), json!(42), json!([]), json!(true)] {
        assert!(!is_valid(&v), "{v} must be rejected");
    }
}

#[test]
fn test_rejects_bad_date() {
    assert!(!is_valid(&json!({"date": "2024-13-01", "loginTime": "9:00 AM"})));
    assert!(!is_valid(&json!({"date": "2024-1-01", "loginTime": "9:00 AM"})));
    assert!(!is_valid(&json!({"date": "01/01/2024", "loginTime": "9:00 AM"})));
    assert!(!is_valid(&json!({"date": 20240101, "loginTime": "9:00 AM"})));
    assert!(!is_valid(&json!({"loginTime": "9:00 AM"})));
}

#[test]
fn test_rejects_bad_login() {
    assert!(!is_valid(&json!({"date": "2024-01-01", "loginTime": "13:00 AM"})));
    assert!(!is_valid(&json!({"date": "2024-01-01", "loginTime": "9:00am"})));
    assert!(!is_valid(&json!({"date": "2024-01-01", "loginTime": 900})));
    assert!(!is_valid(&json!({"date": "2024-01-01"})));
}

#[test]
fn test_rejects_bad_optional_fields() {
    let base = |extra: serde_json::Value| {
        let mut v = json!({"date": "2024-01-01", "loginTime": "9:00 AM"});
        for (k, val) in extra.as_object().unwrap() {
            v[k] = val.clone();
        }
        v
    };

    assert!(!is_valid(&base(json!({"duration": "8 hours"}))));
    assert!(!is_valid(&base(json!({"duration": null}))));
    assert!(!is_valid(&base(json!({"logoutTime": "17:30"}))));
    assert!(!is_valid(&base(json!({"logoutTime": null}))));
}

#[test]
fn test_inconsistent_duration_is_still_structurally_valid() {
    // Cross-field consistency is not the validator's business.
    assert!(is_valid(&json!({
        "date": "2024-01-01",
        "loginTime": "9:00 AM",
        "logoutTime": "10:00 AM",
        "duration": "99h 0m"
    })));
}

#[test]
fn test_typed_validation_matches_value_validation() {
    let good = TimeLogRecord::new("2024-02-29", "12:00 PM").with_logout("1:00 PM", Some("1h 0m".into()));
    assert!(good.is_valid());
    assert!(is_valid(&serde_json::to_value(&good).unwrap()));

    let bad = TimeLogRecord::new("2023-02-29", "12:00 PM");
    assert!(!bad.is_valid());
    assert!(!is_valid(&serde_json::to_value(&bad).unwrap()));

    let kept = retain_valid(&[good.clone(), bad, good.clone()]);
    assert_eq!(kept, vec![good.clone(), good]);
}
