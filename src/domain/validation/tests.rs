// Unit tests for selection validation

use super::*;

#[test]
fn test_negative_time() {
    assert_eq!(validate(-1.0, 5.0, 0.0), Err(ValidationError::NegativeTime));
    assert_eq!(validate(0.0, -0.1, 0.0), Err(ValidationError::NegativeTime));
}

#[test]
fn test_start_not_before_end() {
    assert_eq!(validate(5.0, 5.0, 0.0), Err(ValidationError::StartNotBeforeEnd));
    assert_eq!(validate(8.0, 5.0, 30.0), Err(ValidationError::StartNotBeforeEnd));
}

#[test]
fn test_end_exceeds_duration() {
    let err = validate(0.0, 50.0, 30.0).unwrap_err();
    assert_eq!(err, ValidationError::EndExceedsDuration { duration: 30.0 });
    assert!(err.to_string().contains("30.0"));
    assert_eq!(
        err.to_string(),
        "End time cannot exceed video duration (30.0s)."
    );
}

#[test]
fn test_end_equal_to_duration_is_valid() {
    assert_eq!(validate(0.0, 30.0, 30.0), Ok(()));
}

#[test]
fn test_valid_selection() {
    assert_eq!(validate(0.0, 20.0, 30.0), Ok(()));
}

#[test]
fn test_unknown_duration_suppresses_exceeds_check() {
    assert_eq!(validate(0.0, 20.0, 0.0), Ok(()));
    assert_eq!(validate(0.0, 1.0e6, 0.0), Ok(()));
}

#[test]
fn test_precedence_negative_before_ordering() {
    // Both rule 1 and rule 2 hold
    assert_eq!(validate(-5.0, -10.0, 0.0), Err(ValidationError::NegativeTime));
}

#[test]
fn test_precedence_ordering_before_duration() {
    // Both rule 2 and rule 3 hold
    assert_eq!(
        validate(60.0, 50.0, 30.0),
        Err(ValidationError::StartNotBeforeEnd)
    );
}

#[test]
fn test_validate_is_repeatable() {
    let first = validate(3.0, 45.5, 40.0);
    for _ in 0..10 {
        assert_eq!(validate(3.0, 45.5, 40.0), first);
    }
}

#[test]
fn test_duration_message_uses_one_decimal() {
    let err = validate(0.0, 100.0, 42.25).unwrap_err();
    assert!(err.to_string().contains("(42.2s)") || err.to_string().contains("(42.3s)"));

    let err = validate(0.0, 100.0, 12.0).unwrap_err();
    assert!(err.to_string().contains("(12.0s)"));
}

#[test]
fn test_report() {
    let report = ValidationReport::new(0.0, 50.0, 30.0);
    assert!(!report.valid);
    assert_eq!(report.error.as_deref(), Some("end_exceeds_duration"));

    let report = ValidationReport::new(0.0, 20.0, 30.0);
    assert!(report.valid);
    assert!(report.error.is_none());
    assert!(report.message.is_none());

    let json = serde_json::to_string(&ValidationReport::new(5.0, 5.0, 0.0)).unwrap();
    assert!(json.contains("\"start_not_before_end\""));
}
