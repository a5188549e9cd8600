//! Custom Test Assertions
//!
//! Assertion helpers for validation results that print the full error list
//! on failure.

use domain_lead::{FormField, Reason, ValidationResult};

/// Asserts that validation passed
pub fn assert_valid(result: &ValidationResult) {
    assert!(
        result.is_valid && result.errors.is_empty(),
        "Expected a valid result, got errors: {:?}",
        result.errors
    );
}

/// Asserts that exactly these fields were rejected, in this order
pub fn assert_rejected_fields(result: &ValidationResult, expected: &[FormField]) {
    let actual: Vec<FormField> = result.errors.iter().map(|e| e.field).collect();
    assert!(!result.is_valid, "Expected an invalid result");
    assert_eq!(actual, expected, "Rejected fields differ: {:?}", result.errors);
}

/// Asserts that `field` was rejected for `reason`
pub fn assert_field_error(result: &ValidationResult, field: FormField, reason: Reason) {
    assert!(
        result
            .errors
            .iter()
            .any(|e| e.field == field && e.reason == reason),
        "Expected {} to be rejected as {:?}, got: {:?}",
        field,
        reason,
        result.errors
    );
}
