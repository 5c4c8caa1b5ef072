//! Voter validator factory
//!
//! Builds standalone eligibility checkers from configurable rules. The
//! produced validator is a pure closure with no connection to any election
//! instance: the same descriptor always yields the same verdict.

use crate::types::{Validation, ValidationRules};
use serde_json::Value;

/// Build a voter eligibility checker from the given rules
///
/// The returned closure captures the rules and classifies a loosely-typed
/// voter descriptor:
///
/// - any required field missing → `"required fields missing"`
/// - fields present but `age` below the minimum → `"voter age must be
///   greater than <min_age>"`
/// - otherwise → `"valid voter"`
///
/// Field presence is checked before age, and the age check only applies
/// when the descriptor actually carries a numeric `age` (a descriptor
/// without `age` passes when `age` is not a required field).
///
/// # Examples
///
/// ```rust
/// use panchayat::types::ValidationRules;
/// use panchayat::validator::vote_validator;
/// use serde_json::json;
///
/// let validate = vote_validator(ValidationRules {
///     min_age: 18,
///     required_fields: vec!["id".to_string(), "age".to_string()],
/// });
///
/// assert!(!validate(&json!({ "id": "x" })).valid);
/// assert!(!validate(&json!({ "id": "x", "age": 10 })).valid);
/// assert!(validate(&json!({ "id": "x", "age": 20 })).valid);
/// ```
pub fn vote_validator(rules: ValidationRules) -> impl Fn(&Value) -> Validation {
    move |voter: &Value| {
        for required in &rules.required_fields {
            if voter.get(required).is_none() {
                return Validation {
                    valid: false,
                    reason: "required fields missing".to_string(),
                };
            }
        }

        if let Some(age) = voter.get("age").and_then(Value::as_f64)
            && age < rules.min_age as f64
        {
            return Validation {
                valid: false,
                reason: format!("voter age must be greater than {}", rules.min_age),
            };
        }

        Validation {
            valid: true,
            reason: "valid voter".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn standard_rules() -> ValidationRules {
        ValidationRules {
            min_age: 18,
            required_fields: vec!["id".to_string(), "age".to_string()],
        }
    }

    #[test]
    fn test_missing_required_field() {
        let validate = vote_validator(standard_rules());

        let verdict = validate(&json!({ "id": "x" }));
        assert!(!verdict.valid);
        assert_eq!(verdict.reason, "required fields missing");
    }

    #[test]
    fn test_underage_voter() {
        let validate = vote_validator(standard_rules());

        let verdict = validate(&json!({ "id": "x", "age": 10 }));
        assert!(!verdict.valid);
        assert_eq!(verdict.reason, "voter age must be greater than 18");
    }

    #[test]
    fn test_valid_voter() {
        let validate = vote_validator(standard_rules());

        let verdict = validate(&json!({ "id": "x", "age": 20 }));
        assert!(verdict.valid);
        assert_eq!(verdict.reason, "valid voter");
    }

    #[test]
    fn test_presence_check_precedes_age_check() {
        // Missing age reports missing fields even though 0 < min_age
        let validate = vote_validator(standard_rules());

        let verdict = validate(&json!({ "id": "x", "name": "Mohan" }));
        assert_eq!(verdict.reason, "required fields missing");
    }

    #[test]
    fn test_age_check_skipped_when_not_required_and_absent() {
        let validate = vote_validator(ValidationRules {
            min_age: 18,
            required_fields: vec!["id".to_string()],
        });

        // No age at all: nothing to compare, descriptor passes
        assert!(validate(&json!({ "id": "x" })).valid);

        // But a present underage value still fails
        assert!(!validate(&json!({ "id": "x", "age": 12 })).valid);
    }

    #[test]
    fn test_custom_minimum_age_in_reason() {
        let validate = vote_validator(ValidationRules {
            min_age: 21,
            required_fields: vec!["age".to_string()],
        });

        let verdict = validate(&json!({ "age": 19 }));
        assert_eq!(verdict.reason, "voter age must be greater than 21");
    }

    #[test]
    fn test_validator_is_pure() {
        let validate = vote_validator(standard_rules());
        let descriptor = json!({ "id": "x", "age": 20 });

        let first = validate(&descriptor);
        let second = validate(&descriptor);
        assert_eq!(first, second);
    }
}
