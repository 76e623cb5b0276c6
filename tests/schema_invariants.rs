//! Schema Invariant Tests
//!
//! Tests for the validation gate shared by every record:
//! - Validation is deterministic
//! - All required fields must be present
//! - No undeclared fields allowed
//! - Every violation is reported, in declaration order
//! - Malformed text is a parse error, never a validation error

use menagerie::record::{Animal, Model, Person, Product};
use menagerie::schema::{RecordError, RecordErrorCode, ROOT_PATH};
use serde_json::{json, Map, Value};

// =============================================================================
// Helper Functions
// =============================================================================

fn mapping(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {}", other),
    }
}

fn violated_fields(err: &RecordError) -> Vec<String> {
    err.as_validation()
        .expect("expected a validation error")
        .fields()
        .into_iter()
        .map(String::from)
        .collect()
}

// =============================================================================
// Validation Determinism Tests
// =============================================================================

/// Same input validates the same way every time.
#[test]
fn test_validation_is_deterministic() {
    let input = mapping(json!({"breed": "Dog", "size": 12}));

    let first = Animal::parse_obj(&input).unwrap();
    for _ in 0..100 {
        assert_eq!(Animal::parse_obj(&input).unwrap(), first);
    }
}

/// Invalid input fails with the same violations every time.
#[test]
fn test_invalid_input_fails_consistently() {
    let input = mapping(json!({"size": 3, "weight": 9}));

    let first = violated_fields(&Animal::parse_obj(&input).unwrap_err());
    for _ in 0..100 {
        let err = Animal::parse_obj(&input).unwrap_err();
        assert_eq!(violated_fields(&err), first);
    }
}

// =============================================================================
// Required Field Tests
// =============================================================================

/// Missing required field fails validation.
#[test]
fn test_missing_required_field() {
    let err = Animal::parse_obj(&mapping(json!({"description": "Furry"}))).unwrap_err();

    assert_eq!(err.code(), RecordErrorCode::ValidationFailed);
    assert_eq!(violated_fields(&err), vec!["breed"]);
}

/// Null on a required field fails validation.
#[test]
fn test_null_required_field() {
    let err = Animal::parse_obj(&mapping(json!({"breed": null}))).unwrap_err();
    assert_eq!(violated_fields(&err), vec!["breed"]);
}

/// Empty breed fails validation.
#[test]
fn test_empty_breed_rejected() {
    let err = Animal::new("", None, None).unwrap_err();
    assert_eq!(violated_fields(&err), vec!["breed"]);
}

// =============================================================================
// Optional Field Tests
// =============================================================================

/// Optional fields can be omitted.
#[test]
fn test_optional_fields_omitted() {
    let animal = Animal::parse_obj(&mapping(json!({"breed": "Dog"}))).unwrap();
    assert_eq!(animal.description(), None);
    assert_eq!(animal.size(), None);
}

/// Absent size bypasses the size bound entirely.
#[test]
fn test_null_size_is_absent() {
    let animal = Animal::parse_obj(&mapping(json!({"breed": "Dog", "size": null}))).unwrap();
    assert_eq!(animal.size(), None);
}

// =============================================================================
// Constraint Tests
// =============================================================================

/// Size at or below the bound fails; just above passes.
#[test]
fn test_size_bound() {
    for size in [-1, 0, 5, 10] {
        let err = Animal::new("Dog", None, Some(size)).unwrap_err();
        assert!(err.is_validation(), "size {} should fail", size);
        assert_eq!(violated_fields(&err), vec!["size"]);
    }
    for size in [11, 12, 310, i64::MAX] {
        assert_eq!(Animal::new("Dog", None, Some(size)).unwrap().size(), Some(size));
    }
}

// =============================================================================
// Undeclared Field Tests
// =============================================================================

/// Extra undeclared field fails validation.
#[test]
fn test_extra_field_fails() {
    let err = Animal::parse_obj(&mapping(json!({"breed": "Dog", "animal_breed": "Dog"})))
        .unwrap_err();
    assert_eq!(violated_fields(&err), vec!["animal_breed"]);
}

// =============================================================================
// Aggregation Tests
// =============================================================================

/// Every violation is reported, declared fields first in order, then extras.
#[test]
fn test_all_violations_reported() {
    let err = Animal::parse_raw(r#"{"size": 5, "description": 3, "legs": 4}"#).unwrap_err();
    assert_eq!(
        violated_fields(&err),
        vec!["breed", "description", "size", "legs"]
    );
}

/// Aggregation works the same for every model.
#[test]
fn test_aggregation_across_models() {
    let err = Person::parse_raw(r#"{"first_name": "", "age": "old"}"#).unwrap_err();
    assert_eq!(violated_fields(&err), vec!["first_name", "last_name", "age"]);

    let err = Product::parse_raw(r#"{"id": -1, "name": "Phone", "price": "free"}"#).unwrap_err();
    assert_eq!(violated_fields(&err), vec!["id", "price"]);
}

// =============================================================================
// Parse vs Validation Tests
// =============================================================================

/// Truncated text is a parse error.
#[test]
fn test_truncated_text_is_parse_error() {
    let err = Animal::parse_raw(r#"{"breed": "Dog", "size": 1"#).unwrap_err();
    assert!(err.is_parse());
    assert!(!err.is_validation());
    assert_eq!(err.code().code(), "MENAGERIE_PARSE_FAILED");
}

/// Well-formed text of the wrong shape is a validation error.
#[test]
fn test_wrong_shape_is_validation_error() {
    let err = Animal::parse_raw(r#"["Dog", 12]"#).unwrap_err();
    assert!(err.is_validation());
    assert_eq!(violated_fields(&err), vec![ROOT_PATH]);
}
