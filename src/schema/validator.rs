//! Schema validator for record construction
//!
//! Validation semantics:
//! - Declared fields are checked in declaration order
//! - Each field: presence, then type coercion, then constraints
//! - Undeclared fields are rejected
//! - Every violation is collected; validation never stops at the first one
//!
//! Coercion rules:
//! - int accepts integers, integral floats (12.0) and integer text ("12")
//! - float accepts any number and numeric text
//! - string and bool accept only their own JSON type
//! - null on an optional field is the same as absent

use serde_json::{Map, Number, Value};

use super::errors::{ValidationError, Violation};
use super::types::{Constraint, FieldDef, FieldType, Schema};

/// Path used for violations concerning the input as a whole.
pub const ROOT_PATH: &str = "$root";

/// Schema validator that enforces a schema on one input mapping.
///
/// The validator does not mutate its input; it returns a separate set of
/// coerced values. Validation is deterministic.
pub struct SchemaValidator<'a> {
    schema: &'a Schema,
}

impl<'a> SchemaValidator<'a> {
    /// Creates a new validator for the given schema.
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Validates an arbitrary JSON value, which must be an object.
    pub fn validate_value(&self, value: &Value) -> Result<ValidatedFields, ValidationError> {
        let obj = value.as_object().ok_or_else(|| {
            ValidationError::single(
                self.schema.name,
                Violation::type_mismatch(ROOT_PATH, "object", json_type_name(value)),
            )
        })?;
        self.validate(obj)
    }

    /// Validates a mapping against the schema.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` listing every violation: missing required
    /// fields, nulls on required fields, type mismatches, failed constraints,
    /// and undeclared fields (in that per-field order, undeclared last).
    pub fn validate(&self, input: &Map<String, Value>) -> Result<ValidatedFields, ValidationError> {
        let mut violations = Vec::new();
        let mut values = Map::new();

        for field in &self.schema.fields {
            match input.get(field.name) {
                None => {
                    if field.required {
                        violations.push(Violation::missing_field(field.name));
                    }
                }
                Some(Value::Null) => {
                    if field.required {
                        violations.push(Violation::null_value(field.name));
                    }
                }
                Some(value) => match coerce(field, value) {
                    Ok(coerced) => {
                        let failed = check_constraints(field, &coerced);
                        if failed.is_empty() {
                            values.insert(field.name.to_string(), coerced);
                        } else {
                            violations.extend(failed);
                        }
                    }
                    Err(violation) => violations.push(violation),
                },
            }
        }

        let mut unknown: Vec<&String> = input
            .keys()
            .filter(|key| !self.schema.declares(key))
            .collect();
        unknown.sort();
        violations.extend(
            unknown
                .into_iter()
                .map(|key| Violation::unknown_field(key.as_str())),
        );

        if violations.is_empty() {
            Ok(ValidatedFields {
                model: self.schema.name,
                values,
            })
        } else {
            Err(ValidationError::new(self.schema.name, violations))
        }
    }
}

/// Coerced field values that passed validation.
///
/// Absent optional fields are simply not present. Accessors remove the value,
/// so each field is read once when the model is assembled.
#[derive(Debug, Clone)]
pub struct ValidatedFields {
    model: &'static str,
    values: Map<String, Value>,
}

impl ValidatedFields {
    fn missing(&self, name: &str) -> ValidationError {
        ValidationError::single(self.model, Violation::missing_field(name))
    }

    fn mismatch(&self, name: &str, expected: &str, value: &Value) -> ValidationError {
        ValidationError::single(
            self.model,
            Violation::type_mismatch(name, expected, json_type_name(value)),
        )
    }

    /// Takes a required string field
    pub fn string(&mut self, name: &str) -> Result<String, ValidationError> {
        self.opt_string(name)?.ok_or_else(|| self.missing(name))
    }

    /// Takes an optional string field
    pub fn opt_string(&mut self, name: &str) -> Result<Option<String>, ValidationError> {
        match self.values.remove(name) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(self.mismatch(name, "string", &other)),
        }
    }

    /// Takes a required int field
    pub fn int(&mut self, name: &str) -> Result<i64, ValidationError> {
        self.opt_int(name)?.ok_or_else(|| self.missing(name))
    }

    /// Takes an optional int field
    pub fn opt_int(&mut self, name: &str) -> Result<Option<i64>, ValidationError> {
        match self.values.remove(name) {
            None => Ok(None),
            Some(value) => match value.as_i64() {
                Some(n) => Ok(Some(n)),
                None => Err(self.mismatch(name, "int", &value)),
            },
        }
    }

    /// Takes a required float field
    pub fn float(&mut self, name: &str) -> Result<f64, ValidationError> {
        match self.values.remove(name) {
            None => Err(self.missing(name)),
            Some(value) => value
                .as_f64()
                .ok_or_else(|| self.mismatch(name, "float", &value)),
        }
    }

    /// Returns the number of values present
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no values are present
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Converts a non-null value to the field's type.
fn coerce(field: &FieldDef, value: &Value) -> Result<Value, Violation> {
    let expected = field.field_type.type_name();
    let mismatch = || Violation::type_mismatch(field.name, expected, json_type_name(value));

    match field.field_type {
        FieldType::String => match value {
            Value::String(_) => Ok(value.clone()),
            _ => Err(mismatch()),
        },
        FieldType::Bool => match value {
            Value::Bool(_) => Ok(value.clone()),
            _ => Err(mismatch()),
        },
        FieldType::Int => match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::from(i))
                } else if n.is_u64() {
                    Err(Violation::new(field.name, "int", "integer out of range"))
                } else {
                    match n.as_f64().and_then(integral_f64) {
                        Some(i) => Ok(Value::from(i)),
                        None => Err(mismatch()),
                    }
                }
            }
            Value::String(s) => s
                .trim()
                .parse::<i64>()
                .map(Value::from)
                .map_err(|_| Violation::new(field.name, "int", format!("string '{}'", s))),
            _ => Err(mismatch()),
        },
        FieldType::Float => match value {
            Value::Number(n) => n
                .as_f64()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .ok_or_else(mismatch),
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .ok_or_else(|| Violation::new(field.name, "float", format!("string '{}'", s))),
            _ => Err(mismatch()),
        },
    }
}

/// Returns the integer value of a float with no fractional part.
fn integral_f64(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// Checks every constraint on an already-coerced value.
fn check_constraints(field: &FieldDef, value: &Value) -> Vec<Violation> {
    field
        .constraints
        .iter()
        .filter(|constraint| !satisfies(constraint, value))
        .map(|constraint| Violation::new(field.name, constraint.describe(), describe_value(value)))
        .collect()
}

fn satisfies(constraint: &Constraint, value: &Value) -> bool {
    match constraint {
        Constraint::NonEmpty => value.as_str().map_or(false, |s| !s.is_empty()),
        Constraint::GreaterThan(bound) => value.as_i64().map_or(false, |n| n > *bound),
        Constraint::AtLeast(bound) => value.as_i64().map_or(false, |n| n >= *bound),
        Constraint::MinFloat(bound) => value.as_f64().map_or(false, |x| x >= *bound),
    }
}

/// Describes a value for the "actual" half of a violation.
fn describe_value(value: &Value) -> String {
    match value {
        Value::String(s) if s.is_empty() => "empty string".to_string(),
        Value::String(s) => format!("'{}'", s),
        other => other.to_string(),
    }
}

/// Returns the JSON type name for error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
