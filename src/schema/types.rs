//! Schema type definitions
//!
//! Supported field types:
//! - string: UTF-8 string
//! - int: 64-bit signed integer
//! - float: 64-bit floating point
//! - bool: Boolean
//!
//! Fields are kept in declaration order. The validator walks them in that
//! order, so violations are reported in a stable sequence.

use std::fmt;

/// Supported field types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// 64-bit signed integer
    Int,
    /// 64-bit floating point
    Float,
    /// Boolean
    Bool,
}

impl FieldType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Int => "int",
            FieldType::Float => "float",
            FieldType::Bool => "bool",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// Range and shape constraints checked after type coercion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// String must contain at least one character
    NonEmpty,
    /// Integer must be strictly greater than the bound
    GreaterThan(i64),
    /// Integer must be greater than or equal to the bound
    AtLeast(i64),
    /// Float must be greater than or equal to the bound
    MinFloat(f64),
}

impl Constraint {
    /// Human-readable description used as the "expected" half of a violation
    pub fn describe(&self) -> String {
        match self {
            Constraint::NonEmpty => "non-empty string".to_string(),
            Constraint::GreaterThan(n) => format!("value greater than {}", n),
            Constraint::AtLeast(n) => format!("value greater than or equal to {}", n),
            Constraint::MinFloat(x) => format!("value greater than or equal to {}", x),
        }
    }
}

/// Field definition
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    /// Field name as it appears in mappings and serialized text
    pub name: &'static str,
    /// Field data type
    pub field_type: FieldType,
    /// Whether field must be present
    pub required: bool,
    /// Constraints checked in order once the type is satisfied
    pub constraints: Vec<Constraint>,
}

impl FieldDef {
    fn new(name: &'static str, field_type: FieldType, required: bool) -> Self {
        Self {
            name,
            field_type,
            required,
            constraints: Vec::new(),
        }
    }

    /// Create a required string field
    pub fn required_string(name: &'static str) -> Self {
        Self::new(name, FieldType::String, true)
    }

    /// Create an optional string field
    pub fn optional_string(name: &'static str) -> Self {
        Self::new(name, FieldType::String, false)
    }

    /// Create a required int field
    pub fn required_int(name: &'static str) -> Self {
        Self::new(name, FieldType::Int, true)
    }

    /// Create an optional int field
    pub fn optional_int(name: &'static str) -> Self {
        Self::new(name, FieldType::Int, false)
    }

    /// Create a required float field
    pub fn required_float(name: &'static str) -> Self {
        Self::new(name, FieldType::Float, true)
    }

    /// Adds a constraint to this field
    pub fn with(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }
}

/// Complete schema definition: a named, ordered list of fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    /// Model name, used in log events and messages
    pub name: &'static str,
    /// Field definitions in declaration order
    pub fields: Vec<FieldDef>,
}

impl Schema {
    /// Create a new schema
    pub fn new(name: &'static str, fields: Vec<FieldDef>) -> Self {
        Self { name, fields }
    }

    /// Looks up a field definition by name
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns true if the schema declares the field
    pub fn declares(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Validates the schema structure itself (not a record)
    pub fn validate_structure(&self) -> Result<(), String> {
        if self.fields.is_empty() {
            return Err(format!("Schema '{}' declares no fields", self.name));
        }

        for (i, field) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|f| f.name == field.name) {
                return Err(format!(
                    "Schema '{}' declares field '{}' more than once",
                    self.name, field.name
                ));
            }

            for constraint in &field.constraints {
                let applies = matches!(
                    (constraint, field.field_type),
                    (Constraint::NonEmpty, FieldType::String)
                        | (Constraint::GreaterThan(_), FieldType::Int)
                        | (Constraint::AtLeast(_), FieldType::Int)
                        | (Constraint::MinFloat(_), FieldType::Float)
                );
                if !applies {
                    return Err(format!(
                        "Constraint {:?} does not apply to {} field '{}'",
                        constraint, field.field_type, field.name
                    ));
                }
            }
        }

        Ok(())
    }
}
