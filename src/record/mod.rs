//! Schema-validated records
//!
//! A record type declares its schema once and assembles itself from
//! validated fields. Every construction path (explicit fields, a mapping,
//! serialized text) ends in the same `SchemaValidator::validate` call, so an
//! instance that exists always satisfies its schema.
//!
//! Records have no setters. Once built, an instance cannot drift out of its
//! schema.

mod animal;
mod person;
mod product;

pub use animal::Animal;
pub use person::Person;
pub use product::Product;

use serde_json::{Map, Value};

use crate::schema::{RecordResult, Schema, SchemaValidator, ValidatedFields, ValidationError};

/// A record type validated against a fixed schema.
pub trait Model: Sized {
    /// Returns the schema every instance is validated against
    fn schema() -> &'static Schema;

    /// Assembles an instance from fields that already passed validation
    fn from_fields(fields: ValidatedFields) -> Result<Self, ValidationError>;

    /// Returns the record as a JSON object holding every declared field.
    /// Absent optional fields are written as `null`.
    fn to_value(&self) -> Value;

    /// Builds a record from a mapping of field names to values.
    ///
    /// # Errors
    ///
    /// `RecordError::Validation` listing every violation, including missing
    /// required keys and undeclared keys.
    fn parse_obj(input: &Map<String, Value>) -> RecordResult<Self> {
        let fields = SchemaValidator::new(Self::schema()).validate(input)?;
        Ok(Self::from_fields(fields)?)
    }

    /// Builds a record from an already-parsed JSON value.
    ///
    /// A value that is not an object is a validation failure on `$root`.
    fn parse_value(value: &Value) -> RecordResult<Self> {
        let fields = SchemaValidator::new(Self::schema()).validate_value(value)?;
        Ok(Self::from_fields(fields)?)
    }

    /// Builds a record from JSON text.
    ///
    /// # Errors
    ///
    /// `RecordError::Parse` if the text is not well-formed JSON,
    /// `RecordError::Validation` if it is well-formed but violates the schema.
    fn parse_raw(text: &str) -> RecordResult<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::parse_value(&value)
    }

    /// Serializes the record to compact JSON text.
    fn to_json(&self) -> String {
        self.to_value().to_string()
    }
}

/// Formats an optional display value the way records print absent fields.
pub(crate) fn display_opt<T: std::fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "None".to_string(),
    }
}

/// Formats an optional string with quotes, or `None`.
pub(crate) fn display_opt_str(value: &Option<String>) -> String {
    match value {
        Some(s) => format!("'{}'", s),
        None => "None".to_string(),
    }
}
