//! Animal record
//!
//! Fields:
//! - breed: required, non-empty string
//! - description: optional string
//! - size: optional int, strictly greater than 10 when present

use std::fmt;
use std::sync::OnceLock;

use serde_json::{json, Map, Value};

use super::{display_opt, display_opt_str, Model};
use crate::schema::{
    Constraint, FieldDef, RecordResult, Schema, ValidatedFields, ValidationError,
};

/// Sizes at or below this bound are rejected.
pub const MIN_SIZE_EXCLUSIVE: i64 = 10;

static ANIMAL_SCHEMA: OnceLock<Schema> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    breed: String,
    description: Option<String>,
    size: Option<i64>,
}

impl Animal {
    /// Builds an animal from explicit fields.
    ///
    /// Goes through the same validation as `parse_obj`, so an invalid
    /// combination fails with every violation listed.
    pub fn new(
        breed: impl Into<String>,
        description: Option<&str>,
        size: Option<i64>,
    ) -> RecordResult<Self> {
        let mut input = Map::new();
        input.insert("breed".into(), Value::String(breed.into()));
        if let Some(description) = description {
            input.insert("description".into(), Value::String(description.into()));
        }
        if let Some(size) = size {
            input.insert("size".into(), Value::from(size));
        }
        Self::parse_obj(&input)
    }

    pub fn breed(&self) -> &str {
        &self.breed
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn size(&self) -> Option<i64> {
        self.size
    }
}

impl Model for Animal {
    fn schema() -> &'static Schema {
        ANIMAL_SCHEMA.get_or_init(|| {
            Schema::new(
                "Animal",
                vec![
                    FieldDef::required_string("breed").with(Constraint::NonEmpty),
                    FieldDef::optional_string("description"),
                    FieldDef::optional_int("size")
                        .with(Constraint::GreaterThan(MIN_SIZE_EXCLUSIVE)),
                ],
            )
        })
    }

    fn from_fields(mut fields: ValidatedFields) -> Result<Self, ValidationError> {
        Ok(Self {
            breed: fields.string("breed")?,
            description: fields.opt_string("description")?,
            size: fields.opt_int("size")?,
        })
    }

    fn to_value(&self) -> Value {
        json!({
            "breed": self.breed,
            "description": self.description,
            "size": self.size,
        })
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "breed='{}' description={} size={}",
            self.breed,
            display_opt_str(&self.description),
            display_opt(&self.size)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_with_all_fields() {
        let animal = Animal::new("Dog", Some("Furry, Four Legs"), Some(11)).unwrap();
        assert_eq!(animal.breed(), "Dog");
        assert_eq!(animal.description(), Some("Furry, Four Legs"));
        assert_eq!(animal.size(), Some(11));
    }

    #[test]
    fn test_new_rejects_small_size() {
        let err = Animal::new("Dog", None, Some(5)).unwrap_err();
        assert!(err.is_validation());
        assert!(err.as_validation().unwrap().has_field("size"));
    }

    #[test]
    fn test_new_reports_every_violation() {
        let err = Animal::new("", None, Some(10)).unwrap_err();
        let validation = err.as_validation().unwrap();
        assert_eq!(validation.fields(), vec!["breed", "size"]);
    }

    #[test]
    fn test_display_format() {
        let animal = Animal::new("Dog", Some("Furry"), Some(12)).unwrap();
        assert_eq!(animal.to_string(), "breed='Dog' description='Furry' size=12");

        let bare = Animal::new("Cat", None, None).unwrap();
        assert_eq!(bare.to_string(), "breed='Cat' description=None size=None");
    }

    #[test]
    fn test_to_value_writes_absent_as_null() {
        let animal = Animal::new("Cat", None, None).unwrap();
        assert_eq!(
            animal.to_value(),
            json!({"breed": "Cat", "description": null, "size": null})
        );
    }

    #[test]
    fn test_schema_is_well_formed() {
        assert!(Animal::schema().validate_structure().is_ok());
        assert_eq!(Animal::schema().name, "Animal");
    }
}
