//! Person record

use std::fmt;
use std::sync::OnceLock;

use serde_json::{json, Map, Value};

use super::{display_opt_str, Model};
use crate::schema::{
    Constraint, FieldDef, RecordResult, Schema, ValidatedFields, ValidationError,
};

static PERSON_SCHEMA: OnceLock<Schema> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    first_name: String,
    last_name: String,
    age: i64,
    occupation: Option<String>,
}

impl Person {
    /// Builds a person from explicit fields.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: i64,
        occupation: Option<&str>,
    ) -> RecordResult<Self> {
        let mut input = Map::new();
        input.insert("first_name".into(), Value::String(first_name.into()));
        input.insert("last_name".into(), Value::String(last_name.into()));
        input.insert("age".into(), Value::from(age));
        if let Some(occupation) = occupation {
            input.insert("occupation".into(), Value::String(occupation.into()));
        }
        Self::parse_obj(&input)
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn occupation(&self) -> Option<&str> {
        self.occupation.as_deref()
    }
}

impl Model for Person {
    fn schema() -> &'static Schema {
        PERSON_SCHEMA.get_or_init(|| {
            Schema::new(
                "Person",
                vec![
                    FieldDef::required_string("first_name").with(Constraint::NonEmpty),
                    FieldDef::required_string("last_name").with(Constraint::NonEmpty),
                    FieldDef::required_int("age").with(Constraint::AtLeast(0)),
                    FieldDef::optional_string("occupation"),
                ],
            )
        })
    }

    fn from_fields(mut fields: ValidatedFields) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: fields.string("first_name")?,
            last_name: fields.string("last_name")?,
            age: fields.int("age")?,
            occupation: fields.opt_string("occupation")?,
        })
    }

    fn to_value(&self) -> Value {
        json!({
            "first_name": self.first_name,
            "last_name": self.last_name,
            "age": self.age,
            "occupation": self.occupation,
        })
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, age {}, occupation {}",
            self.first_name,
            self.last_name,
            self.age,
            display_opt_str(&self.occupation)
        )
    }
}
