//! Product record

use std::fmt;
use std::sync::OnceLock;

use serde_json::{json, Map, Value};

use super::Model;
use crate::schema::{
    Constraint, FieldDef, RecordResult, Schema, ValidatedFields, ValidationError,
};

static PRODUCT_SCHEMA: OnceLock<Schema> = OnceLock::new();

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: i64,
    name: String,
    price: f64,
}

impl Product {
    /// Builds a product from explicit fields.
    pub fn new(id: i64, name: impl Into<String>, price: f64) -> RecordResult<Self> {
        let mut input = Map::new();
        input.insert("id".into(), Value::from(id));
        input.insert("name".into(), Value::String(name.into()));
        // Non-finite prices become null and fail as a missing required value.
        input.insert("price".into(), Value::from(price));
        Self::parse_obj(&input)
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

impl Model for Product {
    fn schema() -> &'static Schema {
        PRODUCT_SCHEMA.get_or_init(|| {
            Schema::new(
                "Product",
                vec![
                    FieldDef::required_int("id").with(Constraint::GreaterThan(0)),
                    FieldDef::required_string("name").with(Constraint::NonEmpty),
                    FieldDef::required_float("price").with(Constraint::MinFloat(0.0)),
                ],
            )
        })
    }

    fn from_fields(mut fields: ValidatedFields) -> Result<Self, ValidationError> {
        Ok(Self {
            id: fields.int("id")?,
            name: fields.string("name")?,
            price: fields.float("price")?,
        })
    }

    fn to_value(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "price": self.price,
        })
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} @ {:.2}", self.id, self.name, self.price)
    }
}
