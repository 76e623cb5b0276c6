//! Schema validation subsystem
//!
//! Every record is built through one validation gate. A schema is an ordered
//! list of typed fields with constraints; the validator checks an input
//! mapping against it and reports every violation at once.
//!
//! # Design Principles
//!
//! - Construction is the only validation gate
//! - Fields checked in declaration order
//! - All violations collected, no short-circuit
//! - Undeclared fields rejected
//! - Malformed text is a parse error, never a validation error

mod errors;
mod types;
mod validator;

pub use errors::{
    ParseError, RecordError, RecordErrorCode, RecordResult, ValidationError, Violation,
};
pub use types::{Constraint, FieldDef, FieldType, Schema};
pub use validator::{SchemaValidator, ValidatedFields, ROOT_PATH};

pub(crate) use validator::json_type_name;
