//! Data file loader
//!
//! The data file is a JSON array of objects, each one a record. The file is
//! read once; every element is validated and the violations of all elements
//! are reported together, each path prefixed with the element index.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::Value;

use crate::record::Model;
use crate::schema::{
    json_type_name, RecordError, RecordResult, ValidationError, Violation, ROOT_PATH,
};

/// Reads and validates every record in the data file at `path`.
///
/// # Errors
///
/// - `RecordError::Io` if the file cannot be opened or read
/// - `RecordError::Parse` if the contents are not well-formed JSON
/// - `RecordError::Validation` if the top level is not an array or any
///   element violates the schema
pub fn load_records<M: Model>(path: &Path) -> RecordResult<Vec<M>> {
    let file = File::open(path).map_err(|e| RecordError::io(path, e))?;
    let mut text = String::new();
    BufReader::new(file)
        .read_to_string(&mut text)
        .map_err(|e| RecordError::io(path, e))?;

    parse_records(&text)
}

/// Validates every record in a JSON array held in memory.
pub fn parse_records<M: Model>(text: &str) -> RecordResult<Vec<M>> {
    let value: Value = serde_json::from_str(text)?;
    let model = M::schema().name;

    let items = value.as_array().ok_or_else(|| {
        ValidationError::single(
            model,
            Violation::type_mismatch(ROOT_PATH, "array", json_type_name(&value)),
        )
    })?;

    let mut records = Vec::with_capacity(items.len());
    let mut violations = Vec::new();

    for (i, item) in items.iter().enumerate() {
        match M::parse_value(item) {
            Ok(record) => records.push(record),
            Err(RecordError::Validation(e)) => {
                let prefix = format!("[{}]", i);
                violations.extend(
                    e.violations()
                        .iter()
                        .map(|v| nest_under_index(v, &prefix)),
                );
            }
            Err(other) => return Err(other),
        }
    }

    if violations.is_empty() {
        Ok(records)
    } else {
        Err(ValidationError::new(model, violations).into())
    }
}

/// `$root` of an element becomes the bare index path (`[2]`).
fn nest_under_index(violation: &Violation, prefix: &str) -> Violation {
    if violation.field == ROOT_PATH {
        Violation::new(prefix, violation.expected.clone(), violation.actual.clone())
    } else {
        violation.prefixed(prefix)
    }
}
