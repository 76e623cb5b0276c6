//! menagerie - schema-validated toy records
//!
//! Records (animals, people, products) are built only through a schema
//! validator that reports every violation at once.

pub mod cli;
pub mod loader;
pub mod observability;
pub mod record;
pub mod schema;
