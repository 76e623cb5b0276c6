//! Output handling for CLI
//!
//! - text: `<label> <display form>` per line
//! - json: one `{"label": ..., "record": {...}}` object per line
//! - UTF-8 only

use std::fmt::Display;
use std::io::Write;

use serde_json::json;

use super::args::OutputFormat;
use super::errors::CliResult;
use crate::record::Model;

/// Write one labelled record in the chosen format
pub fn write_record<W, M>(out: &mut W, label: &str, record: &M, format: OutputFormat) -> CliResult<()>
where
    W: Write,
    M: Model + Display,
{
    match format {
        OutputFormat::Text => {
            writeln!(out, "{} {}", label, record)?;
        }
        OutputFormat::Json => {
            let line = json!({
                "label": label,
                "record": record.to_value(),
            });
            serde_json::to_writer(&mut *out, &line)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    Ok(())
}
