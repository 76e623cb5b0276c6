//! The run command
//!
//! Prints, in order:
//! 1. the demo product and person
//! 2. three animals, one per construction path (fields, mapping, text)
//! 3. every animal in the data file
//!
//! Any record failure aborts the run.

use std::io::{self, Write};

use serde_json::{Map, Value};

use super::args::Cli;
use super::config::Config;
use super::errors::CliResult;
use super::io::write_record;
use crate::loader::load_records;
use crate::observability::{log_event, log_event_with_fields, Event, Logger};
use crate::record::{Animal, Model, Person, Product};
use crate::schema::RecordResult;

/// The serialized animal built through the text path.
const DEMO_ANIMAL_TEXT: &str =
    r#"{"breed": "Dog", "description": "Furry, Four Legs", "size": 310}"#;

/// Parse arguments and run against stdout
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(&cli, &mut out)
}

/// Run with already-parsed arguments, writing records to `out`
pub fn run_with<W: Write>(cli: &Cli, out: &mut W) -> CliResult<()> {
    let config = Config::resolve(cli)?;
    Logger::set_min_severity(config.severity()?);

    log_event(Event::RunStart);
    let data_file = config.data_file.display().to_string();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("data_file", data_file.as_str()),
            ("log_level", config.log_level.as_str()),
        ],
    );

    let result = print_records(&config, out);

    match &result {
        Ok(()) => log_event(Event::RunComplete),
        Err(e) => log_event_with_fields(
            Event::RunFailed,
            &[("code", e.code_str()), ("message", e.message())],
        ),
    }

    result
}

fn print_records<W: Write>(config: &Config, out: &mut W) -> CliResult<()> {
    let format = config.format;

    let product = checked(
        Product::schema().name,
        Product::new(1, "Samsung", 100.00),
    )?;
    write_record(out, "Product", &product, format)?;

    let person = checked(
        Person::schema().name,
        Person::new("Leon", "Dorfling", 52, Some("Programmer")),
    )?;
    write_record(out, "Person", &person, format)?;

    let animal = checked(
        Animal::schema().name,
        Animal::new("Dog", Some("Furry, Four Legs"), Some(11)),
    )?;
    write_record(out, "Animal 1", &animal, format)?;

    let mapping: Map<String, Value> = [
        ("breed", Value::from("Dog")),
        ("description", Value::from("Furry, Four Legs")),
        ("size", Value::from(12)),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();
    let animal = checked(Animal::schema().name, Animal::parse_obj(&mapping))?;
    write_record(out, "Animal 2", &animal, format)?;

    let animal = checked(Animal::schema().name, Animal::parse_raw(DEMO_ANIMAL_TEXT))?;
    write_record(out, "Animal 3", &animal, format)?;

    let animals: Vec<Animal> =
        checked(Animal::schema().name, load_records(&config.data_file))?;
    let count = animals.len().to_string();
    let data_file = config.data_file.display().to_string();
    log_event_with_fields(
        Event::DataFileLoaded,
        &[("path", data_file.as_str()), ("records", count.as_str())],
    );

    for (i, animal) in animals.iter().enumerate() {
        write_record(out, &format!("Animal 4-{}", i), animal, format)?;
    }

    Ok(())
}

/// Logs the outcome of building records of `model` and passes it through.
fn checked<T>(model: &str, result: RecordResult<T>) -> RecordResult<T> {
    match &result {
        Ok(_) => log_event_with_fields(Event::RecordBuilt, &[("model", model)]),
        Err(e) => {
            let message = e.to_string();
            log_event_with_fields(
                Event::RecordRejected,
                &[
                    ("code", e.code().code()),
                    ("message", message.as_str()),
                    ("model", model),
                ],
            );
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn cli_for(data: PathBuf) -> Cli {
        Cli {
            data: Some(data),
            log_level: Some("fatal".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_run_prints_every_record() {
        let temp_dir = TempDir::new().unwrap();
        let data = temp_dir.path().join("data.json");
        fs::write(&data, r#"[{"breed": "Cat", "size": 15}, {"breed": "Horse"}]"#).unwrap();

        let mut out = Vec::new();
        run_with(&cli_for(data), &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "Product #1 Samsung @ 100.00");
        assert_eq!(lines[1], "Person Leon Dorfling, age 52, occupation 'Programmer'");
        assert_eq!(
            lines[2],
            "Animal 1 breed='Dog' description='Furry, Four Legs' size=11"
        );
        assert!(lines[3].starts_with("Animal 2 ") && lines[3].ends_with("size=12"));
        assert!(lines[4].ends_with("size=310"));
        assert_eq!(lines[5], "Animal 4-0 breed='Cat' description=None size=15");
        assert_eq!(lines[6], "Animal 4-1 breed='Horse' description=None size=None");
    }

    #[test]
    fn test_run_fails_on_invalid_data() {
        let temp_dir = TempDir::new().unwrap();
        let data = temp_dir.path().join("data.json");
        fs::write(&data, r#"[{"breed": "Cat", "size": 5}]"#).unwrap();

        let mut out = Vec::new();
        let err = run_with(&cli_for(data), &mut out).unwrap_err();
        assert_eq!(err.code_str(), "MENAGERIE_VALIDATION_FAILED");
        assert!(err.message().contains("[0].size"));
    }

    #[test]
    fn test_run_fails_on_missing_data_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut out = Vec::new();
        let err = run_with(&cli_for(temp_dir.path().join("absent.json")), &mut out).unwrap_err();
        assert_eq!(err.code_str(), "MENAGERIE_IO_FAILED");
    }
}
