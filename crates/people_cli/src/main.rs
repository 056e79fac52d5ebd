//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `people_core` linkage with a deterministic in-memory round trip.
//! - Start core file logging so repository events land on disk.
//!
//! Logs go to `$PEOPLE_LOG_DIR` (absolute) or `<tmp>/people_cli-logs`.

use chrono::NaiveDate;
use people_core::{
    default_log_level, init_logging, open_db_in_memory, AddPersonUseCase, Entity,
    FindPersonByIdUseCase, Person, SqlitePersonRepository,
};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "PEOPLE_LOG_DIR";

fn main() -> ExitCode {
    let log_dir = log_dir();
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        eprintln!("people_core logging=error error={err}");
        return ExitCode::FAILURE;
    }

    println!("people_core ping={}", people_core::ping());
    println!("people_core version={}", people_core::core_version());
    println!("people_core log_dir={}", log_dir.display());

    match round_trip() {
        Ok(id) => {
            println!("people_core round_trip=ok id={id}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("people_core round_trip=error error={err}");
            ExitCode::FAILURE
        }
    }
}

fn log_dir() -> PathBuf {
    std::env::var_os(LOG_DIR_ENV)
        .map(PathBuf::from)
        .filter(|dir| dir.is_absolute())
        .unwrap_or_else(|| std::env::temp_dir().join("people_cli-logs"))
}

fn round_trip() -> Result<i64, Box<dyn Error>> {
    let conn = open_db_in_memory()?;
    let repo = SqlitePersonRepository::try_new(&conn)?;

    let date_of_birth = NaiveDate::from_ymd_opt(1990, 1, 1).ok_or("invalid probe date")?;
    let mut person = Person::new("Probe", date_of_birth);
    AddPersonUseCase::new(&repo).execute(&mut person)?;

    let id = person.id().ok_or("repository did not assign an id")?;
    match FindPersonByIdUseCase::new(&repo).execute(id)? {
        Some(found) if found == person => Ok(id),
        _ => Err("stored person did not round trip".into()),
    }
}
