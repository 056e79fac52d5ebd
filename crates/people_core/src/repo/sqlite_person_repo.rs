//! SQLite-backed person repository.
//!
//! # Responsibility
//! - Persist people into the single `people` table.
//! - Rebuild `Person` values from stored rows.
//!
//! # Invariants
//! - `add_person` is insert (autocommit) followed by `last_insert_rowid()`.
//!   The pair is not guarded, so a connection shared between concurrent
//!   writers can observe another writer's rowid.
//! - `date_of_birth` is stored as `YYYY-MM-DD` text.

use crate::model::entity::{Entity, PersonId};
use crate::model::person::Person;
use crate::repo::person_repo::{ensure_id_not_set, PersonRepository, RepoError, RepoResult};
use chrono::NaiveDate;
use log::{debug, info};
use rusqlite::{params, Connection, OptionalExtension};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Person repository over a caller-owned SQLite connection.
pub struct SqlitePersonRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePersonRepository<'conn> {
    /// Wraps a connection after checking the `people` table is present.
    ///
    /// # Errors
    /// - `RepoError::MissingRequiredTable("people")` for an unmigrated
    ///   connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = 'people'
            );",
            [],
            |row| row.get(0),
        )?;
        if exists == 0 {
            return Err(RepoError::MissingRequiredTable("people"));
        }

        Ok(Self { conn })
    }

    fn last_inserted_id(&self) -> RepoResult<PersonId> {
        let id = self
            .conn
            .query_row("SELECT last_insert_rowid();", [], |row| row.get(0))?;
        Ok(id)
    }
}

impl PersonRepository for SqlitePersonRepository<'_> {
    fn add_person(&self, person: &mut Person) -> RepoResult<()> {
        ensure_id_not_set(person)?;

        self.conn.execute(
            "INSERT INTO people (name, date_of_birth) VALUES (?1, ?2);",
            params![
                person.name.as_str(),
                person.date_of_birth.format(DATE_FORMAT).to_string()
            ],
        )?;

        let id = self.last_inserted_id()?;
        person.set_id(id)?;
        info!("event=person_add module=repo backend=sqlite status=ok id={id}");
        Ok(())
    }

    fn find_person_by_id(&self, id: PersonId) -> RepoResult<Option<Person>> {
        let row = self
            .conn
            .query_row(
                "SELECT name, date_of_birth FROM people WHERE id = ?1;",
                [id],
                |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)),
            )
            .optional()?;

        let Some((name, date_text)) = row else {
            debug!("event=person_find module=repo backend=sqlite status=miss id={id}");
            return Ok(None);
        };

        let date_of_birth = parse_date(&date_text)?;
        Ok(Some(Person::restore(name, date_of_birth, id)))
    }
}

fn parse_date(value: &str) -> RepoResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid date value `{value}` in people.date_of_birth"
        ))
    })
}
