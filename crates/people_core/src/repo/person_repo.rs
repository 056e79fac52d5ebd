//! Person repository contract and shared error taxonomy.

use crate::db::DbError;
use crate::model::entity::{Entity, InvalidStateError, PersonId};
use crate::model::person::Person;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error surfaced by any person repository backend.
#[derive(Debug)]
pub enum RepoError {
    InvalidState(InvalidStateError),
    /// Backing file for a JSON store does not exist.
    NotFound(PathBuf),
    Db(DbError),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Serialize(serde_json::Error),
    InvalidData(String),
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidState(err) => write!(f, "{err}"),
            Self::NotFound(path) => write!(f, "{} not found", path.display()),
            Self::Db(err) => write!(f, "{err}"),
            Self::Io { path, source } => write!(f, "i/o error on `{}`: {source}", path.display()),
            Self::Serialize(err) => write!(f, "failed to encode people document: {err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted person data: {message}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing; call create_tables_if_not_exist first")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidState(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Io { source, .. } => Some(source),
            Self::Serialize(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) | Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<InvalidStateError> for RepoError {
    fn from(value: InvalidStateError) -> Self {
        Self::InvalidState(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Storage contract shared by every person backend.
pub trait PersonRepository {
    /// Persists a new person and assigns its storage id onto `person`.
    ///
    /// # Errors
    /// - `RepoError::InvalidState` when `person` already carries an id.
    fn add_person(&self, person: &mut Person) -> RepoResult<()>;

    /// Loads a person by id. Returns `Ok(None)` when no record matches.
    fn find_person_by_id(&self, id: PersonId) -> RepoResult<Option<Person>>;
}

impl<R: PersonRepository + ?Sized> PersonRepository for &R {
    fn add_person(&self, person: &mut Person) -> RepoResult<()> {
        (**self).add_person(person)
    }

    fn find_person_by_id(&self, id: PersonId) -> RepoResult<Option<Person>> {
        (**self).find_person_by_id(id)
    }
}

impl<R: PersonRepository + ?Sized> PersonRepository for Box<R> {
    fn add_person(&self, person: &mut Person) -> RepoResult<()> {
        (**self).add_person(person)
    }

    fn find_person_by_id(&self, id: PersonId) -> RepoResult<Option<Person>> {
        (**self).find_person_by_id(id)
    }
}

/// Rejects a person that already went through persistence.
pub(crate) fn ensure_id_not_set(person: &Person) -> RepoResult<()> {
    match person.id() {
        Some(id) => Err(InvalidStateError::IdSetOnAdd { id }.into()),
        None => Ok(()),
    }
}
