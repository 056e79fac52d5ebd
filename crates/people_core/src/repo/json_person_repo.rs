//! Flat JSON-file person repository.
//!
//! # Responsibility
//! - Keep every person in one JSON document alongside an id counter.
//! - Rewrite the whole document on each insert.
//!
//! # Invariants
//! - The backing file must exist when the repository is constructed.
//! - Empty or unparsable content reads as an empty store
//!   (`last_person_id = 0`, `people = []`).
//! - No locking and no temp-file rename: concurrent writers lose updates
//!   and a crash mid-write can truncate the document.

use crate::model::entity::{Entity, PersonId};
use crate::model::person::Person;
use crate::repo::person_repo::{ensure_id_not_set, PersonRepository, RepoError, RepoResult};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk shape of the JSON store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeopleDocument {
    pub last_person_id: PersonId,
    pub people: Vec<Person>,
}

/// Person repository backed by a single JSON file.
#[derive(Debug)]
pub struct JsonPersonRepository {
    json_file: PathBuf,
}

impl JsonPersonRepository {
    /// Binds the repository to an existing file.
    ///
    /// # Errors
    /// - `RepoError::NotFound(path)` when `json_file` does not exist.
    pub fn new(json_file: impl Into<PathBuf>) -> RepoResult<Self> {
        let json_file = json_file.into();
        if !json_file.exists() {
            return Err(RepoError::NotFound(json_file));
        }

        Ok(Self { json_file })
    }

    pub fn path(&self) -> &Path {
        &self.json_file
    }

    /// Reads the current document, treating empty or corrupt content as empty.
    pub fn load_document(&self) -> RepoResult<PeopleDocument> {
        let raw = fs::read_to_string(&self.json_file).map_err(|source| RepoError::Io {
            path: self.json_file.clone(),
            source,
        })?;
        Ok(parse_document(&raw, &self.json_file))
    }

    /// Appends `person` under the next counter value and hands the new
    /// document to `store`. `person` receives its id only once `store`
    /// succeeds.
    fn add_with(
        &self,
        person: &mut Person,
        store: impl FnOnce(&PeopleDocument) -> RepoResult<()>,
    ) -> RepoResult<()> {
        ensure_id_not_set(person)?;

        let mut document = self.load_document()?;
        let next_id = next_person_id(document.last_person_id)?;

        let mut stored = person.clone();
        stored.set_id(next_id)?;
        document.last_person_id = next_id;
        document.people.push(stored);

        store(&document)?;
        person.set_id(next_id)?;
        info!(
            "event=person_add module=repo backend=json status=ok id={next_id} people={}",
            document.people.len()
        );
        Ok(())
    }

    fn store_document(&self, document: &PeopleDocument) -> RepoResult<()> {
        let encoded = serde_json::to_vec(document)?;
        fs::write(&self.json_file, encoded).map_err(|source| RepoError::Io {
            path: self.json_file.clone(),
            source,
        })
    }
}

impl PersonRepository for JsonPersonRepository {
    fn add_person(&self, person: &mut Person) -> RepoResult<()> {
        self.add_with(person, |document| self.store_document(document))
    }

    fn find_person_by_id(&self, id: PersonId) -> RepoResult<Option<Person>> {
        let document = self.load_document()?;
        let found = document
            .people
            .into_iter()
            .find(|person| person.id() == Some(id));

        if found.is_none() {
            debug!("event=person_find module=repo backend=json status=miss id={id}");
        }
        Ok(found)
    }
}

fn next_person_id(last_person_id: PersonId) -> RepoResult<PersonId> {
    last_person_id.checked_add(1).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "last_person_id overflow: {last_person_id} has no successor"
        ))
    })
}

fn parse_document(raw: &str, path: &Path) -> PeopleDocument {
    if raw.trim().is_empty() {
        return PeopleDocument::default();
    }

    match serde_json::from_str(raw) {
        Ok(document) => document,
        Err(err) => {
            warn!(
                "event=json_store_load module=repo status=fallback path={} error={}",
                path.display(),
                err
            );
            PeopleDocument::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_document, JsonPersonRepository, PeopleDocument};
    use crate::model::entity::Entity;
    use crate::model::person::Person;
    use crate::repo::person_repo::RepoError;
    use chrono::NaiveDate;
    use std::fs;
    use std::io;
    use std::path::Path;

    #[test]
    fn failed_store_leaves_person_and_file_unchanged() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let repo = JsonPersonRepository::new(file.path()).unwrap();
        let mut person = Person::new("Alice", NaiveDate::from_ymd_opt(1990, 1, 1).unwrap());

        let err = repo
            .add_with(&mut person, |_| {
                Err(RepoError::Io {
                    path: file.path().to_path_buf(),
                    source: io::Error::new(io::ErrorKind::Other, "no space left"),
                })
            })
            .unwrap_err();

        assert!(matches!(err, RepoError::Io { .. }));
        assert_eq!(person.id(), None);
        assert!(fs::read_to_string(file.path()).unwrap().is_empty());

        repo.add_with(&mut person, |document| repo.store_document(document))
            .unwrap();
        assert_eq!(person.id(), Some(1));
    }

    #[test]
    fn blank_content_reads_as_empty_store() {
        assert_eq!(parse_document("", Path::new("p.json")), PeopleDocument::default());
        assert_eq!(parse_document(" \n", Path::new("p.json")), PeopleDocument::default());
    }

    #[test]
    fn corrupt_content_reads_as_empty_store() {
        let document = parse_document("{\"last_person_id\": ", Path::new("p.json"));
        assert_eq!(document.last_person_id, 0);
        assert!(document.people.is_empty());
    }

    #[test]
    fn well_formed_content_is_parsed() {
        let raw = r#"{"last_person_id": 4, "people": [
            {"name": "Ada", "date_of_birth": "1815-12-10", "id": 4}
        ]}"#;
        let document = parse_document(raw, Path::new("p.json"));
        assert_eq!(document.last_person_id, 4);
        assert_eq!(document.people.len(), 1);
        assert_eq!(document.people[0].name, "Ada");
    }
}
