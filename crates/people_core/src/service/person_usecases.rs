//! Add / find use cases for people.
//!
//! # Invariants
//! - Each `execute` performs exactly one repository call.
//! - Repository errors are returned unchanged.

use crate::model::entity::PersonId;
use crate::model::person::Person;
use crate::repo::person_repo::{PersonRepository, RepoResult};

/// Stores a new person through the injected repository.
pub struct AddPersonUseCase<R: PersonRepository> {
    repo: R,
}

impl<R: PersonRepository> AddPersonUseCase<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// On success `person` carries the id assigned by the repository.
    pub fn execute(&self, person: &mut Person) -> RepoResult<()> {
        self.repo.add_person(person)
    }
}

/// Looks a person up by id through the injected repository.
pub struct FindPersonByIdUseCase<R: PersonRepository> {
    repo: R,
}

impl<R: PersonRepository> FindPersonByIdUseCase<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn execute(&self, person_id: PersonId) -> RepoResult<Option<Person>> {
        self.repo.find_person_by_id(person_id)
    }
}
