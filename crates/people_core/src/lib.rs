//! Core domain logic for the people store.
//! Entities, repository backends and use cases live here.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{create_tables_if_not_exist, open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entity::{Entity, EntityId, InvalidStateError, PersonId};
pub use model::person::Person;
pub use repo::json_person_repo::{JsonPersonRepository, PeopleDocument};
pub use repo::person_repo::{PersonRepository, RepoError, RepoResult};
pub use repo::sqlite_person_repo::SqlitePersonRepository;
pub use service::person_usecases::{AddPersonUseCase, FindPersonByIdUseCase};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
