//! Repository layer: person storage contract and its backends.
//!
//! # Responsibility
//! - Define the `add_person` / `find_person_by_id` contract consumed by use
//!   cases.
//! - Provide a SQLite backend and a flat JSON-file backend.
//!
//! # Invariants
//! - `add_person` rejects a person whose id is already set, before any I/O.
//! - A successful `add_person` assigns the storage id onto the same value.
//! - A missing record is `Ok(None)`, never an error.

pub mod json_person_repo;
pub mod person_repo;
pub mod sqlite_person_repo;
