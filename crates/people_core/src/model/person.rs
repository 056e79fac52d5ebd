//! Person domain model.
//!
//! # Responsibility
//! - Define the person record persisted by every repository backend.
//! - Provide the reconstruction factory used by storage read paths.
//!
//! # Invariants
//! - `Person::new` always starts with an unset identifier.
//! - Equality covers name, date of birth and identifier.
//! - Wire form is `{ name, date_of_birth: "YYYY-MM-DD", id: int | null }`.

use crate::model::entity::{Entity, EntityId, InvalidStateError, PersonId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named person with a calendar date of birth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub date_of_birth: NaiveDate,
    id: EntityId,
}

impl Person {
    /// Creates a person that has not been persisted yet.
    pub fn new(name: impl Into<String>, date_of_birth: NaiveDate) -> Self {
        Self {
            name: name.into(),
            date_of_birth,
            id: EntityId::Unset,
        }
    }

    /// Rebuilds a person loaded from storage with its stored identifier.
    ///
    /// Bypasses `set_id` because the identity already exists in the backend.
    pub(crate) fn restore(name: String, date_of_birth: NaiveDate, id: PersonId) -> Self {
        Self {
            name,
            date_of_birth,
            id: EntityId::Set(id),
        }
    }

    /// Returns the wire form used by the JSON store.
    pub fn as_json(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "date_of_birth": self.date_of_birth.format("%Y-%m-%d").to_string(),
            "id": self.id.get(),
        })
    }

    /// Parses the wire form produced by `as_json`.
    pub fn from_json(value: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }
}

impl Entity for Person {
    fn id(&self) -> Option<PersonId> {
        self.id.get()
    }

    fn set_id(&mut self, id: PersonId) -> Result<(), InvalidStateError> {
        self.id.assign(id)
    }
}
