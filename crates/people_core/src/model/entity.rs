//! Write-once entity identity.
//!
//! # Responsibility
//! - Model the identifier lifecycle (`Unset` -> `Set`) as an explicit state.
//! - Reject every second assignment with `InvalidStateError`.
//!
//! # Invariants
//! - A set identifier is never cleared or replaced.
//! - The serialized form is integer-or-null.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage-assigned identifier. Matches the SQLite rowid width.
pub type PersonId = i64;

/// Caller-programming errors around identifier state. Never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidStateError {
    /// A second assignment was attempted on an already-set identifier.
    IdAlreadySet { current: PersonId },
    /// A record carrying an identifier was handed to `add`.
    IdSetOnAdd { id: PersonId },
}

impl Display for InvalidStateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdAlreadySet { current } => {
                write!(f, "id cannot be changed once set (current id {current})")
            }
            Self::IdSetOnAdd { id } => {
                write!(f, "id should not be set when adding a person (got id {id})")
            }
        }
    }
}

impl Error for InvalidStateError {}

/// Two-state identifier slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<PersonId>", into = "Option<PersonId>")]
pub enum EntityId {
    #[default]
    Unset,
    Set(PersonId),
}

impl EntityId {
    /// Returns the concrete value, or `None` while unset.
    pub fn get(self) -> Option<PersonId> {
        match self {
            Self::Unset => None,
            Self::Set(id) => Some(id),
        }
    }

    pub fn is_set(self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// Moves the slot from `Unset` to `Set(value)`.
    ///
    /// # Errors
    /// - `InvalidStateError::IdAlreadySet` when a value is already present.
    pub fn assign(&mut self, value: PersonId) -> Result<(), InvalidStateError> {
        match *self {
            Self::Set(current) => Err(InvalidStateError::IdAlreadySet { current }),
            Self::Unset => {
                *self = Self::Set(value);
                Ok(())
            }
        }
    }
}

impl From<Option<PersonId>> for EntityId {
    fn from(value: Option<PersonId>) -> Self {
        value.map_or(Self::Unset, Self::Set)
    }
}

impl From<EntityId> for Option<PersonId> {
    fn from(value: EntityId) -> Self {
        value.get()
    }
}

/// Identity capability shared by every persisted domain object.
pub trait Entity {
    /// Current identifier, `None` until a repository assigns one.
    fn id(&self) -> Option<PersonId>;

    /// Sets the identifier once.
    ///
    /// # Errors
    /// - `InvalidStateError::IdAlreadySet` on any second call.
    fn set_id(&mut self, id: PersonId) -> Result<(), InvalidStateError>;
}

#[cfg(test)]
mod tests {
    use super::{EntityId, InvalidStateError};

    #[test]
    fn default_slot_is_unset() {
        assert_eq!(EntityId::default(), EntityId::Unset);
        assert_eq!(EntityId::default().get(), None);
    }

    #[test]
    fn assign_twice_keeps_first_value() {
        let mut slot = EntityId::Unset;
        slot.assign(7).unwrap();

        let err = slot.assign(8).unwrap_err();
        assert_eq!(err, InvalidStateError::IdAlreadySet { current: 7 });
        assert_eq!(slot.get(), Some(7));
    }

    #[test]
    fn serializes_as_integer_or_null() {
        assert_eq!(serde_json::to_value(EntityId::Unset).unwrap(), serde_json::Value::Null);
        assert_eq!(serde_json::to_value(EntityId::Set(3)).unwrap(), serde_json::json!(3));
        let decoded: EntityId = serde_json::from_str("null").unwrap();
        assert_eq!(decoded, EntityId::Unset);
    }
}
