//! Domain model for persisted people records.
//!
//! # Responsibility
//! - Define the write-once identity contract shared by persisted entities.
//! - Define the `Person` record handed to repositories and use cases.
//!
//! # Invariants
//! - An entity identifier moves from unset to set exactly once.
//! - Storage backends assign identifiers; callers never pick them.

pub mod entity;
pub mod person;
