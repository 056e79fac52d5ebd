//! Use cases over the person repository contract.
//!
//! # Responsibility
//! - Give callers one entry point per operation.
//! - Keep callers independent of the concrete storage backend.

pub mod person_usecases;
