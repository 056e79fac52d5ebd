//! `people` schema bootstrap.
//!
//! # Invariants
//! - Every statement is `IF NOT EXISTS`; running it again is a no-op.
//! - Existing rows are never touched.

use crate::db::DbResult;
use rusqlite::Connection;

const PEOPLE_SCHEMA_SQL: &str = include_str!("people.sql");

/// Creates the `people` table and `people_id_uindex` when they are missing.
pub fn create_tables_if_not_exist(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(PEOPLE_SCHEMA_SQL)?;
    Ok(())
}
