//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Configure connection pragmas and create the schema before handing out
//!   a connection.
//!
//! # Invariants
//! - Returned connections have the `people` table and id index.
//! - A connection is owned by its caller; nothing here keeps a global handle.

use super::schema::create_tables_if_not_exist;
use super::{DbError, DbResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);
const MEMORY_TARGET: &str = ":memory:";

/// Opens (or creates) a SQLite database file and ensures the schema.
///
/// # Side effects
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let path = path.as_ref();
    open_with(&path.display().to_string(), || Connection::open(path))
}

/// Opens an in-memory SQLite database and ensures the schema.
pub fn open_db_in_memory() -> DbResult<Connection> {
    open_with(MEMORY_TARGET, Connection::open_in_memory)
}

fn open_with(
    target: &str,
    connect: impl FnOnce() -> rusqlite::Result<Connection>,
) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start target={target}");

    let conn = connect().map_err(|source| {
        error!(
            "event=db_open module=db status=error target={} duration_ms={} error_code=db_open_failed error={}",
            target,
            started_at.elapsed().as_millis(),
            source
        );
        DbError::Open {
            target: target.to_string(),
            source,
        }
    })?;

    if let Err(err) = bootstrap_connection(&conn) {
        error!(
            "event=db_open module=db status=error target={} duration_ms={} error_code=db_bootstrap_failed error={}",
            target,
            started_at.elapsed().as_millis(),
            err
        );
        return Err(err);
    }

    info!(
        "event=db_open module=db status=ok target={} duration_ms={}",
        target,
        started_at.elapsed().as_millis()
    );
    Ok(conn)
}

fn bootstrap_connection(conn: &Connection) -> DbResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    create_tables_if_not_exist(conn)
}
