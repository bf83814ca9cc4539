//! Forward-only schema migrations.
//!
//! The `db_version` table holds a single row with the last applied
//! migration version. Migrations are append-only: a schema change gets a
//! new version number, existing steps are never edited.

use rusqlite::{Connection, OptionalExtension};

use super::schema;

/// Migrations in ascending version order.
const MIGRATIONS: &[(i64, &str)] = &[(1, schema::CREATE_RECIPES_TABLE)];

/// Applies every migration newer than the recorded version.
///
/// Each step commits its DDL together with the version bump in one
/// transaction, so a failed step leaves the previously recorded version in
/// place. Idempotent: a database already at the latest version is untouched.
pub fn run_migrations(conn: &mut Connection) -> rusqlite::Result<()> {
    let current = ensure_version_marker(conn)?;

    for &(version, sql) in MIGRATIONS {
        if version <= current {
            continue;
        }
        let tx = conn.transaction()?;
        tx.execute_batch(sql)?;
        tx.execute(schema::UPDATE_DB_VERSION, [version])?;
        tx.commit()?;
        tracing::info!(version, "applied schema migration");
    }

    Ok(())
}

/// Creates the version marker if missing and returns the recorded version.
///
/// A fresh database records version 0, so every migration applies.
fn ensure_version_marker(conn: &Connection) -> rusqlite::Result<i64> {
    conn.execute(schema::CREATE_DB_VERSION_TABLE, [])?;

    let version: Option<i64> = conn
        .query_row(schema::SELECT_DB_VERSION, [], |row| row.get(0))
        .optional()?;

    match version {
        Some(v) => Ok(v),
        None => {
            conn.execute(schema::INIT_DB_VERSION, [])?;
            Ok(0)
        }
    }
}
