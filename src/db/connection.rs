use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};

use crate::errors::ServerError;

const SCHEMA_SQL: &str = include_str!("../../sql/schema.sql");

/// Handle to the listing store. Cheap to clone (path only); every call
/// opens its own connection, which closes when dropped.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens a fresh connection to an existing store. The caller owns it for as
    /// long as it needs it (one request, one crawl run). Never creates the file;
    /// only `init_db` does.
    pub fn connect(&self) -> Result<Connection, ServerError> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        Connection::open_with_flags(&self.path, flags).map_err(|e| {
            ServerError::DbError(format!("Open DB {} failed: {e}", self.path.display()))
        })
    }

    /// Opens a connection, runs `f(conn)` and drops it.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut Connection) -> Result<T, ServerError>,
    {
        let mut conn = self.connect()?;
        f(&mut conn)
    }
}

/// Creates the `ads` table and its index if they don't exist yet.
/// This is the one place that may create the database file.
pub fn init_db(db: &Database) -> Result<(), ServerError> {
    let conn = Connection::open(db.path()).map_err(|e| {
        ServerError::DbError(format!("Open DB {} failed: {e}", db.path().display()))
    })?;
    conn.execute_batch(SCHEMA_SQL)
        .map_err(|e| ServerError::DbError(format!("Failed to apply schema: {e}")))?;

    tracing::info!(path = %db.path().display(), "Listing table initialized");
    Ok(())
}
