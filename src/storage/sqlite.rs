//! SQLite storage implementation

use std::path::Path;
use rusqlite::Connection;
use crate::Result;
use super::schema;

/// SQLite-backed store holding entries and friendships.
///
/// Owns one connection. Repositories borrow the store and issue their
/// statements through [`SqliteStore::conn`].
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        tracing::debug!("Opened store at {}", path.display());
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        self.conn.pragma_update(None, "foreign_keys", true)?;
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// The underlying connection
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Run `f` between BEGIN and COMMIT.
    ///
    /// Every statement issued on this store while `f` runs is part of the
    /// transaction. An error from `f` rolls everything back. Calls must not
    /// be nested.
    pub fn in_transaction<T>(&self, f: impl FnOnce() -> Result<T>) -> Result<T> {
        let tx = self.conn.unchecked_transaction()?;
        let value = f()?;
        tx.commit()?;
        Ok(value)
    }
}

/// Whether `err` is a UNIQUE constraint failure
pub(crate) fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn table_count(store: &SqliteStore, table: &str) -> i64 {
        store
            .conn()
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn test_schema_creation() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(table_count(&store, "entries"), 0);
        assert_eq!(table_count(&store, "friends"), 0);

        let fk: bool = store
            .conn()
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert!(fk);
    }

    #[test]
    fn test_transaction_rolls_back_on_error() {
        let store = SqliteStore::open_in_memory().unwrap();

        let result: Result<()> = store.in_transaction(|| {
            store
                .conn()
                .execute("INSERT INTO friends (mail1, mail2) VALUES ('a@x', 'b@x')", [])?;
            Err(Error::NotFound("b@x".into()))
        });
        assert!(result.is_err());
        assert_eq!(table_count(&store, "friends"), 0);

        store
            .in_transaction(|| {
                store
                    .conn()
                    .execute("INSERT INTO friends (mail1, mail2) VALUES ('a@x', 'b@x')", [])?;
                Ok(())
            })
            .unwrap();
        assert_eq!(table_count(&store, "friends"), 1);
    }

    #[test]
    fn test_unique_violation_detection() {
        let store = SqliteStore::open_in_memory().unwrap();
        let insert = "INSERT INTO entries (name, age, mail, text) VALUES ('A', 1, 'a@x', '')";
        store.conn().execute(insert, []).unwrap();
        let err = store.conn().execute(insert, []).unwrap_err();
        assert!(is_unique_violation(&err));

        let fk_err = store
            .conn()
            .execute("UPDATE entries SET best = 'nobody@x' WHERE mail = 'a@x'", [])
            .unwrap_err();
        assert!(!is_unique_violation(&fk_err));
    }
}
