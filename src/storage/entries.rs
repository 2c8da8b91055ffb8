//! Entry repository - CRUD over profile rows

use rusqlite::{params, OptionalExtension};
use crate::entry::{Entry, EntryFields, EntryId};
use crate::sort::SortKey;
use crate::{Error, Result};
use super::sqlite::{is_unique_violation, SqliteStore};

/// Column list matching [`row_to_entry`]
pub(crate) const ENTRY_COLUMNS: &str = "id, name, age, mail, text, friend, best";

/// Helper to convert a row selected with [`ENTRY_COLUMNS`] to an Entry
pub(crate) fn row_to_entry(row: &rusqlite::Row) -> rusqlite::Result<Entry> {
    Ok(Entry {
        id: EntryId(row.get(0)?),
        name: row.get(1)?,
        age: row.get(2)?,
        mail: row.get(3)?,
        text: row.get(4)?,
        friend: row.get(5)?,
        best: row.get(6)?,
    })
}

pub struct EntryRepository<'a> {
    store: &'a SqliteStore,
}

impl<'a> EntryRepository<'a> {
    pub fn new(store: &'a SqliteStore) -> Self {
        Self { store }
    }

    /// Insert a new entry with `friend = 0` and no best friend
    pub fn create(&self, fields: &EntryFields) -> Result<EntryId> {
        let conn = self.store.conn();
        conn.execute(
            "INSERT INTO entries (name, age, mail, text) VALUES (?1, ?2, ?3, ?4)",
            params![fields.name, fields.age, fields.mail, fields.text],
        )
        .map_err(|e| unique_to_constraint(e, &fields.mail))?;
        Ok(EntryId(conn.last_insert_rowid()))
    }

    /// Rewrite every mutable field of the entry currently keyed by `old_mail`
    pub fn update(&self, old_mail: &str, fields: &EntryFields) -> Result<()> {
        let changed = self
            .store
            .conn()
            .execute(
                "UPDATE entries SET name = ?1, age = ?2, mail = ?3, text = ?4 WHERE mail = ?5",
                params![fields.name, fields.age, fields.mail, fields.text, old_mail],
            )
            .map_err(|e| unique_to_constraint(e, &fields.mail))?;
        if changed == 0 {
            return Err(Error::NotFound(old_mail.to_string()));
        }
        Ok(())
    }

    /// Remove the entry. Friendship rows naming `mail` are left in place.
    pub fn delete(&self, mail: &str) -> Result<()> {
        let changed = self
            .store
            .conn()
            .execute("DELETE FROM entries WHERE mail = ?1", [mail])?;
        if changed == 0 {
            return Err(Error::NotFound(mail.to_string()));
        }
        Ok(())
    }

    /// Get an entry by mail
    pub fn get_by_mail(&self, mail: &str) -> Result<Option<Entry>> {
        self.store
            .conn()
            .query_row(
                &format!("SELECT {} FROM entries WHERE mail = ?1", ENTRY_COLUMNS),
                [mail],
                row_to_entry,
            )
            .optional()
            .map_err(Into::into)
    }

    /// All entries in the order given by `key`
    pub fn list_all(&self, key: &SortKey) -> Result<Vec<Entry>> {
        let sql = format!("SELECT {} FROM entries ORDER BY {}", ENTRY_COLUMNS, key.order_by());
        let mut stmt = self.store.conn().prepare(&sql)?;
        let entries = stmt
            .query_map([], row_to_entry)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(entries)
    }

    /// Mails of all entries, oldest first
    pub fn all_mails(&self) -> Result<Vec<String>> {
        let mut stmt = self.store.conn().prepare("SELECT mail FROM entries ORDER BY id")?;
        let mails = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(mails)
    }

    /// Persist a recomputed friend count
    pub fn set_friend_count(&self, mail: &str, count: usize) -> Result<()> {
        self.store.conn().execute(
            "UPDATE entries SET friend = ?1 WHERE mail = ?2",
            params![count as i64, mail],
        )?;
        Ok(())
    }

    /// Set or clear the best-friend designation.
    ///
    /// Friendship is not checked here; the engine only insists that a
    /// non-null `best` names an existing entry.
    pub fn set_best(&self, mail: &str, best: Option<&str>) -> Result<()> {
        let changed = self.store.conn().execute(
            "UPDATE entries SET best = ?1 WHERE mail = ?2",
            params![best, mail],
        )?;
        if changed == 0 {
            return Err(Error::NotFound(mail.to_string()));
        }
        Ok(())
    }

    /// Count all entries
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .store
            .conn()
            .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn unique_to_constraint(err: rusqlite::Error, mail: &str) -> Error {
    if is_unique_violation(&err) {
        Error::ConstraintViolation(mail.to_string())
    } else {
        err.into()
    }
}
