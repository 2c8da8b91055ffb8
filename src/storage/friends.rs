//! Friendship repository - symmetric edges and the best-friend cascade
//!
//! Rows are directed `(mail1, mail2)`; every read takes the union of both
//! orientations. Friend lists are joined against `entries`, so edges whose
//! other side no longer exists are not counted.

use rusqlite::params;
use crate::entry::Entry;
use crate::friendship::Friendship;
use crate::Result;
use super::entries::{row_to_entry, ENTRY_COLUMNS};
use super::sqlite::SqliteStore;

/// Mails connected to `?1` through either column
const FRIEND_MAILS: &str =
    "SELECT mail1 AS mail FROM friends WHERE mail2 = ?1 UNION SELECT mail2 AS mail FROM friends WHERE mail1 = ?1";

pub struct FriendRepository<'a> {
    store: &'a SqliteStore,
}

impl<'a> FriendRepository<'a> {
    pub fn new(store: &'a SqliteStore) -> Self {
        Self { store }
    }

    /// Insert one row `(mail_a, mail_b)`.
    ///
    /// Duplicate and self edges are accepted.
    pub fn add_edge(&self, mail_a: &str, mail_b: &str) -> Result<()> {
        self.store.conn().execute(
            "INSERT INTO friends (mail1, mail2) VALUES (?1, ?2)",
            params![mail_a, mail_b],
        )?;
        Ok(())
    }

    /// Delete the friendship in both orientations and clear any `best`
    /// on either side that named the other, in one transaction.
    ///
    /// Returns the number of edge rows removed. Removing an absent
    /// friendship removes nothing and is not an error.
    pub fn remove_edge(&self, mail_a: &str, mail_b: &str) -> Result<usize> {
        let conn = self.store.conn();
        self.store.in_transaction(|| {
            let removed = conn.execute(
                "DELETE FROM friends WHERE (mail1 = ?1 AND mail2 = ?2) OR (mail1 = ?2 AND mail2 = ?1)",
                params![mail_a, mail_b],
            )?;
            let cleared = conn.execute(
                "UPDATE entries SET best = NULL WHERE (mail = ?1 AND best = ?2) OR (mail = ?2 AND best = ?1)",
                params![mail_a, mail_b],
            )?;
            if cleared > 0 {
                tracing::debug!("Cleared {} best-friend reference(s) between {} and {}", cleared, mail_a, mail_b);
            }
            Ok(removed)
        })
    }

    /// Mails of all friends of `mail`, never `mail` itself
    pub fn friend_mails_of(&self, mail: &str) -> Result<Vec<String>> {
        let sql = format!(
            "SELECT mail FROM entries WHERE mail <> ?1 AND mail IN ({}) ORDER BY id",
            FRIEND_MAILS
        );
        let mut stmt = self.store.conn().prepare(&sql)?;
        let mails = stmt
            .query_map([mail], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(mails)
    }

    /// Entries that are friends of `mail`
    pub fn friends_of(&self, mail: &str) -> Result<Vec<Entry>> {
        let sql = format!(
            "SELECT {} FROM entries WHERE mail <> ?1 AND mail IN ({}) ORDER BY id",
            ENTRY_COLUMNS, FRIEND_MAILS
        );
        self.query_entries(&sql, mail)
    }

    /// Every other entry that is not a friend of `mail`
    pub fn non_friends_of(&self, mail: &str) -> Result<Vec<Entry>> {
        let sql = format!(
            "SELECT {} FROM entries WHERE mail <> ?1 AND mail NOT IN ({}) ORDER BY id",
            ENTRY_COLUMNS, FRIEND_MAILS
        );
        self.query_entries(&sql, mail)
    }

    /// Number of distinct friends of `mail`
    pub fn count_friends_of(&self, mail: &str) -> Result<usize> {
        let sql = format!(
            "SELECT COUNT(*) FROM entries WHERE mail <> ?1 AND mail IN ({})",
            FRIEND_MAILS
        );
        let count: i64 = self.store.conn().query_row(&sql, [mail], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Whether a friendship row exists in either orientation
    pub fn are_friends(&self, mail_a: &str, mail_b: &str) -> Result<bool> {
        let exists: bool = self.store.conn().query_row(
            "SELECT EXISTS(SELECT 1 FROM friends WHERE (mail1 = ?1 AND mail2 = ?2) OR (mail1 = ?2 AND mail2 = ?1))",
            params![mail_a, mail_b],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    /// Every stored row, duplicates and self edges included
    pub fn all(&self) -> Result<Vec<Friendship>> {
        let mut stmt = self
            .store
            .conn()
            .prepare("SELECT mail1, mail2 FROM friends ORDER BY rowid")?;
        let edges = stmt
            .query_map([], |row| Ok(Friendship::new(row.get::<_, String>(0)?, row.get::<_, String>(1)?)))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(edges)
    }

    /// Count stored rows
    pub fn count_rows(&self) -> Result<usize> {
        let count: i64 = self
            .store
            .conn()
            .query_row("SELECT COUNT(*) FROM friends", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn query_entries(&self, sql: &str, mail: &str) -> Result<Vec<Entry>> {
        let mut stmt = self.store.conn().prepare(sql)?;
        let entries = stmt
            .query_map([mail], row_to_entry)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(entries)
    }
}
