//! Entry types - member profiles
//!
//! An entry is keyed twice:
//! - `id`: stable row identity, assigned by the store and never reused
//! - `mail`: unique natural key, used by every relationship lookup

use serde::{Deserialize, Serialize};
use std::fmt;

/// Row identity of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub i64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A member profile as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub name: String,
    pub age: i64,
    /// Unique natural key
    pub mail: String,
    pub text: String,
    /// Friend count as of the last recomputation pass
    pub friend: i64,
    /// Mail of the designated best friend, if any
    pub best: Option<String>,
}

impl Entry {
    /// Whether `mail` is this entry's designated best friend
    pub fn is_best(&self, mail: &str) -> bool {
        self.best.as_deref() == Some(mail)
    }
}

/// The user-writable fields of an entry, as received by add and edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFields {
    pub name: String,
    pub age: i64,
    pub mail: String,
    pub text: String,
}

impl EntryFields {
    pub fn new(
        name: impl Into<String>,
        age: i64,
        mail: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            mail: mail.into(),
            text: text.into(),
        }
    }
}
