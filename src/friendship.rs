//! Friendship edges - symmetric relation between two entries' mails
//!
//! An edge is stored as one directed row `(mail1, mail2)` but every query
//! treats `(a, b)` and `(b, a)` as the same friendship.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A friendship row as stored in the `friends` table.
///
/// Equality and hashing ignore orientation, so a `HashSet<Friendship>`
/// collapses `(a, b)` and `(b, a)` into one friendship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Friendship {
    pub mail1: String,
    pub mail2: String,
}

impl Friendship {
    pub fn new(mail1: impl Into<String>, mail2: impl Into<String>) -> Self {
        Self {
            mail1: mail1.into(),
            mail2: mail2.into(),
        }
    }

    /// Self-edges are accepted by the store but never count as a friend
    pub fn is_self(&self) -> bool {
        self.mail1 == self.mail2
    }

    fn ordered(&self) -> (&str, &str) {
        if self.mail1 <= self.mail2 {
            (&self.mail1, &self.mail2)
        } else {
            (&self.mail2, &self.mail1)
        }
    }
}

impl PartialEq for Friendship {
    fn eq(&self, other: &Self) -> bool {
        self.ordered() == other.ordered()
    }
}

impl Eq for Friendship {}

impl Hash for Friendship {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordered().hash(state);
    }
}

impl std::fmt::Display for Friendship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <-> {}", self.mail1, self.mail2)
    }
}
