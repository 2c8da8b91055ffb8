//! Listing sort keys
//!
//! The accepted keys and their directions are fixed:
//!
//! | key      | column   | direction |
//! |----------|----------|-----------|
//! | `id`     | `id`     | DESC      |
//! | `age`    | `age`    | ASC       |
//! | `name`   | `name`   | ASC       |
//! | `best`   | `friend` | DESC      |
//! | `friend` | `friend` | DESC      |
//!
//! Anything else parses to [`SortKey::Unknown`], which lists like `id`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// Sort key for the entry listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Id,
    Age,
    Name,
    Best,
    Friend,
    /// Unrecognized input, kept verbatim for the warning
    Unknown(String),
}

impl SortKey {
    /// Parse a key. Matching is exact (case-sensitive) and never fails.
    pub fn parse(key: &str) -> Self {
        match key {
            "id" => SortKey::Id,
            "age" => SortKey::Age,
            "name" => SortKey::Name,
            "best" => SortKey::Best,
            "friend" => SortKey::Friend,
            other => SortKey::Unknown(other.to_string()),
        }
    }

    /// Get the string representation of the key
    pub fn as_str(&self) -> &str {
        match self {
            SortKey::Id => "id",
            SortKey::Age => "age",
            SortKey::Name => "name",
            SortKey::Best => "best",
            SortKey::Friend => "friend",
            SortKey::Unknown(raw) => raw,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, SortKey::Unknown(_))
    }

    /// Column and direction the key orders by
    pub fn column(&self) -> (&'static str, Direction) {
        match self {
            SortKey::Id | SortKey::Unknown(_) => ("id", Direction::Desc),
            SortKey::Age => ("age", Direction::Asc),
            SortKey::Name => ("name", Direction::Asc),
            SortKey::Best | SortKey::Friend => ("friend", Direction::Desc),
        }
    }

    /// `ORDER BY` clause body, built only from the fixed column table
    pub fn order_by(&self) -> String {
        let (column, direction) = self.column();
        format!("{} {}", column, direction.as_sql())
    }
}

impl From<&str> for SortKey {
    fn from(key: &str) -> Self {
        SortKey::parse(key)
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
