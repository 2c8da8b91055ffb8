//! # Monkey - profiles and friendships on SQLite
//!
//! Monkey keeps a small social graph:
//! - Entries (profiles) keyed by a unique mail
//! - Symmetric friendship edges between entries' mails
//! - An optional best friend per entry, cleared when the friendship ends
//! - Friend counts recomputed from the edges whenever entries are listed
//!
//! [`RelationshipService`] is the entry point; it reads and writes through
//! the repositories in [`storage`].

pub mod entry;
pub mod friendship;
pub mod sort;
pub mod auth;
pub mod storage;
pub mod graph;
pub mod service;
pub mod config;
pub mod output;
pub mod ui;


// Re-exports for convenient access
pub use entry::{Entry, EntryFields, EntryId};
pub use friendship::Friendship;
pub use sort::SortKey;
pub use auth::{Access, AdminCredentials};
pub use graph::{GraphAggregator, Profile};
pub use service::{Listing, Notice, RelationshipService, Stats};
pub use storage::SqliteStore;

/// Result type alias for Monkey operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Monkey operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Login required")]
    Unauthorized,

    #[error("Invalid username")]
    InvalidUsername,

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Profile not found: {0}")]
    NotFound(String),

    #[error("Mail already in use: {0}")]
    ConstraintViolation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}

impl Error {
    /// Errors a front end reports as a notice and then carries on from
    pub fn is_notice(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}
