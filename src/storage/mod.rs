//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with tables:
//! - entries(id, name, age, mail, text, friend, best)
//! - friends(mail1, mail2)

pub mod schema;
pub mod sqlite;
pub mod entries;
pub mod friends;

pub use sqlite::SqliteStore;
pub use entries::EntryRepository;
pub use friends::FriendRepository;
