//! Relationship service - the use cases offered to a front end
//!
//! Every call is one unit of work against the store and re-reads whatever
//! it needs. Mutating calls take an [`Access`] and refuse anonymous callers
//! before touching the store.

use std::collections::HashSet;
use serde::{Deserialize, Serialize};
use crate::auth::Access;
use crate::entry::{Entry, EntryFields, EntryId};
use crate::graph::{GraphAggregator, Profile};
use crate::sort::SortKey;
use crate::storage::{EntryRepository, FriendRepository, SqliteStore};
use crate::{Error, Result};

/// Non-fatal message to show alongside a successful result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Notice {
    /// The requested sort key was not recognized; `id` order was used
    UnknownSortKey(String),
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::UnknownSortKey(_) => write!(f, "Unknown sorting argument."),
        }
    }
}

/// Result of a listing request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub entries: Vec<Entry>,
    /// The key as requested
    pub sort: SortKey,
    pub notices: Vec<Notice>,
}

/// Store statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub entries: usize,
    /// Rows in the friends table, duplicates and self edges included
    pub edge_rows: usize,
    /// Distinct unordered pairs of different mails
    pub friendships: usize,
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Database Statistics:")?;
        writeln!(f, "  Entries: {}", self.entries)?;
        writeln!(f, "  Edge rows: {}", self.edge_rows)?;
        writeln!(f, "  Friendships: {}", self.friendships)
    }
}

pub struct RelationshipService<'a> {
    entries: EntryRepository<'a>,
    friends: FriendRepository<'a>,
    graph: GraphAggregator<'a>,
}

impl<'a> RelationshipService<'a> {
    pub fn new(store: &'a SqliteStore) -> Self {
        Self {
            entries: EntryRepository::new(store),
            friends: FriendRepository::new(store),
            graph: GraphAggregator::new(store),
        }
    }

    /// Recount friends, then list every entry in `sort` order
    pub fn list_entries(&self, sort: impl Into<SortKey>) -> Result<Listing> {
        let sort = sort.into();
        let mut notices = Vec::new();
        if sort.is_unknown() {
            tracing::warn!("Unknown sort key {:?}, listing by id", sort.as_str());
            notices.push(Notice::UnknownSortKey(sort.as_str().to_string()));
        }

        self.graph.recompute_friend_counts()?;
        let entries = self.entries.list_all(&sort)?;
        Ok(Listing {
            entries,
            sort,
            notices,
        })
    }

    pub fn add_entry(&self, access: Access, fields: &EntryFields) -> Result<EntryId> {
        access.require_admin()?;
        let id = self.entries.create(fields)?;
        tracing::info!("Added {} as {}", fields.mail, id);
        Ok(id)
    }

    pub fn edit_entry(&self, access: Access, old_mail: &str, fields: &EntryFields) -> Result<()> {
        access.require_admin()?;
        self.entries.update(old_mail, fields)?;
        tracing::info!("Edited {} (now {})", old_mail, fields.mail);
        Ok(())
    }

    /// Delete an entry. Its friendship rows and any `best` naming it stay.
    pub fn delete_entry(&self, access: Access, mail: &str) -> Result<()> {
        access.require_admin()?;
        self.entries.delete(mail)?;
        tracing::info!("Deleted {}", mail);
        Ok(())
    }

    /// Load a profile with its friends and non-friends. No recount.
    pub fn view_profile(&self, mail: &str) -> Result<Profile> {
        let entry = self
            .entries
            .get_by_mail(mail)?
            .ok_or_else(|| Error::NotFound(mail.to_string()))?;
        self.graph.partition(entry)
    }

    pub fn add_friendship(&self, access: Access, mail_a: &str, mail_b: &str) -> Result<()> {
        access.require_admin()?;
        self.friends.add_edge(mail_a, mail_b)?;
        tracing::info!("Friendship added: {} <-> {}", mail_a, mail_b);
        Ok(())
    }

    /// Remove a friendship, clearing best-friend designations that
    /// depended on it. Returns the number of edge rows removed.
    pub fn remove_friendship(&self, access: Access, mail_a: &str, mail_b: &str) -> Result<usize> {
        access.require_admin()?;
        let removed = self.friends.remove_edge(mail_a, mail_b)?;
        if removed == 0 {
            tracing::debug!("No friendship between {} and {}", mail_a, mail_b);
        } else {
            tracing::info!("Friendship removed: {} <-> {}", mail_a, mail_b);
        }
        Ok(removed)
    }

    /// Set or clear the best friend of `mail`.
    ///
    /// Setting does not require a current friendship.
    pub fn set_best_friend(&self, access: Access, mail: &str, best: Option<&str>) -> Result<()> {
        access.require_admin()?;
        self.entries.set_best(mail, best)?;
        match best {
            Some(best) => {
                if !self.friends.are_friends(mail, best)? {
                    tracing::warn!("{} is not a friend of {}", best, mail);
                }
                tracing::info!("Best friend of {} set to {}", mail, best);
            }
            None => tracing::info!("Best friend of {} cleared", mail),
        }
        Ok(())
    }

    pub fn stats(&self) -> Result<Stats> {
        let friendships: HashSet<_> = self
            .friends
            .all()?
            .into_iter()
            .filter(|f| !f.is_self())
            .collect();
        Ok(Stats {
            entries: self.entries.count()?,
            edge_rows: self.friends.count_rows()?,
            friendships: friendships.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_with<'a>(store: &'a SqliteStore, mails: &[&str]) -> RelationshipService<'a> {
        let service = RelationshipService::new(store);
        for (i, mail) in mails.iter().enumerate() {
            service
                .add_entry(
                    Access::Admin,
                    &EntryFields::new(format!("Monkey {}", i), 20 + i as i64, *mail, "Apina!"),
                )
                .unwrap();
        }
        service
    }

    #[test]
    fn test_anonymous_is_rejected() {
        let store = SqliteStore::open_in_memory().unwrap();
        let service = service_with(&store, &["a@x", "b@x"]);
        let anon = Access::Anonymous;

        assert!(matches!(
            service.add_entry(anon, &EntryFields::new("C", 1, "c@x", "")),
            Err(Error::Unauthorized)
        ));
        assert!(matches!(
            service.edit_entry(anon, "a@x", &EntryFields::new("A", 1, "a@x", "")),
            Err(Error::Unauthorized)
        ));
        assert!(matches!(service.delete_entry(anon, "a@x"), Err(Error::Unauthorized)));
        assert!(matches!(service.add_friendship(anon, "a@x", "b@x"), Err(Error::Unauthorized)));
        assert!(matches!(service.remove_friendship(anon, "a@x", "b@x"), Err(Error::Unauthorized)));
        assert!(matches!(
            service.set_best_friend(anon, "a@x", Some("b@x")),
            Err(Error::Unauthorized)
        ));

        let stats = service.stats().unwrap();
        assert_eq!(stats.entries, 2);
        assert_eq!(stats.edge_rows, 0);
        assert_eq!(service.view_profile("a@x").unwrap().entry.name, "Monkey 0");
    }

    #[test]
    fn test_unknown_sort_key_warns() {
        let store = SqliteStore::open_in_memory().unwrap();
        let service = service_with(&store, &["a@x", "b@x", "c@x"]);

        let by_id = service.list_entries("id").unwrap();
        assert!(by_id.notices.is_empty());

        let bogus = service.list_entries("bogus-key").unwrap();
        assert_eq!(bogus.notices, [Notice::UnknownSortKey("bogus-key".into())]);
        assert_eq!(bogus.notices[0].to_string(), "Unknown sorting argument.");
        assert_eq!(bogus.entries, by_id.entries);
        assert_eq!(bogus.sort.as_str(), "bogus-key");
    }

    #[test]
    fn test_stats_collapse_duplicates() {
        let store = SqliteStore::open_in_memory().unwrap();
        let service = service_with(&store, &["a@x", "b@x", "c@x"]);

        service.add_friendship(Access::Admin, "a@x", "b@x").unwrap();
        service.add_friendship(Access::Admin, "b@x", "a@x").unwrap();
        service.add_friendship(Access::Admin, "c@x", "c@x").unwrap();
        service.add_friendship(Access::Admin, "a@x", "c@x").unwrap();

        let stats = service.stats().unwrap();
        assert_eq!(
            stats,
            Stats {
                entries: 3,
                edge_rows: 4,
                friendships: 2
            }
        );
    }

    #[test]
    fn test_best_friend_needs_no_friendship() {
        let store = SqliteStore::open_in_memory().unwrap();
        let service = service_with(&store, &["a@x", "b@x"]);

        service.set_best_friend(Access::Admin, "a@x", Some("b@x")).unwrap();
        let profile = service.view_profile("a@x").unwrap();
        assert!(profile.entry.is_best("b@x"));
        assert!(profile.best_friend().is_none());

        service.set_best_friend(Access::Admin, "a@x", None).unwrap();
        assert_eq!(service.view_profile("a@x").unwrap().entry.best, None);
    }

    #[test]
    fn test_missing_profile_is_not_found() {
        let store = SqliteStore::open_in_memory().unwrap();
        let service = service_with(&store, &[]);

        let err = service.view_profile("ghost@x").unwrap_err();
        assert!(err.is_notice());
        assert!(matches!(err, Error::NotFound(ref m) if m == "ghost@x"));
    }
}
