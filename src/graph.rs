//! Graph aggregation - friend counts and profile partitions
//!
//! Friend counts on `entries.friend` are derived data. They are recounted
//! from the edge table on every listing rather than maintained on edge
//! changes, so a listing always reflects the edges as they are when it is
//! produced.

use serde::{Deserialize, Serialize};
use crate::entry::Entry;
use crate::storage::{EntryRepository, FriendRepository, SqliteStore};
use crate::Result;

/// A profile with every other entry split into friends and non-friends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub entry: Entry,
    pub friends: Vec<Entry>,
    pub non_friends: Vec<Entry>,
}

impl Profile {
    pub fn has_friends(&self) -> bool {
        !self.friends.is_empty()
    }

    /// The designated best friend, when it is also listed as a friend
    pub fn best_friend(&self) -> Option<&Entry> {
        let best = self.entry.best.as_deref()?;
        self.friends.iter().find(|f| f.mail == best)
    }
}

pub struct GraphAggregator<'a> {
    store: &'a SqliteStore,
    entries: EntryRepository<'a>,
    friends: FriendRepository<'a>,
}

impl<'a> GraphAggregator<'a> {
    pub fn new(store: &'a SqliteStore) -> Self {
        Self {
            store,
            entries: EntryRepository::new(store),
            friends: FriendRepository::new(store),
        }
    }

    /// Recount and persist the friend count of every entry.
    ///
    /// Each entry is counted and written in its own transaction, so an
    /// interrupted pass leaves every committed count correct for the moment
    /// it was taken. Returns the number of entries recounted.
    pub fn recompute_friend_counts(&self) -> Result<usize> {
        let mails = self.entries.all_mails()?;
        for mail in &mails {
            let count = self.store.in_transaction(|| {
                let count = self.friends.count_friends_of(mail)?;
                self.entries.set_friend_count(mail, count)?;
                Ok(count)
            })?;
            tracing::trace!("{} has {} friend(s)", mail, count);
        }
        tracing::debug!("Recounted friends for {} entries", mails.len());
        Ok(mails.len())
    }

    /// Split all other entries into friends and non-friends of `entry`
    pub fn partition(&self, entry: Entry) -> Result<Profile> {
        let friends = self.friends.friends_of(&entry.mail)?;
        let non_friends = self.friends.non_friends_of(&entry.mail)?;
        Ok(Profile {
            entry,
            friends,
            non_friends,
        })
    }
}
