// src/likes.rs
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::Listing;
use crate::errors::ServerError;
use crate::storage::KeyValueStore;

/// JSON array of liked listing ids.
pub const LIKED_IDS_KEY: &str = "likedListings";
/// JSON array of listing snapshots, appended on every like.
pub const LIKED_DATA_KEY: &str = "likedListingsData";

/// Liked listings kept in a key-value store.
///
/// Unliking only drops the id; snapshots written by `like` stay in
/// `LIKED_DATA_KEY`, so the snapshot list is an append-only log.
pub struct LikedListings<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> LikedListings<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn liked_ids(&self) -> Result<Vec<u32>, ServerError> {
        self.read_list(LIKED_IDS_KEY)
    }

    pub fn liked_snapshots(&self) -> Result<Vec<Listing>, ServerError> {
        self.read_list(LIKED_DATA_KEY)
    }

    pub fn is_liked(&self, id: u32) -> Result<bool, ServerError> {
        Ok(self.liked_ids()?.contains(&id))
    }

    pub fn like(&self, listing: &Listing) -> Result<(), ServerError> {
        self.store.atomically(|| self.record_like(listing))
    }

    pub fn unlike(&self, id: u32) -> Result<(), ServerError> {
        self.store.atomically(|| self.drop_like(id))
    }

    /// Returns the new liked state.
    pub fn toggle(&self, listing: &Listing) -> Result<bool, ServerError> {
        self.store.atomically(|| {
            if self.is_liked(listing.id)? {
                self.drop_like(listing.id)?;
                Ok(false)
            } else {
                self.record_like(listing)?;
                Ok(true)
            }
        })
    }

    /// Currently liked listings in like order, one per id, latest snapshot wins.
    pub fn liked_listings(&self) -> Result<Vec<Listing>, ServerError> {
        let ids = self.liked_ids()?;
        let snapshots = self.liked_snapshots()?;

        Ok(ids
            .iter()
            .filter_map(|id| snapshots.iter().rev().find(|l| l.id == *id).cloned())
            .collect())
    }

    fn record_like(&self, listing: &Listing) -> Result<(), ServerError> {
        let mut ids = self.liked_ids()?;
        if !ids.contains(&listing.id) {
            ids.push(listing.id);
            self.write_list(LIKED_IDS_KEY, &ids)?;
        }

        let mut snapshots = self.liked_snapshots()?;
        snapshots.push(listing.clone());
        self.write_list(LIKED_DATA_KEY, &snapshots)?;

        tracing::info!(listing_id = listing.id, "listing liked");
        Ok(())
    }

    fn drop_like(&self, id: u32) -> Result<(), ServerError> {
        let mut ids = self.liked_ids()?;
        ids.retain(|liked| *liked != id);
        self.write_list(LIKED_IDS_KEY, &ids)?;

        tracing::info!(listing_id = id, "listing unliked");
        Ok(())
    }

    fn read_list<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, ServerError> {
        match self.store.get(key)? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| ServerError::DbError(format!("corrupt value under {key}: {e}"))),
        }
    }

    fn write_list<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), ServerError> {
        let raw = serde_json::to_string(items)
            .map_err(|e| ServerError::DbError(format!("serialize {key} failed: {e}")))?;
        self.store.set(key, &raw)
    }
}
