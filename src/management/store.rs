use std::time::Duration;

use chrono::Utc;
use serde::{Serialize, de::DeserializeOwned};
use tokio::time::timeout;

use crate::{
    storage::{StorageError, StorageProvider},
    types::{ICON_PALETTE, Item, Playlist, Preferences, Review},
    utils,
};

pub const FAVORITES_KEY: &str = "favorites";
pub const REVIEWS_KEY: &str = "reviews";
pub const PLAYLISTS_KEY: &str = "playlists";
pub const PREFERENCES_KEY: &str = "preferences";

// A hanging provider must not hang the triggering command forever.
const STORAGE_TIMEOUT: Duration = Duration::from_secs(5);

const MAX_COMMENT_LEN: usize = 500;
const MAX_PLAYLIST_NAME_LEN: usize = 50;
const MAX_PLAYLIST_DESCRIPTION_LEN: usize = 150;

#[derive(Debug)]
pub enum StoreError {
    StorageUnavailable(StorageError),
    StorageWriteFailed(StorageError),
    Timeout(&'static str),
    CorruptBlob {
        key: &'static str,
        source: serde_json::Error,
    },
    ValidationFailed(String),
    DuplicateFavorite,
    AlreadyMember,
}

impl From<StorageError> for StoreError {
    fn from(err: StorageError) -> Self {
        StoreError::StorageUnavailable(err)
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::StorageUnavailable(err) => write!(f, "storage read failed: {}", err),
            StoreError::StorageWriteFailed(err) => write!(f, "storage write failed: {}", err),
            StoreError::Timeout(key) => write!(f, "storage timed out while accessing '{}'", key),
            StoreError::CorruptBlob { key, source } => {
                write!(f, "stored '{}' data does not match the schema: {}", key, source)
            }
            StoreError::ValidationFailed(reason) => write!(f, "{}", reason),
            StoreError::DuplicateFavorite => write!(f, "this item is already in your favorites"),
            StoreError::AlreadyMember => write!(f, "this item is already in the playlist"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Read-modify-write access to the four persisted collections: favorites,
/// reviews, playlists and preferences. Each collection lives as one JSON
/// blob under a fixed key of the storage provider; every operation loads
/// the full collection, transforms it in memory and writes it back in a
/// single call. There is no cross-collection atomicity.
pub struct CollectionStore<S> {
    storage: S,
}

impl<S: StorageProvider> CollectionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    async fn read_collection<T: DeserializeOwned>(
        &self,
        key: &'static str,
    ) -> Result<Option<T>, StoreError> {
        let blob = timeout(STORAGE_TIMEOUT, self.storage.get(key))
            .await
            .map_err(|_| StoreError::Timeout(key))?
            .map_err(StoreError::StorageUnavailable)?;

        match blob {
            // Blobs live outside the process; anything that does not parse
            // into the schema is rejected, never trusted.
            Some(content) => serde_json::from_str(&content)
                .map(Some)
                .map_err(|source| StoreError::CorruptBlob { key, source }),
            None => Ok(None),
        }
    }

    async fn write_collection<T: Serialize>(
        &self,
        key: &'static str,
        value: &T,
    ) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|source| StoreError::CorruptBlob { key, source })?;

        timeout(STORAGE_TIMEOUT, self.storage.set(key, &json))
            .await
            .map_err(|_| StoreError::Timeout(key))?
            .map_err(StoreError::StorageWriteFailed)
    }

    pub async fn load_favorites(&self) -> Result<Vec<Item>, StoreError> {
        Ok(self.read_collection(FAVORITES_KEY).await?.unwrap_or_default())
    }

    /// Persists a full favorites collection in one write.
    pub async fn save_favorites(&self, favorites: &[Item]) -> Result<(), StoreError> {
        self.write_collection(FAVORITES_KEY, &favorites).await
    }

    /// Adds an item to favorites. Favoriting an item that is already
    /// present fails with `DuplicateFavorite` and leaves the collection
    /// untouched; this is surfaced to the user, unlike the silent
    /// playlist-membership rejection.
    pub async fn add_favorite(&self, item: Item) -> Result<Vec<Item>, StoreError> {
        let mut favorites = self.load_favorites().await?;
        if favorites.iter().any(|f| f.id == item.id) {
            return Err(StoreError::DuplicateFavorite);
        }

        favorites.push(item);
        self.write_collection(FAVORITES_KEY, &favorites).await?;
        Ok(favorites)
    }

    pub async fn remove_favorite(&self, id: &str) -> Result<Vec<Item>, StoreError> {
        let favorites = remove_by_id(self.load_favorites().await?, id, |f| &f.id);
        self.write_collection(FAVORITES_KEY, &favorites).await?;
        Ok(favorites)
    }

    pub async fn load_reviews(&self) -> Result<Vec<Review>, StoreError> {
        Ok(self.read_collection(REVIEWS_KEY).await?.unwrap_or_default())
    }

    /// Persists a full reviews collection in one write.
    pub async fn save_reviews(&self, reviews: &[Review]) -> Result<(), StoreError> {
        self.write_collection(REVIEWS_KEY, &reviews).await
    }

    /// Creates or overwrites the review for `review.id` (at most one
    /// review per item). The record is validated before any write.
    pub async fn save_review(&self, review: Review) -> Result<Vec<Review>, StoreError> {
        validate_review(&review)?;

        let reviews = upsert_by_id(self.load_reviews().await?, review, |r| &r.id);
        self.write_collection(REVIEWS_KEY, &reviews).await?;
        Ok(reviews)
    }

    pub async fn delete_review(&self, id: &str) -> Result<Vec<Review>, StoreError> {
        let reviews = remove_by_id(self.load_reviews().await?, id, |r| &r.id);
        self.write_collection(REVIEWS_KEY, &reviews).await?;
        Ok(reviews)
    }

    pub async fn load_playlists(&self) -> Result<Vec<Playlist>, StoreError> {
        Ok(self.read_collection(PLAYLISTS_KEY).await?.unwrap_or_default())
    }

    /// Persists a full playlists collection in one write. The typed
    /// operations below validate before calling this.
    pub async fn save_playlists(&self, playlists: &[Playlist]) -> Result<(), StoreError> {
        self.write_collection(PLAYLISTS_KEY, &playlists).await
    }

    /// Seeds the four system playlists the first time the collection is
    /// found empty and persists them immediately, so subsequent loads see
    /// them without re-deriving. Idempotent; called once at startup.
    pub async fn ensure_default_playlists(&self) -> Result<Vec<Playlist>, StoreError> {
        let playlists = self.load_playlists().await?;
        if !playlists.is_empty() {
            return Ok(playlists);
        }

        let defaults = default_playlists();
        self.write_collection(PLAYLISTS_KEY, &defaults).await?;
        Ok(defaults)
    }

    /// Creates a new playlist or edits an existing one by id. Default
    /// playlists only ever change through their `items` sequence; editing
    /// their identity is rejected.
    pub async fn save_playlist(&self, playlist: Playlist) -> Result<Vec<Playlist>, StoreError> {
        validate_playlist(&playlist)?;

        let playlists = self.load_playlists().await?;
        if let Some(existing) = playlists.iter().find(|p| p.id == playlist.id) {
            if existing.is_default {
                return Err(StoreError::ValidationFailed(
                    "default playlists cannot be edited".to_string(),
                ));
            }
        }

        let playlists = upsert_by_id(playlists, playlist, |p| &p.id);
        self.write_collection(PLAYLISTS_KEY, &playlists).await?;
        Ok(playlists)
    }

    pub async fn delete_playlist(&self, id: &str) -> Result<Vec<Playlist>, StoreError> {
        let playlists = self.load_playlists().await?;
        if playlists.iter().any(|p| p.id == id && p.is_default) {
            return Err(StoreError::ValidationFailed(
                "default playlists cannot be deleted".to_string(),
            ));
        }

        let playlists = remove_by_id(playlists, id, |p| &p.id);
        self.write_collection(PLAYLISTS_KEY, &playlists).await?;
        Ok(playlists)
    }

    pub async fn add_to_playlist(
        &self,
        playlist_id: &str,
        item: Item,
    ) -> Result<Playlist, StoreError> {
        let mut playlists = self.load_playlists().await?;
        let playlist = playlists
            .iter_mut()
            .find(|p| p.id == playlist_id)
            .ok_or_else(|| {
                StoreError::ValidationFailed(format!("no playlist with id '{}'", playlist_id))
            })?;

        toggle_membership(playlist, item)?;
        let changed = playlist.clone();
        self.write_collection(PLAYLISTS_KEY, &playlists).await?;
        Ok(changed)
    }

    pub async fn remove_from_playlist(
        &self,
        playlist_id: &str,
        item_id: &str,
    ) -> Result<Playlist, StoreError> {
        let mut playlists = self.load_playlists().await?;
        let playlist = playlists
            .iter_mut()
            .find(|p| p.id == playlist_id)
            .ok_or_else(|| {
                StoreError::ValidationFailed(format!("no playlist with id '{}'", playlist_id))
            })?;

        playlist.items.retain(|i| i.id != item_id);
        playlist.updated_at = Some(Utc::now().to_rfc3339());
        let changed = playlist.clone();
        self.write_collection(PLAYLISTS_KEY, &playlists).await?;
        Ok(changed)
    }

    pub async fn load_preferences(&self) -> Result<Option<Preferences>, StoreError> {
        self.read_collection(PREFERENCES_KEY).await
    }

    /// Replaces the preferences singleton wholesale.
    pub async fn save_preferences(&self, preferences: Preferences) -> Result<Preferences, StoreError> {
        validate_preferences(&preferences)?;
        self.write_collection(PREFERENCES_KEY, &preferences).await?;
        Ok(preferences)
    }
}

/// Replaces the entry whose id matches `record` in place, or prepends the
/// record when no entry matches. New and edited entries therefore surface
/// at the front of listings that follow storage order.
pub fn upsert_by_id<T, F>(mut records: Vec<T>, record: T, id_of: F) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    match records.iter().position(|r| id_of(r) == id_of(&record)) {
        Some(pos) => records[pos] = record,
        None => records.insert(0, record),
    }
    records
}

/// Drops the entry with the given id; a no-op when no entry matches.
pub fn remove_by_id<T, F>(mut records: Vec<T>, id: &str, id_of: F) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    records.retain(|r| id_of(r) != id);
    records
}

/// Adds `item` to the playlist unless an entry with the same id already
/// exists, in which case `AlreadyMember` is signalled and the playlist is
/// left unchanged.
pub fn toggle_membership(playlist: &mut Playlist, item: Item) -> Result<(), StoreError> {
    if playlist.items.iter().any(|i| i.id == item.id) {
        return Err(StoreError::AlreadyMember);
    }

    playlist.items.push(item);
    playlist.updated_at = Some(Utc::now().to_rfc3339());
    Ok(())
}

pub fn default_playlists() -> Vec<Playlist> {
    let created_at = Utc::now().to_rfc3339();

    [
        (
            "default-action",
            "Action Essentials",
            "Adrenaline-packed movies and shows",
            "🔥",
        ),
        (
            "default-comedy",
            "Comedy Break",
            "Guaranteed laughs to unwind",
            "😂",
        ),
        (
            "default-scifi",
            "Sci-Fi Classics",
            "The best of science fiction",
            "🚀",
        ),
        (
            "default-horror",
            "Horror Nights",
            "For the brave ones on duty",
            "👻",
        ),
    ]
    .into_iter()
    .map(|(id, name, description, icon)| Playlist {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        items: Vec::new(),
        is_default: true,
        created_at: created_at.clone(),
        updated_at: None,
    })
    .collect()
}

fn validate_review(review: &Review) -> Result<(), StoreError> {
    // Rating 0 means "not yet reviewed" and never reaches storage.
    if review.rating < 1 || review.rating > 5 {
        return Err(StoreError::ValidationFailed(
            "review rating must be between 1 and 5 stars".to_string(),
        ));
    }
    if review.comment.chars().count() > MAX_COMMENT_LEN {
        return Err(StoreError::ValidationFailed(format!(
            "review comment must be at most {} characters",
            MAX_COMMENT_LEN
        )));
    }
    Ok(())
}

fn validate_playlist(playlist: &Playlist) -> Result<(), StoreError> {
    if playlist.name.trim().is_empty() {
        return Err(StoreError::ValidationFailed(
            "playlist name cannot be blank".to_string(),
        ));
    }
    if playlist.name.chars().count() > MAX_PLAYLIST_NAME_LEN {
        return Err(StoreError::ValidationFailed(format!(
            "playlist name must be at most {} characters",
            MAX_PLAYLIST_NAME_LEN
        )));
    }
    if playlist.description.chars().count() > MAX_PLAYLIST_DESCRIPTION_LEN {
        return Err(StoreError::ValidationFailed(format!(
            "playlist description must be at most {} characters",
            MAX_PLAYLIST_DESCRIPTION_LEN
        )));
    }
    if !ICON_PALETTE.contains(&playlist.icon.as_str()) {
        return Err(StoreError::ValidationFailed(
            "playlist icon must be one of the offered glyphs".to_string(),
        ));
    }

    let mut seen = std::collections::HashSet::new();
    if !playlist.items.iter().all(|i| seen.insert(i.id.as_str())) {
        return Err(StoreError::ValidationFailed(
            "playlist items must have unique ids".to_string(),
        ));
    }
    Ok(())
}

fn validate_preferences(preferences: &Preferences) -> Result<(), StoreError> {
    if preferences.user_name.trim().is_empty() {
        return Err(StoreError::ValidationFailed(
            "user name cannot be blank".to_string(),
        ));
    }
    for genre in &preferences.genres {
        if utils::parse_genre(genre).is_none() {
            return Err(StoreError::ValidationFailed(format!(
                "unknown genre '{}'",
                genre
            )));
        }
    }
    if let Some(min_rating) = preferences.min_rating {
        if !(0.0..=10.0).contains(&min_rating) {
            return Err(StoreError::ValidationFailed(
                "minimum rating must be between 0 and 10".to_string(),
            ));
        }
    }
    Ok(())
}
