use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use cineshelf::management::{
    CollectionStore, StoreError, remove_by_id, toggle_membership, upsert_by_id,
};
use cineshelf::storage::{StorageError, StorageProvider};
use cineshelf::types::{Item, MediaType, Playlist, Preferences, Review};

/// In-memory storage provider; cloning shares the same blobs so tests can
/// inspect what the store actually persisted.
#[derive(Clone, Default)]
struct MemoryStorage {
    blobs: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    fn raw_blob(&self, key: &str) -> Option<String> {
        self.blobs.lock().unwrap().get(key).cloned()
    }

    fn put_raw_blob(&self, key: &str, value: &str) {
        self.blobs
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

impl StorageProvider for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.blobs.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.blobs
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage provider whose reads always fail.
struct FailingStorage;

impl StorageProvider for FailingStorage {
    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("backing store offline".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("backing store offline".to_string()))
    }
}

/// Storage provider that reads fine but rejects every write.
#[derive(Default)]
struct ReadOnlyStorage {
    inner: MemoryStorage,
}

impl StorageProvider for ReadOnlyStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key).await
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("medium is read-only".to_string()))
    }
}

// Helper function to create a minimal test item
fn create_test_item(id: &str, title: &str, media_type: MediaType, genre: &str) -> Item {
    Item {
        id: id.to_string(),
        title: title.to_string(),
        media_type,
        genre: genre.to_string(),
        description: format!("{} description", title),
        rating: None,
        poster: None,
        image: None,
        release_date: None,
        runtime: None,
        seasons: None,
        episodes: None,
    }
}

// Helper function to create an item with every field populated
fn create_full_item() -> Item {
    Item {
        id: "movie-603".to_string(),
        title: "The Matrix".to_string(),
        media_type: MediaType::Movie,
        genre: "Sci-Fi".to_string(),
        description: "A hacker discovers the truth about reality.".to_string(),
        rating: Some(8.2),
        poster: Some("https://image.tmdb.org/t/p/w500/poster.jpg".to_string()),
        image: Some("https://image.tmdb.org/t/p/w500/backdrop.jpg".to_string()),
        release_date: Some("1999-03-31".to_string()),
        runtime: Some(136),
        seasons: None,
        episodes: None,
    }
}

// Helper function to create a test review
fn create_test_review(id: &str, title: &str, rating: u8, date: &str) -> Review {
    Review {
        id: id.to_string(),
        item_title: title.to_string(),
        item_type: MediaType::Movie,
        item_poster: None,
        item_genre: "Drama".to_string(),
        rating,
        comment: "solid".to_string(),
        date: date.to_string(),
    }
}

// Helper function to create a user playlist
fn create_test_playlist(id: &str, name: &str) -> Playlist {
    Playlist {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        icon: "🎬".to_string(),
        items: Vec::new(),
        is_default: false,
        created_at: "2024-01-01T00:00:00+00:00".to_string(),
        updated_at: None,
    }
}

#[tokio::test]
async fn test_load_favorites_empty_store() {
    let store = CollectionStore::new(MemoryStorage::default());

    // A missing blob is a valid empty state, not an error
    let favorites = store.load_favorites().await.unwrap();
    assert!(favorites.is_empty());
}

#[tokio::test]
async fn test_load_is_idempotent() {
    let store = CollectionStore::new(MemoryStorage::default());
    store
        .add_favorite(create_test_item("m3", "The Matrix", MediaType::Movie, "Sci-Fi"))
        .await
        .unwrap();

    let first = store.load_favorites().await.unwrap();
    let second = store.load_favorites().await.unwrap();

    // Two loads without an intervening write return identical collections
    assert_eq!(first.len(), second.len());
    assert_eq!(first[0].id, second[0].id);
    assert_eq!(first[0].title, second[0].title);
}

#[tokio::test]
async fn test_favorite_round_trip_field_for_field() {
    let store = CollectionStore::new(MemoryStorage::default());
    let item = create_full_item();
    store.save_favorites(&[item.clone()]).await.unwrap();

    let favorites = store.load_favorites().await.unwrap();
    assert_eq!(favorites.len(), 1);

    let loaded = &favorites[0];
    assert_eq!(loaded.id, item.id);
    assert_eq!(loaded.title, item.title);
    assert_eq!(loaded.media_type, item.media_type);
    assert_eq!(loaded.genre, item.genre);
    assert_eq!(loaded.description, item.description);
    assert_eq!(loaded.rating, item.rating);
    assert_eq!(loaded.poster, item.poster);
    assert_eq!(loaded.image, item.image);
    assert_eq!(loaded.release_date, item.release_date);
    assert_eq!(loaded.runtime, item.runtime);
    assert_eq!(loaded.seasons, item.seasons);
    assert_eq!(loaded.episodes, item.episodes);
}

#[tokio::test]
async fn test_blob_field_names_round_trip() {
    let storage = MemoryStorage::default();
    let store = CollectionStore::new(storage.clone());
    store.add_favorite(create_full_item()).await.unwrap();

    // The persisted JSON must carry the original field names and casing
    let blob = storage.raw_blob("favorites").unwrap();
    assert!(blob.contains("\"releaseDate\""));
    assert!(blob.contains("\"type\": \"Movie\""));
    assert!(!blob.contains("\"media_type\""));
    assert!(!blob.contains("\"release_date\""));
}

#[tokio::test]
async fn test_duplicate_favorite_rejected() {
    let store = CollectionStore::new(MemoryStorage::default());
    let item = create_test_item("m1", "Stranger Things", MediaType::Series, "Sci-Fi");

    store.add_favorite(item.clone()).await.unwrap();
    let result = store.add_favorite(item).await;

    // Second add with the same id is surfaced, not silently ignored
    assert!(matches!(result, Err(StoreError::DuplicateFavorite)));

    // ...and the collection is unchanged
    let favorites = store.load_favorites().await.unwrap();
    assert_eq!(favorites.len(), 1);
}

#[tokio::test]
async fn test_remove_favorite_missing_is_noop() {
    let store = CollectionStore::new(MemoryStorage::default());
    store
        .add_favorite(create_test_item("m1", "Stranger Things", MediaType::Series, "Sci-Fi"))
        .await
        .unwrap();

    let favorites = store.remove_favorite("does-not-exist").await.unwrap();
    assert_eq!(favorites.len(), 1);

    let favorites = store.remove_favorite("m1").await.unwrap();
    assert!(favorites.is_empty());
}

#[tokio::test]
async fn test_review_upsert_by_id() {
    let store = CollectionStore::new(MemoryStorage::default());

    store
        .save_review(create_test_review("m2", "Oppenheimer", 3, "2024-05-01T10:00:00+00:00"))
        .await
        .unwrap();
    // New reviews prepend, so m5 ends up in front of m2
    let reviews = store
        .save_review(create_test_review("m5", "The Office", 4, "2024-05-02T10:00:00+00:00"))
        .await
        .unwrap();
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].id, "m5");
    assert_eq!(reviews[1].id, "m2");

    // Saving an existing id replaces the entry in place
    let updated = create_test_review("m2", "Oppenheimer", 5, "2024-05-03T10:00:00+00:00");
    let reviews = store.save_review(updated).await.unwrap();
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[1].id, "m2");
    assert_eq!(reviews[1].rating, 5);
    assert_eq!(reviews[1].date, "2024-05-03T10:00:00+00:00");
}

#[tokio::test]
async fn test_review_rating_zero_rejected() {
    let store = CollectionStore::new(MemoryStorage::default());

    let result = store
        .save_review(create_test_review("m2", "Oppenheimer", 0, "2024-05-01T10:00:00+00:00"))
        .await;
    assert!(matches!(result, Err(StoreError::ValidationFailed(_))));

    // Nothing was written
    let reviews = store.load_reviews().await.unwrap();
    assert!(reviews.is_empty());
}

#[tokio::test]
async fn test_review_rating_above_five_rejected() {
    let store = CollectionStore::new(MemoryStorage::default());

    let result = store
        .save_review(create_test_review("m2", "Oppenheimer", 6, "2024-05-01T10:00:00+00:00"))
        .await;
    assert!(matches!(result, Err(StoreError::ValidationFailed(_))));
}

#[tokio::test]
async fn test_review_comment_too_long_rejected() {
    let store = CollectionStore::new(MemoryStorage::default());

    let mut review = create_test_review("m2", "Oppenheimer", 4, "2024-05-01T10:00:00+00:00");
    review.comment = "x".repeat(501);

    let result = store.save_review(review).await;
    assert!(matches!(result, Err(StoreError::ValidationFailed(_))));
}

#[tokio::test]
async fn test_default_playlists_seeded_once() {
    let store = CollectionStore::new(MemoryStorage::default());

    let playlists = store.ensure_default_playlists().await.unwrap();
    assert_eq!(playlists.len(), 4);

    let ids: Vec<&str> = playlists.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["default-action", "default-comedy", "default-scifi", "default-horror"]
    );
    for playlist in &playlists {
        assert!(playlist.is_default);
        assert!(playlist.items.is_empty());
    }

    // A second call must not duplicate the defaults
    let playlists = store.ensure_default_playlists().await.unwrap();
    assert_eq!(playlists.len(), 4);

    // ...and a plain load sees the same four
    let playlists = store.load_playlists().await.unwrap();
    assert_eq!(playlists.len(), 4);
}

#[tokio::test]
async fn test_default_playlists_not_editable_or_deletable() {
    let store = CollectionStore::new(MemoryStorage::default());
    store.ensure_default_playlists().await.unwrap();

    let mut renamed = store.load_playlists().await.unwrap().remove(0);
    renamed.name = "My Action".to_string();
    let result = store.save_playlist(renamed).await;
    assert!(matches!(result, Err(StoreError::ValidationFailed(_))));

    let result = store.delete_playlist("default-action").await;
    assert!(matches!(result, Err(StoreError::ValidationFailed(_))));

    let playlists = store.load_playlists().await.unwrap();
    assert_eq!(playlists.len(), 4);
    assert_eq!(playlists[0].name, "Action Essentials");
}

#[tokio::test]
async fn test_playlist_membership() {
    let store = CollectionStore::new(MemoryStorage::default());
    store.ensure_default_playlists().await.unwrap();

    let item = create_test_item("m10", "Inception", MediaType::Movie, "Action");
    let playlist = store
        .add_to_playlist("default-action", item.clone())
        .await
        .unwrap();
    assert_eq!(playlist.items.len(), 1);
    assert!(playlist.updated_at.is_some());

    // The second add signals membership and leaves the playlist unchanged
    let result = store.add_to_playlist("default-action", item).await;
    assert!(matches!(result, Err(StoreError::AlreadyMember)));

    let playlists = store.load_playlists().await.unwrap();
    let action = playlists.iter().find(|p| p.id == "default-action").unwrap();
    assert_eq!(action.items.len(), 1);
}

#[tokio::test]
async fn test_remove_from_playlist() {
    let store = CollectionStore::new(MemoryStorage::default());
    store.ensure_default_playlists().await.unwrap();

    let item = create_test_item("m10", "Inception", MediaType::Movie, "Action");
    store.add_to_playlist("default-action", item).await.unwrap();

    let playlist = store
        .remove_from_playlist("default-action", "m10")
        .await
        .unwrap();
    assert!(playlist.items.is_empty());

    // Removing an absent item is a no-op, not an error
    let playlist = store
        .remove_from_playlist("default-action", "m10")
        .await
        .unwrap();
    assert!(playlist.items.is_empty());
}

#[tokio::test]
async fn test_user_playlist_crud() {
    let store = CollectionStore::new(MemoryStorage::default());
    store.ensure_default_playlists().await.unwrap();

    let playlist = create_test_playlist("playlist-1700000000000", "Weekend Marathon");
    let playlists = store.save_playlist(playlist.clone()).await.unwrap();
    // New playlists land in front of the defaults
    assert_eq!(playlists.len(), 5);
    assert_eq!(playlists[0].id, "playlist-1700000000000");

    let mut edited = playlist;
    edited.name = "Weeknight Marathon".to_string();
    let playlists = store.save_playlist(edited).await.unwrap();
    assert_eq!(playlists.len(), 5);
    assert_eq!(playlists[0].name, "Weeknight Marathon");

    let playlists = store.delete_playlist("playlist-1700000000000").await.unwrap();
    assert_eq!(playlists.len(), 4);
}

#[tokio::test]
async fn test_playlist_validation() {
    let store = CollectionStore::new(MemoryStorage::default());

    let mut blank = create_test_playlist("playlist-1", "  ");
    let result = store.save_playlist(blank.clone()).await;
    assert!(matches!(result, Err(StoreError::ValidationFailed(_))));

    blank.name = "x".repeat(51);
    let result = store.save_playlist(blank.clone()).await;
    assert!(matches!(result, Err(StoreError::ValidationFailed(_))));

    blank.name = "Fine".to_string();
    blank.description = "x".repeat(151);
    let result = store.save_playlist(blank.clone()).await;
    assert!(matches!(result, Err(StoreError::ValidationFailed(_))));

    blank.description = String::new();
    blank.icon = "x".to_string();
    let result = store.save_playlist(blank).await;
    assert!(matches!(result, Err(StoreError::ValidationFailed(_))));

    // Nothing reached storage
    let playlists = store.load_playlists().await.unwrap();
    assert!(playlists.is_empty());
}

#[tokio::test]
async fn test_preferences_round_trip() {
    let store = CollectionStore::new(MemoryStorage::default());

    // The singleton starts out absent
    assert!(store.load_preferences().await.unwrap().is_none());

    let preferences = Preferences {
        user_name: "Alex".to_string(),
        genres: vec!["Sci-Fi".to_string(), "Drama".to_string()],
        min_rating: Some(7.0),
    };
    store.save_preferences(preferences).await.unwrap();

    let loaded = store.load_preferences().await.unwrap().unwrap();
    assert_eq!(loaded.user_name, "Alex");
    assert_eq!(loaded.genres, vec!["Sci-Fi", "Drama"]);
    assert_eq!(loaded.min_rating, Some(7.0));

    // Saving replaces the record wholesale
    let replacement = Preferences {
        user_name: "Sam".to_string(),
        genres: Vec::new(),
        min_rating: None,
    };
    store.save_preferences(replacement).await.unwrap();

    let loaded = store.load_preferences().await.unwrap().unwrap();
    assert_eq!(loaded.user_name, "Sam");
    assert!(loaded.genres.is_empty());
    assert_eq!(loaded.min_rating, None);
}

#[tokio::test]
async fn test_preferences_validation() {
    let store = CollectionStore::new(MemoryStorage::default());

    let blank_name = Preferences {
        user_name: "   ".to_string(),
        genres: Vec::new(),
        min_rating: None,
    };
    let result = store.save_preferences(blank_name).await;
    assert!(matches!(result, Err(StoreError::ValidationFailed(_))));

    let unknown_genre = Preferences {
        user_name: "Alex".to_string(),
        genres: vec!["Polka".to_string()],
        min_rating: None,
    };
    let result = store.save_preferences(unknown_genre).await;
    assert!(matches!(result, Err(StoreError::ValidationFailed(_))));

    let out_of_range = Preferences {
        user_name: "Alex".to_string(),
        genres: Vec::new(),
        min_rating: Some(11.0),
    };
    let result = store.save_preferences(out_of_range).await;
    assert!(matches!(result, Err(StoreError::ValidationFailed(_))));

    assert!(store.load_preferences().await.unwrap().is_none());
}

#[tokio::test]
async fn test_storage_unavailable_on_read() {
    let store = CollectionStore::new(FailingStorage);

    let result = store.load_favorites().await;
    assert!(matches!(result, Err(StoreError::StorageUnavailable(_))));
}

#[tokio::test]
async fn test_write_failure_reported() {
    let store = CollectionStore::new(ReadOnlyStorage::default());

    let result = store
        .add_favorite(create_test_item("m3", "The Matrix", MediaType::Movie, "Sci-Fi"))
        .await;
    assert!(matches!(result, Err(StoreError::StorageWriteFailed(_))));
}

#[tokio::test]
async fn test_corrupt_blob_rejected() {
    let storage = MemoryStorage::default();
    storage.put_raw_blob("favorites", "{ not json ]");
    let store = CollectionStore::new(storage.clone());

    let result = store.load_favorites().await;
    assert!(matches!(result, Err(StoreError::CorruptBlob { .. })));

    // A blob of the wrong shape is rejected too
    storage.put_raw_blob("favorites", "{\"items\": 7}");
    let result = store.load_favorites().await;
    assert!(matches!(result, Err(StoreError::CorruptBlob { .. })));
}

#[test]
fn test_upsert_by_id_pure() {
    let records = vec![
        create_test_review("a", "A", 3, "2024-01-01T00:00:00+00:00"),
        create_test_review("b", "B", 4, "2024-01-02T00:00:00+00:00"),
    ];

    // Unknown id prepends
    let records = upsert_by_id(
        records,
        create_test_review("c", "C", 5, "2024-01-03T00:00:00+00:00"),
        |r| &r.id,
    );
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].id, "c");

    // Known id replaces in place
    let records = upsert_by_id(
        records,
        create_test_review("b", "B", 1, "2024-01-04T00:00:00+00:00"),
        |r| &r.id,
    );
    assert_eq!(records.len(), 3);
    assert_eq!(records[2].id, "b");
    assert_eq!(records[2].rating, 1);
}

#[test]
fn test_remove_by_id_pure() {
    let records = vec![
        create_test_review("a", "A", 3, "2024-01-01T00:00:00+00:00"),
        create_test_review("b", "B", 4, "2024-01-02T00:00:00+00:00"),
    ];

    let records = remove_by_id(records, "a", |r| &r.id);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "b");

    // Removing an absent id is a no-op
    let records = remove_by_id(records, "zzz", |r| &r.id);
    assert_eq!(records.len(), 1);
}

#[test]
fn test_toggle_membership_pure() {
    let mut playlist = create_test_playlist("playlist-1", "Mixed");
    let item = create_test_item("m10", "Inception", MediaType::Movie, "Action");

    assert!(toggle_membership(&mut playlist, item.clone()).is_ok());
    assert_eq!(playlist.items.len(), 1);

    let result = toggle_membership(&mut playlist, item);
    assert!(matches!(result, Err(StoreError::AlreadyMember)));
    assert_eq!(playlist.items.len(), 1);
}
