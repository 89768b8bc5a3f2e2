mod store;

pub use store::CollectionStore;
pub use store::FAVORITES_KEY;
pub use store::PLAYLISTS_KEY;
pub use store::PREFERENCES_KEY;
pub use store::REVIEWS_KEY;
pub use store::StoreError;
pub use store::default_playlists;
pub use store::remove_by_id;
pub use store::toggle_membership;
pub use store::upsert_by_id;
