use crate::{
    error, info,
    management::{CollectionStore, StoreError},
    storage::FileStorage,
    success,
    types::Preferences,
    utils::GenreSet,
    warning,
};

pub async fn show_preferences(store: &CollectionStore<FileStorage>) {
    let preferences = match store.load_preferences().await {
        Ok(preferences) => preferences,
        Err(e) => {
            warning!("Could not read preferences. Err: {}", e);
            return;
        }
    };

    let Some(preferences) = preferences else {
        info!("No preferences saved yet. Set them with cineshelf prefs set.");
        return;
    };

    info!("Name: {}", preferences.user_name);
    info!(
        "Preferred genres: {}",
        if preferences.genres.is_empty() {
            "none selected".to_string()
        } else {
            preferences.genres.join(", ")
        }
    );
    if let Some(min_rating) = preferences.min_rating {
        info!("Minimum rating: {}/10", min_rating);
    }
}

pub async fn set_preferences(
    store: &CollectionStore<FileStorage>,
    name: String,
    genres: Option<GenreSet>,
    min_rating: Option<f32>,
) {
    let preferences = Preferences {
        user_name: name.trim().to_string(),
        genres: genres.map(|g| g.names()).unwrap_or_default(),
        min_rating,
    };

    match store.save_preferences(preferences).await {
        Ok(saved) => success!("Preferences saved for {}.", saved.user_name),
        Err(StoreError::ValidationFailed(reason)) => warning!("{}", reason),
        Err(e) => error!("Could not save preferences. Err: {}", e),
    }
}
