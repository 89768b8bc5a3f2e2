use crate::{
    info,
    management::CollectionStore,
    stats::{favorite_stats, review_stats},
    storage::FileStorage,
    warning,
};

/// Displays the aggregate view over favorites and reviews: counts by
/// kind, the most favorited genre, the estimated total watch time and
/// the average review rating.
pub async fn stats(store: &CollectionStore<FileStorage>) {
    let favorites = match store.load_favorites().await {
        Ok(favorites) => favorites,
        Err(e) => {
            warning!("Could not read favorites, counting none. Err: {}", e);
            Vec::new()
        }
    };
    let reviews = match store.load_reviews().await {
        Ok(reviews) => reviews,
        Err(e) => {
            warning!("Could not read reviews, counting none. Err: {}", e);
            Vec::new()
        }
    };

    let favorite_stats = favorite_stats(&favorites);
    let review_stats = review_stats(&reviews);

    info!(
        "Favorites: {} ({} movies, {} series)",
        favorite_stats.total, favorite_stats.movies, favorite_stats.series
    );
    if let Some(genre) = &favorite_stats.favorite_genre {
        info!("Favorite genre: {}", genre);
    }
    info!(
        "Estimated watch time: {} minutes (~{} hours)",
        favorite_stats.total_minutes,
        favorite_stats.total_minutes / 60
    );
    info!(
        "Reviews: {} ({} movies, {} series)",
        review_stats.count, review_stats.movies, review_stats.series
    );
    if review_stats.count > 0 {
        info!("Average rating: {:.1}/5", review_stats.average);
    }
}
