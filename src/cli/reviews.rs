use chrono::Utc;
use tabled::Table;

use crate::{
    error, info,
    management::{CollectionStore, StoreError},
    stats,
    storage::FileStorage,
    success,
    types::{Review, ReviewTableRow},
    utils, warning,
};

/// Creates or updates the review for one item. There is at most one
/// review per item; re-reviewing replaces the previous rating, comment
/// and timestamp.
pub async fn set_review(
    store: &CollectionStore<FileStorage>,
    id: &str,
    rating: u8,
    comment: Option<String>,
) {
    let item = match utils::resolve_item(id).await {
        Ok(item) => item,
        Err(e) => {
            warning!("{}", e);
            return;
        }
    };

    let review = Review {
        id: item.id.clone(),
        item_title: item.title.clone(),
        item_type: item.media_type,
        item_poster: item.poster.clone(),
        item_genre: item.genre.clone(),
        rating,
        comment: comment.unwrap_or_default().trim().to_string(),
        date: Utc::now().to_rfc3339(),
    };

    match store.save_review(review).await {
        Ok(_) => success!("Review saved for {}.", item.title),
        Err(StoreError::ValidationFailed(reason)) => warning!("{}", reason),
        Err(e) => error!("Could not save review. Err: {}", e),
    }
}

/// Lists reviews, optionally sorted by date or rating (both descending).
/// Sorting is a display concern; the stored order stays untouched.
pub async fn list_reviews(store: &CollectionStore<FileStorage>, sort: Option<String>) {
    let reviews = match store.load_reviews().await {
        Ok(reviews) => reviews,
        Err(e) => {
            warning!("Could not read reviews, showing an empty list. Err: {}", e);
            Vec::new()
        }
    };

    if reviews.is_empty() {
        info!("You have not reviewed anything yet.");
        return;
    }

    let ordered = match sort.as_deref() {
        Some("date") => stats::sorted_by_date(&reviews),
        Some("rating") => stats::sorted_by_rating(&reviews),
        _ => reviews.clone(),
    };

    let table_rows: Vec<ReviewTableRow> = ordered
        .iter()
        .map(|review| ReviewTableRow {
            title: review.item_title.clone(),
            stars: utils::stars(review.rating),
            date: utils::short_date(&review.date),
            comment: utils::truncate(&review.comment, 40),
        })
        .collect();
    println!("{}", Table::new(table_rows));
}

pub async fn delete_review(store: &CollectionStore<FileStorage>, id: &str) {
    match store.delete_review(id).await {
        Ok(_) => success!("Review deleted."),
        Err(e) => error!("Could not delete review. Err: {}", e),
    }
}
