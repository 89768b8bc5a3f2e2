use tabled::Table;

use crate::{
    error, info,
    management::{CollectionStore, StoreError},
    storage::FileStorage,
    success,
    types::CatalogTableRow,
    utils, warning,
};

pub async fn list_favorites(store: &CollectionStore<FileStorage>) {
    let favorites = match store.load_favorites().await {
        Ok(favorites) => favorites,
        Err(e) => {
            warning!("Could not read favorites, showing an empty list. Err: {}", e);
            Vec::new()
        }
    };

    if favorites.is_empty() {
        info!("You have no favorites yet.");
        return;
    }

    let table_rows: Vec<CatalogTableRow> = favorites.iter().map(utils::catalog_row).collect();
    println!("{}", Table::new(table_rows));
    info!(
        "{} {}",
        favorites.len(),
        if favorites.len() == 1 {
            "favorite"
        } else {
            "favorites"
        }
    );
}

pub async fn add_favorite(store: &CollectionStore<FileStorage>, id: &str) {
    let item = match utils::resolve_item(id).await {
        Ok(item) => item,
        Err(e) => {
            warning!("{}", e);
            return;
        }
    };

    let title = item.title.clone();
    match store.add_favorite(item).await {
        Ok(_) => success!("{} added to favorites!", title),
        Err(StoreError::DuplicateFavorite) => {
            warning!("{} is already in your favorites!", title)
        }
        Err(e) => error!("Could not add favorite. Err: {}", e),
    }
}

pub async fn remove_favorite(store: &CollectionStore<FileStorage>, id: &str) {
    match store.remove_favorite(id).await {
        Ok(_) => success!("Removed from favorites."),
        Err(e) => error!("Could not remove favorite. Err: {}", e),
    }
}
