use chrono::Utc;
use tabled::Table;

use crate::{
    error, info,
    management::{CollectionStore, StoreError},
    storage::FileStorage,
    success,
    types::{CatalogTableRow, Playlist, PlaylistTableRow},
    utils, warning,
};

pub async fn list_playlists(store: &CollectionStore<FileStorage>) {
    let playlists = match store.load_playlists().await {
        Ok(playlists) => playlists,
        Err(e) => {
            warning!("Could not read playlists, showing an empty list. Err: {}", e);
            Vec::new()
        }
    };

    if playlists.is_empty() {
        info!("No playlists yet. Create one with cineshelf playlist create.");
        return;
    }

    let total_items: usize = playlists.iter().map(|p| p.items.len()).sum();

    let table_rows: Vec<PlaylistTableRow> = playlists
        .iter()
        .map(|playlist| PlaylistTableRow {
            id: playlist.id.clone(),
            icon: playlist.icon.clone(),
            name: playlist.name.clone(),
            items: playlist.items.len(),
            description: utils::truncate(&playlist.description, 40),
        })
        .collect();
    println!("{}", Table::new(table_rows));
    info!("{} playlists, {} items", playlists.len(), total_items);
}

pub async fn show_playlist(store: &CollectionStore<FileStorage>, id: &str) {
    let playlists = match store.load_playlists().await {
        Ok(playlists) => playlists,
        Err(e) => {
            warning!("Could not read playlists. Err: {}", e);
            return;
        }
    };

    let Some(playlist) = playlists.iter().find(|p| p.id == id) else {
        warning!("No playlist with id '{}'.", id);
        return;
    };

    info!("{} {}", playlist.icon, playlist.name);
    if !playlist.description.is_empty() {
        info!("{}", playlist.description);
    }

    if playlist.items.is_empty() {
        info!("Playlist is empty. Add items from browse or favorites.");
        return;
    }

    let table_rows: Vec<CatalogTableRow> = playlist.items.iter().map(utils::catalog_row).collect();
    println!("{}", Table::new(table_rows));
}

pub async fn create_playlist(
    store: &CollectionStore<FileStorage>,
    name: String,
    description: Option<String>,
    icon: Option<String>,
) {
    let now = Utc::now().to_rfc3339();
    let playlist = Playlist {
        id: utils::generate_playlist_id(),
        name: name.trim().to_string(),
        description: description.unwrap_or_default().trim().to_string(),
        icon: icon.unwrap_or_else(|| "🎬".to_string()),
        items: Vec::new(),
        is_default: false,
        created_at: now.clone(),
        updated_at: Some(now),
    };

    let name = playlist.name.clone();
    match store.save_playlist(playlist).await {
        Ok(_) => success!("Playlist {} created!", name),
        Err(StoreError::ValidationFailed(reason)) => warning!("{}", reason),
        Err(e) => error!("Could not save playlist. Err: {}", e),
    }
}

pub async fn edit_playlist(
    store: &CollectionStore<FileStorage>,
    id: &str,
    name: Option<String>,
    description: Option<String>,
    icon: Option<String>,
) {
    let playlists = match store.load_playlists().await {
        Ok(playlists) => playlists,
        Err(e) => {
            warning!("Could not read playlists. Err: {}", e);
            return;
        }
    };

    let Some(mut playlist) = playlists.into_iter().find(|p| p.id == id) else {
        warning!("No playlist with id '{}'.", id);
        return;
    };

    if playlist.is_default {
        warning!("Default playlists cannot be edited!");
        return;
    }

    if let Some(name) = name {
        playlist.name = name.trim().to_string();
    }
    if let Some(description) = description {
        playlist.description = description.trim().to_string();
    }
    if let Some(icon) = icon {
        playlist.icon = icon;
    }
    playlist.updated_at = Some(Utc::now().to_rfc3339());

    let name = playlist.name.clone();
    match store.save_playlist(playlist).await {
        Ok(_) => success!("Playlist {} updated!", name),
        Err(StoreError::ValidationFailed(reason)) => warning!("{}", reason),
        Err(e) => error!("Could not save playlist. Err: {}", e),
    }
}

pub async fn delete_playlist(store: &CollectionStore<FileStorage>, id: &str) {
    match store.delete_playlist(id).await {
        Ok(_) => success!("Playlist deleted."),
        Err(StoreError::ValidationFailed(reason)) => warning!("{}", reason),
        Err(e) => error!("Could not delete playlist. Err: {}", e),
    }
}

pub async fn add_to_playlist(store: &CollectionStore<FileStorage>, playlist_id: &str, item_id: &str) {
    let item = match utils::resolve_item(item_id).await {
        Ok(item) => item,
        Err(e) => {
            warning!("{}", e);
            return;
        }
    };

    let title = item.title.clone();
    match store.add_to_playlist(playlist_id, item).await {
        Ok(playlist) => success!("{} added to {}.", title, playlist.name),
        // Expected condition, not an error: the playlist stays as it was.
        Err(StoreError::AlreadyMember) => warning!("{} is already in this playlist!", title),
        Err(StoreError::ValidationFailed(reason)) => warning!("{}", reason),
        Err(e) => error!("Could not update playlist. Err: {}", e),
    }
}

pub async fn remove_from_playlist(
    store: &CollectionStore<FileStorage>,
    playlist_id: &str,
    item_id: &str,
) {
    match store.remove_from_playlist(playlist_id, item_id).await {
        Ok(playlist) => success!("Item removed from {}.", playlist.name),
        Err(StoreError::ValidationFailed(reason)) => warning!("{}", reason),
        Err(e) => error!("Could not update playlist. Err: {}", e),
    }
}
