use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    info, mock, tmdb,
    types::{CatalogTableRow, Item},
    utils, warning,
};

pub async fn browse(search: Option<String>, remote: bool, page: u32, kind: Option<String>) {
    let items = if remote {
        match fetch_remote(&search, page, &kind).await {
            Ok(items) => items,
            Err(e) => {
                warning!("Failed to fetch catalog data: {}", e);
                return;
            }
        }
    } else {
        let mut items = mock::catalog();
        if let Some(term) = &search {
            let term = term.to_lowercase();
            items.retain(|item| {
                item.title.to_lowercase().contains(&term)
                    || item.genre.to_lowercase().contains(&term)
                    || item.description.to_lowercase().contains(&term)
            });
        }
        if let Some(kind) = &kind {
            let wanted = if kind == "movie" { "Movie" } else { "Series" };
            items.retain(|item| item.media_type.to_string() == wanted);
        }
        items
    };

    if items.is_empty() {
        info!("No catalog items matched.");
        return;
    }

    let table_rows: Vec<CatalogTableRow> = items.iter().map(utils::catalog_row).collect();
    println!("{}", Table::new(table_rows));
}

async fn fetch_remote(
    search: &Option<String>,
    page: u32,
    kind: &Option<String>,
) -> Result<Vec<Item>, reqwest::Error> {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching catalog from TMDB...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = match (search, kind.as_deref()) {
        (Some(query), Some("movie")) => tmdb::movies::search(query).await,
        (Some(query), Some("tv")) => tmdb::tv::search(query).await,
        (Some(query), _) => tmdb::search::multi(query).await,
        (None, Some("movie")) => tmdb::movies::popular(page).await,
        (None, Some("tv")) => tmdb::tv::popular(page).await,
        (None, _) => {
            // The mixed home feed: popular movies followed by popular series.
            match tmdb::movies::popular(page).await {
                Ok(mut items) => tmdb::tv::popular(page).await.map(|series| {
                    items.extend(series);
                    items
                }),
                Err(e) => Err(e),
            }
        }
    };

    pb.finish_and_clear();
    result
}
