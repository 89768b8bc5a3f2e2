use crate::{
    config,
    types::{Item, TmdbEntry, TmdbPageResponse},
};

use super::{get_with_retry, tv_item};

/// Fetches a page of popular TV series, normalized into items.
pub async fn popular(page: u32) -> Result<Vec<Item>, reqwest::Error> {
    let api_url = format!(
        "{uri}/tv/popular?api_key={key}&page={page}",
        uri = config::tmdb_api_url(),
        key = config::tmdb_api_key(),
        page = page
    );

    let response = get_with_retry(&api_url).await?;
    let res = response.json::<TmdbPageResponse>().await?;

    Ok(res.results.iter().map(tv_item).collect())
}

/// Searches TV series by name. Search terms shorter than 3 characters
/// return an empty list without touching the network.
pub async fn search(query: &str) -> Result<Vec<Item>, reqwest::Error> {
    if query.trim().chars().count() < 3 {
        return Ok(Vec::new());
    }

    let api_url = format!(
        "{uri}/search/tv?api_key={key}&query={query}&page=1",
        uri = config::tmdb_api_url(),
        key = config::tmdb_api_key(),
        query = urlencoding::encode(query.trim())
    );

    let response = get_with_retry(&api_url).await?;
    let res = response.json::<TmdbPageResponse>().await?;

    Ok(res.results.iter().map(tv_item).collect())
}

/// Fetches full details for one series by its prefixed id (`tv-66732`).
pub async fn details(id: &str) -> Result<Item, reqwest::Error> {
    let numeric_id = id.trim_start_matches("tv-");
    let api_url = format!(
        "{uri}/tv/{id}?api_key={key}",
        uri = config::tmdb_api_url(),
        id = numeric_id,
        key = config::tmdb_api_key()
    );

    let response = get_with_retry(&api_url).await?;
    let entry = response.json::<TmdbEntry>().await?;

    Ok(tv_item(&entry))
}
