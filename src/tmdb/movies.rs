use crate::{
    config,
    types::{Item, TmdbEntry, TmdbPageResponse},
};

use super::{get_with_retry, movie_item};

/// Fetches a page of popular movies, normalized into items.
pub async fn popular(page: u32) -> Result<Vec<Item>, reqwest::Error> {
    let api_url = format!(
        "{uri}/movie/popular?api_key={key}&page={page}",
        uri = config::tmdb_api_url(),
        key = config::tmdb_api_key(),
        page = page
    );

    let response = get_with_retry(&api_url).await?;
    let res = response.json::<TmdbPageResponse>().await?;

    Ok(res.results.iter().map(movie_item).collect())
}

/// Searches movies by title. Search terms shorter than 3 characters
/// return an empty list without touching the network.
pub async fn search(query: &str) -> Result<Vec<Item>, reqwest::Error> {
    if query.trim().chars().count() < 3 {
        return Ok(Vec::new());
    }

    let api_url = format!(
        "{uri}/search/movie?api_key={key}&query={query}&page=1",
        uri = config::tmdb_api_url(),
        key = config::tmdb_api_key(),
        query = urlencoding::encode(query.trim())
    );

    let response = get_with_retry(&api_url).await?;
    let res = response.json::<TmdbPageResponse>().await?;

    Ok(res.results.iter().map(movie_item).collect())
}

/// Fetches full details for one movie by its prefixed id (`movie-603`).
pub async fn details(id: &str) -> Result<Item, reqwest::Error> {
    let numeric_id = id.trim_start_matches("movie-");
    let api_url = format!(
        "{uri}/movie/{id}?api_key={key}",
        uri = config::tmdb_api_url(),
        id = numeric_id,
        key = config::tmdb_api_key()
    );

    let response = get_with_retry(&api_url).await?;
    let entry = response.json::<TmdbEntry>().await?;

    Ok(movie_item(&entry))
}
