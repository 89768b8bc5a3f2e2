use crate::{
    config,
    types::{Item, TmdbPageResponse},
};

use super::{get_with_retry, movie_item, tv_item};

/// Searches movies and series in one request. Entries that are neither
/// movies nor TV (people, collections) are dropped; the rest come back
/// normalized in API relevance order.
pub async fn multi(query: &str) -> Result<Vec<Item>, reqwest::Error> {
    if query.trim().chars().count() < 3 {
        return Ok(Vec::new());
    }

    let api_url = format!(
        "{uri}/search/multi?api_key={key}&query={query}&page=1",
        uri = config::tmdb_api_url(),
        key = config::tmdb_api_key(),
        query = urlencoding::encode(query.trim())
    );

    let response = get_with_retry(&api_url).await?;
    let res = response.json::<TmdbPageResponse>().await?;

    Ok(res
        .results
        .iter()
        .filter_map(|entry| match entry.media_type.as_deref() {
            Some("movie") => Some(movie_item(entry)),
            Some("tv") => Some(tv_item(entry)),
            _ => None,
        })
        .collect())
}
