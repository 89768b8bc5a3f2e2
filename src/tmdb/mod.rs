//! # TMDB Integration Module
//!
//! This module provides the interface to The Movie Database (TMDB) Web API,
//! the external metadata source behind remote browsing and search. It handles
//! all HTTP communication, response normalization and retry behavior, and
//! hands the rest of the application fully normalized [`Item`] values.
//!
//! ## Overview
//!
//! The collection store never talks to TMDB itself: it only ever consumes an
//! already-resolved, normalized list of items. This module is that resolver.
//! Each submodule covers one domain of the API:
//!
//! - [`movies`] - popular movies, movie search, movie details
//! - [`tv`] - popular series, series search, series details
//! - [`search`] - combined movie/series search
//!
//! ## Normalization
//!
//! TMDB distinguishes movies from TV shows with different payload shapes;
//! both are mapped onto the single [`Item`] record:
//!
//! - ids are prefixed (`movie-603`, `tv-66732`) so they stay globally unique
//! - the first genre id is resolved through a fixed 19-entry table; unknown
//!   or missing ids map to `"General"`
//! - a missing overview becomes `"No description available"`
//! - poster and backdrop paths are expanded to full image URLs
//!
//! ## Error Handling
//!
//! Failures propagate to the caller as retryable fetch failures; nothing is
//! cached. The client itself retries 502 Bad Gateway responses and sleeps on
//! 429 rate limits before trying again; other HTTP errors are propagated
//! immediately via `error_for_status`.
//!
//! ## Configuration
//!
//! The API key and the endpoint/image base URLs come from [`crate::config`];
//! only the key is required, the URLs default to the public endpoints.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    types::{Item, MediaType, TmdbEntry},
};

pub mod movies;
pub mod search;
pub mod tv;

/// Resolves a TMDB genre id to a display name. Unknown ids map to
/// "General".
pub fn genre_name(genre_id: u64) -> &'static str {
    match genre_id {
        28 => "Action",
        12 => "Adventure",
        16 => "Animation",
        35 => "Comedy",
        80 => "Crime",
        99 => "Documentary",
        18 => "Drama",
        10751 => "Family",
        14 => "Fantasy",
        36 => "History",
        27 => "Horror",
        10402 => "Music",
        9648 => "Mystery",
        10749 => "Romance",
        878 => "Sci-Fi",
        10770 => "TV",
        53 => "Thriller",
        10752 => "War",
        37 => "Western",
        _ => "General",
    }
}

fn first_genre(entry: &TmdbEntry) -> String {
    if let Some(first) = entry.genre_ids.as_ref().and_then(|ids| ids.first()) {
        return genre_name(*first).to_string();
    }
    // Detail payloads carry resolved genre objects instead of id lists.
    if let Some(first) = entry.genres.as_ref().and_then(|genres| genres.first()) {
        return genre_name(first.id).to_string();
    }
    "General".to_string()
}

fn image_url(path: &Option<String>) -> Option<String> {
    path.as_ref()
        .map(|p| format!("{}{}", config::tmdb_image_url(), p))
}

fn description(entry: &TmdbEntry) -> String {
    entry
        .overview
        .clone()
        .filter(|overview| !overview.is_empty())
        .unwrap_or_else(|| "No description available".to_string())
}

/// Normalizes a TMDB movie payload into an [`Item`].
pub fn movie_item(entry: &TmdbEntry) -> Item {
    Item {
        id: format!("movie-{}", entry.id),
        title: entry
            .title
            .clone()
            .or_else(|| entry.name.clone())
            .unwrap_or_default(),
        media_type: MediaType::Movie,
        genre: first_genre(entry),
        description: description(entry),
        rating: entry.vote_average,
        poster: image_url(&entry.poster_path),
        image: image_url(&entry.backdrop_path),
        release_date: entry.release_date.clone(),
        runtime: entry.runtime,
        seasons: None,
        episodes: None,
    }
}

/// Normalizes a TMDB TV payload into an [`Item`].
pub fn tv_item(entry: &TmdbEntry) -> Item {
    Item {
        id: format!("tv-{}", entry.id),
        title: entry
            .name
            .clone()
            .or_else(|| entry.original_name.clone())
            .unwrap_or_default(),
        media_type: MediaType::Series,
        genre: first_genre(entry),
        description: description(entry),
        rating: entry.vote_average,
        poster: image_url(&entry.poster_path),
        image: image_url(&entry.backdrop_path),
        release_date: entry.first_air_date.clone(),
        runtime: None,
        seasons: entry.number_of_seasons,
        episodes: entry.number_of_episodes,
    }
}

pub(crate) async fn get_with_retry(api_url: &str) -> Result<reqwest::Response, reqwest::Error> {
    loop {
        let client = Client::new();
        let response = client.get(api_url).send().await;

        match response {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => return Ok(valid_response),
                Err(err) => {
                    if let Some(status) = err.status() {
                        if status == StatusCode::TOO_MANY_REQUESTS {
                            sleep(Duration::from_secs(2)).await;
                            continue; // retry
                        }
                        if status == StatusCode::BAD_GATEWAY {
                            sleep(Duration::from_secs(10)).await;
                            continue; // retry
                        }
                    }
                    return Err(err); // propagate other errors
                }
            },
            Err(err) => {
                return Err(err);
            } // network or reqwest error
        }
    }
}
