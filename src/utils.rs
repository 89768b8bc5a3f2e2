use std::{collections::BTreeSet, fmt};

use chrono::{DateTime, Utc};

use crate::{
    mock, tmdb,
    types::{CatalogTableRow, Item},
};

/// The fixed set of genres a user can select in their preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Genre {
    Action,
    Comedy,
    Drama,
    SciFi,
    Romance,
    Crime,
    Thriller,
    Horror,
    Animation,
}

impl Genre {
    pub const ALL: [Genre; 9] = [
        Genre::Action,
        Genre::Comedy,
        Genre::Drama,
        Genre::SciFi,
        Genre::Romance,
        Genre::Crime,
        Genre::Thriller,
        Genre::Horror,
        Genre::Animation,
    ];
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Genre::Action => "Action",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::SciFi => "Sci-Fi",
            Genre::Romance => "Romance",
            Genre::Crime => "Crime",
            Genre::Thriller => "Thriller",
            Genre::Horror => "Horror",
            Genre::Animation => "Animation",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GenreSet(pub BTreeSet<Genre>);

impl GenreSet {
    pub fn iter(&self) -> impl Iterator<Item = Genre> + '_ {
        self.0.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.iter().map(|g| g.to_string()).collect()
    }
}

impl fmt::Display for GenreSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .iter()
            .map(|g| g.to_string())
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "{}", joined)
    }
}

/// Matches a single genre name case-insensitively; hyphens and spaces are
/// ignored so "sci-fi", "scifi" and "Sci-Fi" all resolve.
pub fn parse_genre(input: &str) -> Option<Genre> {
    let normalized: String = input
        .trim()
        .chars()
        .filter(|c| *c != '-' && *c != '_' && !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();

    match normalized.as_str() {
        "action" => Some(Genre::Action),
        "comedy" => Some(Genre::Comedy),
        "drama" => Some(Genre::Drama),
        "scifi" => Some(Genre::SciFi),
        "romance" => Some(Genre::Romance),
        "crime" => Some(Genre::Crime),
        "thriller" => Some(Genre::Thriller),
        "horror" => Some(Genre::Horror),
        "animation" => Some(Genre::Animation),
        _ => None,
    }
}

/// Parses a comma-separated genre list for the CLI. The keyword `all`
/// selects every genre; duplicates collapse into the set.
pub fn parse_genres(input: &str) -> Result<GenreSet, String> {
    if input.trim().is_empty() {
        return Err("genre list cannot be empty".to_string());
    }

    if input.trim().eq_ignore_ascii_case("all") {
        return Ok(GenreSet(Genre::ALL.into_iter().collect()));
    }

    let mut genres = BTreeSet::new();
    for segment in input.split(',') {
        if segment.trim().is_empty() {
            return Err(format!("empty segment in genre list '{}'", input));
        }
        match parse_genre(segment) {
            Some(genre) => {
                genres.insert(genre);
            }
            None => return Err(format!("invalid value '{}'", segment.trim())),
        }
    }

    Ok(GenreSet(genres))
}

pub fn generate_playlist_id() -> String {
    format!("playlist-{}", Utc::now().timestamp_millis())
}

/// Renders a 1-5 rating as filled and hollow stars.
pub fn stars(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Shortens text for table cells, appending an ellipsis when trimmed.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", cut)
}

/// Builds the table row used by every item listing.
pub fn catalog_row(item: &Item) -> CatalogTableRow {
    CatalogTableRow {
        id: item.id.clone(),
        title: item.title.clone(),
        kind: item.media_type.to_string(),
        genre: item.genre.clone(),
        rating: item
            .rating
            .map(|r| format!("{:.1}", r))
            .unwrap_or_else(|| "-".to_string()),
    }
}

/// Reduces an ISO-8601 timestamp to its date part for display; falls back
/// to the raw string when it does not parse.
pub fn short_date(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(parsed) => parsed.format("%Y-%m-%d").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Resolves a catalog id to a full item: `movie-`/`tv-` ids through the
/// metadata API, anything else through the built-in mock catalog.
pub async fn resolve_item(id: &str) -> Result<Item, String> {
    if id.starts_with("movie-") {
        return tmdb::movies::details(id)
            .await
            .map_err(|e| format!("Failed to fetch movie '{}': {}", id, e));
    }
    if id.starts_with("tv-") {
        return tmdb::tv::details(id)
            .await
            .map_err(|e| format!("Failed to fetch series '{}': {}", id, e));
    }

    mock::catalog()
        .into_iter()
        .find(|item| item.id == id)
        .ok_or_else(|| {
            format!(
                "No catalog item with id '{}'. Run cineshelf browse to list known ids.",
                id
            )
        })
}
