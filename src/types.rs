use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaType {
    #[serde(rename = "Movie")]
    Movie,
    #[serde(rename = "Series")]
    Series,
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Movie => write!(f, "Movie"),
            MediaType::Series => write!(f, "Series"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub genre: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seasons: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episodes: Option<u32>,
}

#[derive(Tabled)]
pub struct CatalogTableRow {
    pub id: String,
    pub title: String,
    pub kind: String,
    pub genre: String,
    pub rating: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub item_title: String,
    pub item_type: MediaType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_poster: Option<String>,
    pub item_genre: String,
    pub rating: u8,
    pub comment: String,
    pub date: String,
}

#[derive(Tabled)]
pub struct ReviewTableRow {
    pub title: String,
    pub stars: String,
    pub date: String,
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub is_default: bool,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub id: String,
    pub icon: String,
    pub name: String,
    pub items: usize,
    pub description: String,
}

// Icon choices offered when creating a playlist; stored playlists must
// carry one of these glyphs.
pub const ICON_PALETTE: [&str; 18] = [
    "🎬", "🍿", "🎥", "📺", "🎭", "🎪", "🔥", "❤️", "⭐", "🌟", "💫", "✨", "😂", "😱", "🚀", "👻",
    "🦸", "🧙",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub user_name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f32>,
}

// Loosely-typed TMDB payload covering both movie and TV entries; the
// normalizers in `tmdb` pick the fields that apply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbEntry {
    pub id: u64,
    pub title: Option<String>,
    pub name: Option<String>,
    pub original_name: Option<String>,
    pub overview: Option<String>,
    pub vote_average: Option<f32>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    pub runtime: Option<u32>,
    pub number_of_seasons: Option<u32>,
    pub number_of_episodes: Option<u32>,
    pub genre_ids: Option<Vec<u64>>,
    pub genres: Option<Vec<TmdbGenre>>,
    pub media_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbGenre {
    pub id: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbPageResponse {
    pub results: Vec<TmdbEntry>,
}
