use crate::types::{Item, MediaType, Review};

// Rough watch-time heuristic: a movie counts as two hours, a series as
// eight 45-minute episodes. Deliberate approximation, not derived from
// the items' actual runtimes.
const MOVIE_MINUTES: u64 = 120;
const SERIES_EPISODE_MINUTES: u64 = 45;
const SERIES_EPISODE_COUNT: u64 = 8;

#[derive(Debug, Clone)]
pub struct FavoriteStats {
    pub total: usize,
    pub movies: usize,
    pub series: usize,
    pub favorite_genre: Option<String>,
    pub total_minutes: u64,
}

#[derive(Debug, Clone)]
pub struct ReviewStats {
    pub count: usize,
    pub average: f32,
    pub movies: usize,
    pub series: usize,
}

/// Aggregates the favorites collection into counts, the most favorited
/// genre and the estimated total watch time.
pub fn favorite_stats(favorites: &[Item]) -> FavoriteStats {
    let movies = favorites
        .iter()
        .filter(|i| i.media_type == MediaType::Movie)
        .count();
    let series = favorites.len() - movies;

    // Occurrence counting keeps first-encounter order so ties resolve to
    // the genre favorited first, not alphabetically.
    let mut genre_counts: Vec<(&str, usize)> = Vec::new();
    for item in favorites {
        match genre_counts
            .iter_mut()
            .find(|(genre, _)| *genre == item.genre.as_str())
        {
            Some((_, count)) => *count += 1,
            None => genre_counts.push((item.genre.as_str(), 1)),
        }
    }

    let mut favorite_genre: Option<(&str, usize)> = None;
    for &(genre, count) in &genre_counts {
        match favorite_genre {
            Some((_, best)) if count <= best => {}
            _ => favorite_genre = Some((genre, count)),
        }
    }

    FavoriteStats {
        total: favorites.len(),
        movies,
        series,
        favorite_genre: favorite_genre.map(|(genre, _)| genre.to_string()),
        total_minutes: movies as u64 * MOVIE_MINUTES
            + series as u64 * SERIES_EPISODE_MINUTES * SERIES_EPISODE_COUNT,
    }
}

/// Aggregates the reviews collection; the average is 0 when there are no
/// reviews rather than a division by zero.
pub fn review_stats(reviews: &[Review]) -> ReviewStats {
    let movies = reviews
        .iter()
        .filter(|r| r.item_type == MediaType::Movie)
        .count();
    let series = reviews.len() - movies;

    let average = if reviews.is_empty() {
        0.0
    } else {
        reviews.iter().map(|r| r.rating as f32).sum::<f32>() / reviews.len() as f32
    };

    ReviewStats {
        count: reviews.len(),
        average,
        movies,
        series,
    }
}

/// Newest review first. Sorts a copy; the stored order is never touched
/// by a display request.
pub fn sorted_by_date(reviews: &[Review]) -> Vec<Review> {
    let mut sorted = reviews.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// Highest rating first; stable, so equal ratings keep stored order.
pub fn sorted_by_rating(reviews: &[Review]) -> Vec<Review> {
    let mut sorted = reviews.to_vec();
    sorted.sort_by(|a, b| b.rating.cmp(&a.rating));
    sorted
}
