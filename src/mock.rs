use crate::types::{Item, MediaType};

/// The built-in catalog used when browsing without the metadata API.
/// Ten well-known titles with ids `m1`..`m10`.
pub fn catalog() -> Vec<Item> {
    [
        (
            "m1",
            "Stranger Things",
            MediaType::Series,
            "Sci-Fi",
            "Teenagers face supernatural mysteries in a small American town in the 80s.",
        ),
        (
            "m2",
            "Oppenheimer",
            MediaType::Movie,
            "Drama",
            "The life and dilemmas of physicist J. Robert Oppenheimer during the development of the atomic bomb.",
        ),
        (
            "m3",
            "The Matrix",
            MediaType::Movie,
            "Sci-Fi",
            "A hacker discovers the truth about reality and his role in the war against its controllers.",
        ),
        (
            "m4",
            "The Crown",
            MediaType::Series,
            "Drama",
            "Historical drama about the reign of Queen Elizabeth II and the British royal family.",
        ),
        (
            "m5",
            "The Office",
            MediaType::Series,
            "Comedy",
            "Mockumentary about the hilarious everyday life of office employees.",
        ),
        (
            "m6",
            "Parasite",
            MediaType::Movie,
            "Thriller",
            "Social tension and unexpected twists as a poor family infiltrates a wealthy household.",
        ),
        (
            "m7",
            "Breaking Bad",
            MediaType::Series,
            "Crime",
            "A chemistry teacher with cancer turns into a methamphetamine manufacturer.",
        ),
        (
            "m8",
            "Amélie",
            MediaType::Movie,
            "Romance",
            "A dreamy, creative young woman decides to change the lives of the people around her.",
        ),
        (
            "m9",
            "Dark",
            MediaType::Series,
            "Sci-Fi",
            "Mysteries and time travel connect four families in a small German town.",
        ),
        (
            "m10",
            "Inception",
            MediaType::Movie,
            "Action",
            "A thief specialized in extracting secrets from the subconscious through dreams.",
        ),
    ]
    .into_iter()
    .map(|(id, title, media_type, genre, description)| Item {
        id: id.to_string(),
        title: title.to_string(),
        media_type,
        genre: genre.to_string(),
        description: description.to_string(),
        rating: None,
        poster: None,
        image: None,
        release_date: None,
        runtime: None,
        seasons: None,
        episodes: None,
    })
    .collect()
}
