use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use cineshelf::{cli, config, error, management::CollectionStore, storage::FileStorage, utils, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Browse the movie and TV catalog
    Browse(BrowseOptions),

    /// Handle favorite movies and shows
    Favorites(FavoritesOptions),

    /// Handle star reviews
    Review(ReviewOptions),

    /// Handle playlists
    Playlist(PlaylistOptions),

    /// Handle profile preferences
    Prefs(PrefsOptions),

    /// Aggregate stats over favorites and reviews
    Stats,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct BrowseOptions {
    /// Search by title, genre or description (at least 3 characters for remote search)
    #[clap(long)]
    pub search: Option<String>,

    /// Browse the TMDB catalog instead of the built-in one
    #[clap(long)]
    pub remote: bool,

    /// Result page for remote browsing
    #[clap(long, default_value_t = 1)]
    pub page: u32,

    /// Restrict results to one kind
    #[clap(long, value_parser = ["movie", "tv"])]
    pub kind: Option<String>,
}

#[derive(Parser, Debug, Clone)]
#[command(
    about = "Handle favorite movies and shows",
    args_conflicts_with_subcommands = true // disallow mixing list output with subcommands
)]
pub struct FavoritesOptions {
    /// Subcommands under `favorites` (e.g., `add`)
    #[command(subcommand)]
    pub command: Option<FavoritesSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum FavoritesSubcommand {
    /// Add an item to favorites
    Add(ItemIdOption),

    /// Remove an item from favorites
    Remove(ItemIdOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ItemIdOption {
    /// Catalog item id (e.g., m3, movie-603, tv-66732)
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
#[command(
    about = "Handle star reviews",
    args_conflicts_with_subcommands = true // disallow mixing --sort with subcommands
)]
pub struct ReviewOptions {
    /// Sort the listing by `date` or `rating` (both newest/highest first)
    #[clap(long, value_parser = ["date", "rating"])]
    pub sort: Option<String>,

    /// Subcommands under `review` (e.g., `set`)
    #[command(subcommand)]
    pub command: Option<ReviewSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ReviewSubcommand {
    /// Create or update the review for an item
    Set(ReviewSetOpts),

    /// Delete the review for an item
    Delete(ItemIdOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ReviewSetOpts {
    /// Catalog item id (e.g., m3, movie-603, tv-66732)
    pub id: String,

    /// Star rating from 1 to 5
    #[clap(long)]
    pub rating: u8,

    /// Optional comment (up to 500 characters)
    #[clap(long)]
    pub comment: Option<String>,
}

#[derive(Parser, Debug, Clone)]
#[command(
    about = "Handle playlists",
    args_conflicts_with_subcommands = true
)]
pub struct PlaylistOptions {
    /// Subcommands under `playlist` (e.g., `create`)
    #[command(subcommand)]
    pub command: Option<PlaylistSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum PlaylistSubcommand {
    /// Create a new playlist
    Create(PlaylistCreateOpts),

    /// Edit an existing playlist
    Edit(PlaylistEditOpts),

    /// Delete a playlist
    Delete(PlaylistIdOption),

    /// Show a playlist and its items
    Show(PlaylistIdOption),

    /// Add a catalog item to a playlist
    Add(PlaylistItemOpts),

    /// Remove an item from a playlist
    Remove(PlaylistItemOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistCreateOpts {
    /// Playlist name (1-50 characters)
    #[clap(long)]
    pub name: String,

    /// Optional description (up to 150 characters)
    #[clap(long)]
    pub description: Option<String>,

    /// Icon glyph from the offered palette
    #[clap(long)]
    pub icon: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistEditOpts {
    /// Playlist id
    pub id: String,

    /// New playlist name (1-50 characters)
    #[clap(long)]
    pub name: Option<String>,

    /// New description (up to 150 characters)
    #[clap(long)]
    pub description: Option<String>,

    /// New icon glyph from the offered palette
    #[clap(long)]
    pub icon: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistIdOption {
    /// Playlist id
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistItemOpts {
    /// Playlist id
    pub playlist: String,

    /// Catalog item id (e.g., m3, movie-603, tv-66732)
    pub item: String,
}

#[derive(Parser, Debug, Clone)]
#[command(
    about = "Handle profile preferences",
    args_conflicts_with_subcommands = true
)]
pub struct PrefsOptions {
    /// Subcommands under `prefs` (e.g., `set`)
    #[command(subcommand)]
    pub command: Option<PrefsSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum PrefsSubcommand {
    /// Save profile preferences (replaces the previous ones)
    Set(PrefsSetOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct PrefsSetOpts {
    /// Profile name
    #[clap(long)]
    pub name: String,

    /// Preferred genres, comma-separated (e.g., "sci-fi,drama" or "all")
    #[clap(long = "genres", value_parser = utils::parse_genres)]
    pub genres: Option<utils::GenreSet>,

    /// Minimum rating threshold (0-10)
    #[clap(long)]
    pub min_rating: Option<f32>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    let store = CollectionStore::new(FileStorage::new());
    // One-time seeding of the system playlists; idempotent on every
    // later start.
    if let Err(e) = store.ensure_default_playlists().await {
        warning!("Could not seed default playlists. Err: {}", e);
    }

    match cli.command {
        Command::Browse(opt) => cli::browse(opt.search, opt.remote, opt.page, opt.kind).await,

        Command::Favorites(opt) => match opt.command {
            Some(FavoritesSubcommand::Add(a)) => cli::add_favorite(&store, &a.id).await,
            Some(FavoritesSubcommand::Remove(r)) => cli::remove_favorite(&store, &r.id).await,
            None => cli::list_favorites(&store).await,
        },

        Command::Review(opt) => match opt.command {
            Some(ReviewSubcommand::Set(s)) => {
                cli::set_review(&store, &s.id, s.rating, s.comment).await
            }
            Some(ReviewSubcommand::Delete(d)) => cli::delete_review(&store, &d.id).await,
            None => cli::list_reviews(&store, opt.sort).await,
        },

        Command::Playlist(opt) => match opt.command {
            Some(PlaylistSubcommand::Create(c)) => {
                cli::create_playlist(&store, c.name, c.description, c.icon).await
            }
            Some(PlaylistSubcommand::Edit(e)) => {
                cli::edit_playlist(&store, &e.id, e.name, e.description, e.icon).await
            }
            Some(PlaylistSubcommand::Delete(d)) => cli::delete_playlist(&store, &d.id).await,
            Some(PlaylistSubcommand::Show(s)) => cli::show_playlist(&store, &s.id).await,
            Some(PlaylistSubcommand::Add(a)) => {
                cli::add_to_playlist(&store, &a.playlist, &a.item).await
            }
            Some(PlaylistSubcommand::Remove(r)) => {
                cli::remove_from_playlist(&store, &r.playlist, &r.item).await
            }
            None => cli::list_playlists(&store).await,
        },

        Command::Prefs(opt) => match opt.command {
            Some(PrefsSubcommand::Set(s)) => {
                cli::set_preferences(&store, s.name, s.genres, s.min_rating).await
            }
            None => cli::show_preferences(&store).await,
        },

        Command::Stats => cli::stats(&store).await,

        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
