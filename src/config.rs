//! Configuration management for the movie & TV catalog CLI.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration including the TMDB API credential, endpoint URLs, and other
//! runtime parameters.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

const DEFAULT_TMDB_API_URL: &str = "https://api.themoviedb.org/3";
const DEFAULT_TMDB_IMAGE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `cineshelf/.env`. This allows users to store
/// configuration securely without hardcoding sensitive values.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/cineshelf/.env`
/// - macOS: `~/Library/Application Support/cineshelf/.env`
/// - Windows: `%LOCALAPPDATA%/cineshelf/.env`
///
/// # Returns
///
/// Returns `Ok(())` whether or not the file exists (commands that never
/// touch the metadata API work without any configuration), or an error
/// string if directory creation fails.
///
/// # Example
///
/// ```
/// use cineshelf::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("cineshelf/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    // Offline commands must keep working without any .env file.
    let _ = dotenv::from_path(path);
    Ok(())
}

/// Returns the TMDB API key used by the metadata client.
///
/// Retrieves the `TMDB_API_KEY` environment variable which contains the
/// API key obtained when registering with TMDB's developer platform. The
/// key is only needed for remote browsing and search; local collections
/// work without it.
///
/// # Panics
///
/// Panics if the `TMDB_API_KEY` environment variable is not set.
///
/// # Example
///
/// ```
/// let api_key = tmdb_api_key(); // e.g., "7b6443e4..."
/// ```
pub fn tmdb_api_key() -> String {
    env::var("TMDB_API_KEY").expect("TMDB_API_KEY must be set")
}

/// Returns the TMDB API base URL.
///
/// Retrieves the `TMDB_API_URL` environment variable, falling back to the
/// public production endpoint when it is not set. Overriding it is mainly
/// useful for pointing the client at a mock server.
///
/// # Example
///
/// ```
/// let api_url = tmdb_api_url(); // e.g., "https://api.themoviedb.org/3"
/// ```
pub fn tmdb_api_url() -> String {
    env::var("TMDB_API_URL").unwrap_or_else(|_| DEFAULT_TMDB_API_URL.to_string())
}

/// Returns the TMDB image base URL used to build poster and backdrop URLs.
///
/// Retrieves the `TMDB_IMAGE_URL` environment variable, falling back to
/// the public w500 image endpoint when it is not set.
///
/// # Example
///
/// ```
/// let image_url = tmdb_image_url(); // e.g., "https://image.tmdb.org/t/p/w500"
/// ```
pub fn tmdb_image_url() -> String {
    env::var("TMDB_IMAGE_URL").unwrap_or_else(|_| DEFAULT_TMDB_IMAGE_URL.to_string())
}
