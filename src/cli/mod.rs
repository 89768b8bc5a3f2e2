//! # CLI Module
//!
//! This module provides the command-line interface layer for Cineshelf, a
//! local catalog for movies and TV shows. It implements all user-facing CLI
//! commands and coordinates between the collection store, the metadata
//! client, and user interaction components.
//!
//! ## Overview
//!
//! The CLI module is the primary interface between users and the
//! application's functionality. It provides commands for:
//!
//! - **Catalog Browsing**: Built-in mock catalog and remote TMDB data
//! - **Favorites**: Marking and unmarking items as favorites
//! - **Reviews**: Writing, listing and deleting star reviews
//! - **Playlists**: Creating, editing and filling playlists
//! - **Preferences**: Profile name, preferred genres and rating threshold
//! - **Statistics**: Aggregate views over favorites and reviews
//!
//! ## Architecture Design
//!
//! The CLI module follows a layered architecture approach:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (Collection Store)
//!     ↓
//! Storage Layer (Key-Value Blobs)
//! ```
//!
//! Remote browsing additionally goes through the TMDB integration layer,
//! which hands back fully normalized items; the store itself never talks
//! to the network.
//!
//! ## Data Flow Patterns
//!
//! ### Mutating Operations
//! 1. **Item Resolution**: Resolve the target id to a full item snapshot
//! 2. **Store Operation**: One read-modify-write round trip per command
//! 3. **User Feedback**: Success confirmation or a clear failure message
//!
//! ### Query Operations
//! 1. **Collection Loading**: Load the requested collection from storage
//! 2. **Data Processing**: Filter, sort and format for display
//! 3. **Output Generation**: Formatted tables or information lines
//!
//! ## Error Handling Philosophy
//!
//! - **Expected conditions are not errors**: favoriting a duplicate or
//!   re-adding a playlist member prints a warning and exits cleanly
//! - **Reads degrade gracefully**: an unavailable storage medium falls
//!   back to the empty state with a warning
//! - **Writes never lie**: a failed save is reported as such; the command
//!   does not claim success for unconfirmed state
//!
//! ## Dependencies
//!
//! This module depends on several core application components:
//! - [`crate::management`] - Collection store and persistence
//! - [`crate::tmdb`] - Metadata API integration
//! - [`crate::stats`] - Derived statistics
//! - [`crate::types`] - Data structures and type definitions
//! - [`crate::utils`] - Item resolution and display helpers

mod browse;
mod favorites;
mod playlists;
mod prefs;
mod reviews;
mod stats;

pub use browse::browse;
pub use favorites::add_favorite;
pub use favorites::list_favorites;
pub use favorites::remove_favorite;
pub use playlists::add_to_playlist;
pub use playlists::create_playlist;
pub use playlists::delete_playlist;
pub use playlists::edit_playlist;
pub use playlists::list_playlists;
pub use playlists::remove_from_playlist;
pub use playlists::show_playlist;
pub use prefs::set_preferences;
pub use prefs::show_preferences;
pub use reviews::delete_review;
pub use reviews::list_reviews;
pub use reviews::set_review;
pub use stats::stats;
