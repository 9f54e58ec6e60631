//! Data model for the player
//!
//! Videos and playlists, plus the catalog view that answers lookups
//! and searches over the loaded videos.

mod catalog;
mod playlist;
mod video;

pub use catalog::Catalog;
pub use playlist::Playlist;
pub use video::Video;
