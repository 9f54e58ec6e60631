//! Video Player - in-memory video playback and curation
//!
//! Tracks a single playback cursor over a fixed catalog of videos,
//! named playlists over that catalog, and moderation flags that keep
//! videos out of playback, search and playlists.

pub mod error;
pub mod library;
pub mod model;
pub mod playback;
pub mod player;
pub mod playlists;
pub mod shell;

pub use player::VideoPlayer;
pub use shell::{Shell, ShellConfig};
