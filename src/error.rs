//! Failure kinds for every player operation
//!
//! The `Display` text of each variant is the reason shown to the user.
//! The shell prefixes it with what was being attempted.

use thiserror::Error;

/// Errors from setting or clearing a video's flag
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlagError {
    #[error("Video does not exist")]
    VideoNotFound,

    #[error("Video is already flagged")]
    AlreadyFlagged,

    #[error("Video is not flagged")]
    NotFlagged,
}

/// Errors from the playback state machine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("Video does not exist")]
    VideoNotFound,

    #[error("Video is currently flagged (reason: {0})")]
    VideoFlagged(String),

    #[error("No video is currently playing")]
    NothingPlaying,

    #[error("Video is not paused")]
    NotPaused,

    /// Every video in the catalog is flagged (or the catalog is empty)
    #[error("No videos available")]
    NoVideosAvailable,
}

/// Errors from playlist registry operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaylistError {
    #[error("A playlist with the same name already exists")]
    AlreadyExists,

    #[error("Playlist does not exist")]
    PlaylistNotFound,

    #[error("Video does not exist")]
    VideoNotFound,

    #[error("Video is currently flagged (reason: {0})")]
    VideoFlagged(String),

    #[error("Video already added")]
    AlreadyInPlaylist,

    #[error("Video is not in playlist")]
    NotInPlaylist,
}

/// Errors from turning an input line into a command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Please enter a valid command, type HELP for a list of available commands.")]
    Unknown(String),

    #[error("Invalid usage of {verb}, expected: {usage}")]
    Usage { verb: &'static str, usage: &'static str },
}
