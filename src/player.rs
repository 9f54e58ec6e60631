//! The player context: catalog, playback cursor and playlists together

use crate::error::FlagError;
use crate::library::VideoSource;
use crate::model::{Catalog, Video};
use crate::playback::{PlaybackController, RandomSource, StdRandom};
use crate::playlists::PlaylistRegistry;

/// Reason recorded when flagging without one
pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

/// Result of flagging a video
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flagged {
    pub video: Video,

    /// The flagged video was on the cursor and got stopped
    pub stopped: bool,
}

/// Owns everything a single player session mutates
pub struct VideoPlayer<R: RandomSource = StdRandom> {
    pub catalog: Catalog,
    pub playback: PlaybackController<R>,
    pub playlists: PlaylistRegistry,
}

impl<R: RandomSource> VideoPlayer<R> {
    /// Create a player over a snapshot of the given source
    pub fn new<S: VideoSource + ?Sized>(source: &S, random: R) -> Self {
        Self::with_catalog(Catalog::from_source(source), random)
    }

    pub fn with_catalog(catalog: Catalog, random: R) -> Self {
        log::debug!("Player ready with {} videos", catalog.count());
        Self {
            catalog,
            playback: PlaybackController::new(random),
            playlists: PlaylistRegistry::new(),
        }
    }

    /// Flag a video, stopping it first if it is on the cursor
    pub fn flag(&mut self, id: &str, reason: Option<&str>) -> Result<Flagged, FlagError> {
        let video = self.catalog.find(id).ok_or(FlagError::VideoNotFound)?;
        if video.is_flagged() {
            return Err(FlagError::AlreadyFlagged);
        }

        let stopped = self.playback.stop_if_current(id);
        let reason = reason.unwrap_or(DEFAULT_FLAG_REASON).to_string();
        let video = self.catalog.set_flag(id, Some(reason))?.clone();
        log::info!("Flagged video {:?}", video.id);
        Ok(Flagged { video, stopped })
    }

    /// Clear a video's flag
    pub fn allow(&mut self, id: &str) -> Result<Video, FlagError> {
        let video = self.catalog.set_flag(id, None)?.clone();
        log::info!("Allowed video {:?}", video.id);
        Ok(video)
    }
}
