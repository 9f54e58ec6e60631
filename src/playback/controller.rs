//! Playback cursor and its transitions

use super::traits::RandomSource;
use crate::error::PlaybackError;
use crate::model::{Catalog, Video};
use std::fmt;

/// Where the cursor is. A video is attached iff it is not stopped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing(String),
    Paused(String),
}

impl PlaybackState {
    /// ID of the video on the cursor, playing or paused
    pub fn video_id(&self) -> Option<&str> {
        match self {
            PlaybackState::Stopped => None,
            PlaybackState::Playing(id) | PlaybackState::Paused(id) => Some(id),
        }
    }
}

/// Result of a transition into PLAYING
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Video that was on the cursor before, if any
    pub stopped: Option<Video>,
    pub started: Video,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PauseOutcome {
    Paused(Video),
    AlreadyPaused(Video),
}

/// The video currently on the cursor, rendered for display
#[derive(Debug, Clone, Copy)]
pub struct NowPlaying<'a> {
    pub video: &'a Video,
    pub paused: bool,
}

impl fmt::Display for NowPlaying<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.video)?;
        if self.paused {
            write!(f, " - PAUSED")?;
        }
        Ok(())
    }
}

/// Owns the single playback cursor
pub struct PlaybackController<R: RandomSource> {
    state: PlaybackState,
    random: R,
}

impl<R: RandomSource> PlaybackController<R> {
    pub fn new(random: R) -> Self {
        Self {
            state: PlaybackState::Stopped,
            random,
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Play a video by ID, stopping whatever was on the cursor
    ///
    /// Unknown and flagged videos are rejected before the cursor changes.
    pub fn play(&mut self, catalog: &Catalog, id: &str) -> Result<Transition, PlaybackError> {
        let video = catalog.find(id).ok_or(PlaybackError::VideoNotFound)?;
        if let Some(reason) = video.flag() {
            return Err(PlaybackError::VideoFlagged(reason.to_string()));
        }
        Ok(self.start(catalog, video))
    }

    /// Play a uniformly chosen unflagged video
    pub fn play_random(&mut self, catalog: &Catalog) -> Result<Transition, PlaybackError> {
        let pool: Vec<&Video> = catalog.unflagged().collect();
        if pool.is_empty() {
            return Err(PlaybackError::NoVideosAvailable);
        }
        let video = pool[self.random.pick(pool.len())];
        Ok(self.start(catalog, video))
    }

    pub fn stop(&mut self, catalog: &Catalog) -> Result<Video, PlaybackError> {
        let id = self
            .state
            .video_id()
            .ok_or(PlaybackError::NothingPlaying)?;
        let video = lookup(catalog, id)?.clone();
        log::debug!("Stopped {:?}", video.id);
        self.state = PlaybackState::Stopped;
        Ok(video)
    }

    pub fn pause(&mut self, catalog: &Catalog) -> Result<PauseOutcome, PlaybackError> {
        match &self.state {
            PlaybackState::Stopped => Err(PlaybackError::NothingPlaying),
            PlaybackState::Paused(id) => Ok(PauseOutcome::AlreadyPaused(lookup(catalog, id)?.clone())),
            PlaybackState::Playing(id) => {
                let video = lookup(catalog, id)?.clone();
                log::debug!("Paused {:?}", video.id);
                self.state = PlaybackState::Paused(video.id.clone());
                Ok(PauseOutcome::Paused(video))
            }
        }
    }

    pub fn resume(&mut self, catalog: &Catalog) -> Result<Video, PlaybackError> {
        match &self.state {
            PlaybackState::Stopped => Err(PlaybackError::NothingPlaying),
            PlaybackState::Playing(_) => Err(PlaybackError::NotPaused),
            PlaybackState::Paused(id) => {
                let video = lookup(catalog, id)?.clone();
                log::debug!("Resumed {:?}", video.id);
                self.state = PlaybackState::Playing(video.id.clone());
                Ok(video)
            }
        }
    }

    /// Video on the cursor, if any
    pub fn current<'a>(&self, catalog: &'a Catalog) -> Option<NowPlaying<'a>> {
        let (id, paused) = match &self.state {
            PlaybackState::Stopped => return None,
            PlaybackState::Playing(id) => (id, false),
            PlaybackState::Paused(id) => (id, true),
        };
        catalog.find(id).map(|video| NowPlaying { video, paused })
    }

    /// Stop the cursor if it holds `id`. Returns whether it did.
    pub fn stop_if_current(&mut self, id: &str) -> bool {
        if self.state.video_id() == Some(id) {
            self.state = PlaybackState::Stopped;
            true
        } else {
            false
        }
    }

    fn start(&mut self, catalog: &Catalog, video: &Video) -> Transition {
        let stopped = self
            .state
            .video_id()
            .and_then(|id| catalog.find(id))
            .cloned();
        log::debug!("Playing {:?} (stopping {:?})", video.id, stopped.as_ref().map(|v| &v.id));
        self.state = PlaybackState::Playing(video.id.clone());
        Transition {
            stopped,
            started: video.clone(),
        }
    }
}

fn lookup<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a Video, PlaybackError> {
    catalog.find(id).ok_or(PlaybackError::VideoNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always picks the same index
    struct FixedRandom(usize);

    impl RandomSource for FixedRandom {
        fn pick(&mut self, len: usize) -> usize {
            self.0 % len
        }
    }

    fn test_catalog() -> Catalog {
        let mut catalog = Catalog::new(vec![
            Video::new("a1", "A", vec!["#x".to_string()]),
            Video::new("b1", "B", Vec::new()),
            Video::new("c1", "C", Vec::new()),
        ]);
        catalog.set_flag("b1", Some("bad".to_string())).unwrap();
        catalog
    }

    fn controller() -> PlaybackController<FixedRandom> {
        PlaybackController::new(FixedRandom(0))
    }

    #[test]
    fn test_play_from_stopped() {
        let catalog = test_catalog();
        let mut player = controller();

        let transition = player.play(&catalog, "a1").unwrap();
        assert!(transition.stopped.is_none());
        assert_eq!(transition.started.id, "a1");
        assert_eq!(player.state(), &PlaybackState::Playing("a1".to_string()));
    }

    #[test]
    fn test_play_reports_previous_video() {
        let catalog = test_catalog();
        let mut player = controller();
        player.play(&catalog, "a1").unwrap();
        player.pause(&catalog).unwrap();

        let transition = player.play(&catalog, "c1").unwrap();
        assert_eq!(transition.stopped.unwrap().id, "a1");
        assert_eq!(player.state(), &PlaybackState::Playing("c1".to_string()));
    }

    #[test]
    fn test_play_error_priority() {
        let catalog = test_catalog();
        let mut player = controller();

        assert_eq!(
            player.play(&catalog, "zz").unwrap_err(),
            PlaybackError::VideoNotFound
        );
        assert_eq!(
            player.play(&catalog, "b1").unwrap_err(),
            PlaybackError::VideoFlagged("bad".to_string())
        );
        assert_eq!(player.state(), &PlaybackState::Stopped);
    }

    #[test]
    fn test_flagged_play_keeps_paused_cursor() {
        let catalog = test_catalog();
        let mut player = controller();

        player.play(&catalog, "a1").unwrap();
        player.pause(&catalog).unwrap();
        assert!(player.play(&catalog, "b1").is_err());
        assert_eq!(player.state(), &PlaybackState::Paused("a1".to_string()));

        assert_eq!(player.resume(&catalog).unwrap().id, "a1");
        assert_eq!(player.state(), &PlaybackState::Playing("a1".to_string()));
    }

    #[test]
    fn test_stop() {
        let catalog = test_catalog();
        let mut player = controller();
        assert_eq!(player.stop(&catalog).unwrap_err(), PlaybackError::NothingPlaying);

        player.play(&catalog, "a1").unwrap();
        assert_eq!(player.stop(&catalog).unwrap().id, "a1");
        assert_eq!(player.state(), &PlaybackState::Stopped);
    }

    #[test]
    fn test_pause_and_resume() {
        let catalog = test_catalog();
        let mut player = controller();
        assert_eq!(player.pause(&catalog).unwrap_err(), PlaybackError::NothingPlaying);
        assert_eq!(player.resume(&catalog).unwrap_err(), PlaybackError::NothingPlaying);

        player.play(&catalog, "a1").unwrap();
        assert_eq!(player.resume(&catalog).unwrap_err(), PlaybackError::NotPaused);
        assert!(matches!(player.pause(&catalog).unwrap(), PauseOutcome::Paused(v) if v.id == "a1"));
        assert!(matches!(
            player.pause(&catalog).unwrap(),
            PauseOutcome::AlreadyPaused(v) if v.id == "a1"
        ));
        assert_eq!(player.state(), &PlaybackState::Paused("a1".to_string()));
    }

    #[test]
    fn test_play_random_skips_flagged() {
        let catalog = test_catalog();
        let mut player = PlaybackController::new(FixedRandom(1));

        // Pool is [a1, c1]; index 1 is c1
        let transition = player.play_random(&catalog).unwrap();
        assert_eq!(transition.started.id, "c1");

        let transition = player.play_random(&catalog).unwrap();
        assert_eq!(transition.stopped.unwrap().id, "c1");
    }

    #[test]
    fn test_play_random_with_everything_flagged() {
        let mut catalog = test_catalog();
        catalog.set_flag("a1", Some("x".to_string())).unwrap();
        catalog.set_flag("c1", Some("x".to_string())).unwrap();
        let mut player = controller();

        assert_eq!(
            player.play_random(&catalog).unwrap_err(),
            PlaybackError::NoVideosAvailable
        );
        assert_eq!(player.state(), &PlaybackState::Stopped);
    }

    #[test]
    fn test_current_rendering() {
        let catalog = test_catalog();
        let mut player = controller();
        assert!(player.current(&catalog).is_none());

        player.play(&catalog, "a1").unwrap();
        assert_eq!(player.current(&catalog).unwrap().to_string(), "A (a1) [#x]");

        player.pause(&catalog).unwrap();
        assert_eq!(
            player.current(&catalog).unwrap().to_string(),
            "A (a1) [#x] - PAUSED"
        );
    }

    #[test]
    fn test_stop_if_current() {
        let catalog = test_catalog();
        let mut player = controller();
        player.play(&catalog, "a1").unwrap();

        assert!(!player.stop_if_current("c1"));
        assert!(player.stop_if_current("a1"));
        assert_eq!(player.state(), &PlaybackState::Stopped);
    }
}
