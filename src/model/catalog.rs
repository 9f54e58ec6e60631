use super::Video;
use crate::error::FlagError;
use crate::library::VideoSource;
use std::collections::HashMap;

/// The fixed set of videos available to the player
///
/// Videos keep the order the provider returned them in. That order is
/// what searches preserve.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    videos: Vec<Video>,

    /// Video ID -> position in `videos`
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from videos in display order
    ///
    /// Later videos with an ID already seen are dropped.
    pub fn new(videos: Vec<Video>) -> Self {
        let mut catalog = Self::default();
        for video in videos {
            if catalog.index.contains_key(&video.id) {
                log::warn!("Duplicate video ID {:?}, keeping the first one", video.id);
                continue;
            }
            catalog.index.insert(video.id.clone(), catalog.videos.len());
            catalog.videos.push(video);
        }
        catalog
    }

    /// Take a snapshot of everything a provider currently holds
    pub fn from_source<S: VideoSource + ?Sized>(source: &S) -> Self {
        Self::new(source.get_all_videos())
    }

    /// Number of videos loaded
    pub fn count(&self) -> usize {
        self.videos.len()
    }

    /// Get a video by ID
    pub fn find(&self, id: &str) -> Option<&Video> {
        self.index.get(id).map(|&i| &self.videos[i])
    }

    /// All videos in catalog order
    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    /// Videos that can be played
    pub fn unflagged(&self) -> impl Iterator<Item = &Video> {
        self.videos.iter().filter(|v| !v.is_flagged())
    }

    /// All videos sorted by title (case-sensitive, stable)
    pub fn list_all_sorted_by_title(&self) -> Vec<&Video> {
        let mut videos: Vec<&Video> = self.videos.iter().collect();
        videos.sort_by(|a, b| a.title.cmp(&b.title));
        videos
    }

    /// Unflagged videos whose title contains `term`, ignoring case
    pub fn search_by_title(&self, term: &str) -> Vec<&Video> {
        let term = term.to_lowercase();
        self.unflagged()
            .filter(|v| v.title.to_lowercase().contains(&term))
            .collect()
    }

    /// Unflagged videos carrying `tag`, ignoring case
    pub fn search_by_tag(&self, tag: &str) -> Vec<&Video> {
        self.unflagged().filter(|v| v.has_tag(tag)).collect()
    }

    /// Flag a video (`Some(reason)`) or clear its flag (`None`)
    pub fn set_flag(&mut self, id: &str, reason: Option<String>) -> Result<&Video, FlagError> {
        let &i = self.index.get(id).ok_or(FlagError::VideoNotFound)?;
        let video = &mut self.videos[i];
        video.set_flag(reason)?;
        log::debug!("Flag on {:?} is now {:?}", video.id, video.flag());
        Ok(video)
    }
}
