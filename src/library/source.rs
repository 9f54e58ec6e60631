use crate::model::Video;
use std::collections::HashMap;

/// Read-only access to the videos a player can load
pub trait VideoSource {
    /// Get a video by ID
    fn get_video(&self, id: &str) -> Option<Video>;

    /// All videos, in the provider's order
    fn get_all_videos(&self) -> Vec<Video>;
}

/// In-memory video library loaded from a catalog file
#[derive(Debug, Clone, Default)]
pub struct VideoLibrary {
    videos: Vec<Video>,
    by_id: HashMap<String, usize>,
}

impl VideoLibrary {
    pub fn new(videos: Vec<Video>) -> Self {
        let by_id = videos
            .iter()
            .enumerate()
            .map(|(i, v)| (v.id.clone(), i))
            .collect();
        Self { videos, by_id }
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

impl VideoSource for VideoLibrary {
    fn get_video(&self, id: &str) -> Option<Video> {
        self.by_id.get(id).map(|&i| self.videos[i].clone())
    }

    fn get_all_videos(&self) -> Vec<Video> {
        self.videos.clone()
    }
}

impl VideoSource for [Video] {
    fn get_video(&self, id: &str) -> Option<Video> {
        self.iter().find(|v| v.id == id).cloned()
    }

    fn get_all_videos(&self) -> Vec<Video> {
        self.to_vec()
    }
}
