use crate::error::PlaylistError;
use crate::model::{Catalog, Playlist, Video};
use std::collections::HashMap;

/// Videos of a playlist, resolved against the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistContents<'a> {
    /// The playlist exists but has nothing in it yet
    Empty,
    Videos(Vec<&'a Video>),
}

/// All playlists, keyed by normalized name
#[derive(Debug, Clone, Default)]
pub struct PlaylistRegistry {
    playlists: HashMap<String, Playlist>,
}

impl PlaylistRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of playlists
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    /// Get a playlist by name, ignoring case
    pub fn get(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&Playlist::normalize(name))
    }

    /// Create an empty playlist
    pub fn create(&mut self, name: &str) -> Result<&Playlist, PlaylistError> {
        let key = Playlist::normalize(name);
        if self.playlists.contains_key(&key) {
            return Err(PlaylistError::AlreadyExists);
        }
        log::debug!("Created playlist {:?}", name);
        Ok(self
            .playlists
            .entry(key)
            .or_insert_with(|| Playlist::new(name.to_string())))
    }

    /// Append a video to a playlist
    pub fn add<'a>(
        &mut self,
        catalog: &'a Catalog,
        name: &str,
        video_id: &str,
    ) -> Result<&'a Video, PlaylistError> {
        let playlist = self.get_mut(name)?;
        let video = catalog.find(video_id).ok_or(PlaylistError::VideoNotFound)?;
        if let Some(reason) = video.flag() {
            return Err(PlaylistError::VideoFlagged(reason.to_string()));
        }
        if !playlist.push(video.id.clone()) {
            return Err(PlaylistError::AlreadyInPlaylist);
        }
        log::debug!("Added {:?} to playlist {:?}", video.id, playlist.name);
        Ok(video)
    }

    /// Remove a video from a playlist
    pub fn remove<'a>(
        &mut self,
        catalog: &'a Catalog,
        name: &str,
        video_id: &str,
    ) -> Result<&'a Video, PlaylistError> {
        let playlist = self.get_mut(name)?;
        let video = catalog.find(video_id).ok_or(PlaylistError::VideoNotFound)?;
        if !playlist.remove(&video.id) {
            return Err(PlaylistError::NotInPlaylist);
        }
        log::debug!("Removed {:?} from playlist {:?}", video.id, playlist.name);
        Ok(video)
    }

    /// Remove every video but keep the playlist
    pub fn clear(&mut self, name: &str) -> Result<(), PlaylistError> {
        let playlist = self.get_mut(name)?;
        playlist.clear();
        log::debug!("Cleared playlist {:?}", playlist.name);
        Ok(())
    }

    /// Remove the playlist entirely
    pub fn delete(&mut self, name: &str) -> Result<Playlist, PlaylistError> {
        let playlist = self
            .playlists
            .remove(&Playlist::normalize(name))
            .ok_or(PlaylistError::PlaylistNotFound)?;
        log::debug!("Deleted playlist {:?}", playlist.name);
        Ok(playlist)
    }

    /// Playlist names in stored casing, sorted ignoring case
    pub fn list_all(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.playlists.values().map(|p| p.name.as_str()).collect();
        names.sort_by_cached_key(|name| name.to_lowercase());
        names
    }

    /// Resolve a playlist's videos in playlist order
    ///
    /// Flagged videos stay listed; IDs the catalog no longer knows are skipped.
    pub fn show<'a>(
        &self,
        catalog: &'a Catalog,
        name: &str,
    ) -> Result<PlaylistContents<'a>, PlaylistError> {
        let playlist = self.get(name).ok_or(PlaylistError::PlaylistNotFound)?;
        if playlist.is_empty() {
            return Ok(PlaylistContents::Empty);
        }
        Ok(PlaylistContents::Videos(
            playlist
                .video_ids()
                .iter()
                .filter_map(|id| catalog.find(id))
                .collect(),
        ))
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Playlist, PlaylistError> {
        self.playlists
            .get_mut(&Playlist::normalize(name))
            .ok_or(PlaylistError::PlaylistNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_catalog() -> Catalog {
        let mut catalog = Catalog::new(vec![
            Video::new("a1", "A", Vec::new()),
            Video::new("b1", "B", Vec::new()),
            Video::new("c1", "C", Vec::new()),
        ]);
        catalog.set_flag("b1", Some("bad".to_string())).unwrap();
        catalog
    }

    fn ids(contents: PlaylistContents<'_>) -> Vec<String> {
        match contents {
            PlaylistContents::Empty => Vec::new(),
            PlaylistContents::Videos(videos) => videos.iter().map(|v| v.id.clone()).collect(),
        }
    }

    #[test]
    fn test_create_is_case_insensitive() {
        let mut registry = PlaylistRegistry::new();
        assert_eq!(registry.create("Fun").unwrap().name, "Fun");
        assert_eq!(registry.create("FUN").unwrap_err(), PlaylistError::AlreadyExists);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("fun").unwrap().name, "Fun");
    }

    #[test]
    fn test_show_with_other_casing() {
        let catalog = test_catalog();
        let mut registry = PlaylistRegistry::new();
        registry.create("Fun").unwrap();
        assert_eq!(registry.show(&catalog, "fun").unwrap(), PlaylistContents::Empty);

        registry.add(&catalog, "FUN", "a1").unwrap();
        assert_eq!(ids(registry.show(&catalog, "fun").unwrap()), ["a1"]);
    }

    #[test]
    fn test_add_error_priority() {
        let catalog = test_catalog();
        let mut registry = PlaylistRegistry::new();

        assert_eq!(
            registry.add(&catalog, "nope", "zz").unwrap_err(),
            PlaylistError::PlaylistNotFound
        );

        registry.create("list").unwrap();
        assert_eq!(
            registry.add(&catalog, "list", "zz").unwrap_err(),
            PlaylistError::VideoNotFound
        );
        assert_eq!(
            registry.add(&catalog, "list", "b1").unwrap_err(),
            PlaylistError::VideoFlagged("bad".to_string())
        );
    }

    #[test]
    fn test_add_twice() {
        let catalog = test_catalog();
        let mut registry = PlaylistRegistry::new();
        registry.create("list").unwrap();

        assert_eq!(registry.add(&catalog, "list", "a1").unwrap().title, "A");
        assert_eq!(
            registry.add(&catalog, "list", "a1").unwrap_err(),
            PlaylistError::AlreadyInPlaylist
        );
        assert_eq!(registry.get("list").unwrap().len(), 1);
    }

    #[test]
    fn test_remove() {
        let catalog = test_catalog();
        let mut registry = PlaylistRegistry::new();
        assert_eq!(
            registry.remove(&catalog, "Movies", "zz").unwrap_err(),
            PlaylistError::PlaylistNotFound
        );

        registry.create("Movies").unwrap();
        registry.add(&catalog, "movies", "a1").unwrap();
        assert_eq!(
            registry.remove(&catalog, "Movies", "zz").unwrap_err(),
            PlaylistError::VideoNotFound
        );
        assert!(registry.remove(&catalog, "MOVIES", "a1").is_ok());
        assert_eq!(
            registry.remove(&catalog, "Movies", "a1").unwrap_err(),
            PlaylistError::NotInPlaylist
        );
    }

    #[test]
    fn test_flagging_does_not_cascade() {
        let mut catalog = test_catalog();
        let mut registry = PlaylistRegistry::new();
        registry.create("list").unwrap();
        registry.add(&catalog, "list", "a1").unwrap();
        registry.add(&catalog, "list", "c1").unwrap();

        catalog.set_flag("a1", Some("late".to_string())).unwrap();
        assert_eq!(ids(registry.show(&catalog, "list").unwrap()), ["a1", "c1"]);
    }

    #[test]
    fn test_clear_keeps_playlist() {
        let catalog = test_catalog();
        let mut registry = PlaylistRegistry::new();
        assert_eq!(registry.clear("list").unwrap_err(), PlaylistError::PlaylistNotFound);

        registry.create("list").unwrap();
        registry.add(&catalog, "list", "a1").unwrap();
        registry.clear("LIST").unwrap();
        assert_eq!(registry.show(&catalog, "list").unwrap(), PlaylistContents::Empty);
    }

    #[test]
    fn test_delete() {
        let mut registry = PlaylistRegistry::new();
        assert_eq!(registry.delete("list").unwrap_err(), PlaylistError::PlaylistNotFound);

        registry.create("List").unwrap();
        assert_eq!(registry.delete("lIsT").unwrap().name, "List");
        assert!(registry.is_empty());
        assert!(registry.create("list").is_ok());
    }

    #[test]
    fn test_list_all_sorted_ignoring_case() {
        let mut registry = PlaylistRegistry::new();
        registry.create("banana").unwrap();
        registry.create("Cherry").unwrap();
        registry.create("apple").unwrap();
        assert_eq!(registry.list_all(), ["apple", "banana", "Cherry"]);
    }

    #[test]
    fn test_show_missing() {
        let catalog = test_catalog();
        let registry = PlaylistRegistry::new();
        assert_eq!(
            registry.show(&catalog, "list").unwrap_err(),
            PlaylistError::PlaylistNotFound
        );
    }
}
