//! Command line parsing

use crate::error::CommandError;

/// One parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play(String),
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist(String),
    AddToPlaylist { playlist: String, video_id: String },
    RemoveFromPlaylist { playlist: String, video_id: String },
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowAllPlaylists,
    ShowPlaylist(String),
    SearchVideos(String),
    SearchVideosWithTag(String),
    FlagVideo { video_id: String, reason: Option<String> },
    AllowVideo(String),
    Help,
    Exit,
}

/// Verb and argument usage for every command, in help order
pub const USAGE: &[(&str, &str)] = &[
    ("NUMBER_OF_VIDEOS", "NUMBER_OF_VIDEOS"),
    ("SHOW_ALL_VIDEOS", "SHOW_ALL_VIDEOS"),
    ("PLAY", "PLAY <video_id>"),
    ("PLAY_RANDOM", "PLAY_RANDOM"),
    ("STOP", "STOP"),
    ("PAUSE", "PAUSE"),
    ("CONTINUE", "CONTINUE"),
    ("SHOW_PLAYING", "SHOW_PLAYING"),
    ("CREATE_PLAYLIST", "CREATE_PLAYLIST <playlist_name>"),
    ("ADD_TO_PLAYLIST", "ADD_TO_PLAYLIST <playlist_name> <video_id>"),
    ("REMOVE_FROM_PLAYLIST", "REMOVE_FROM_PLAYLIST <playlist_name> <video_id>"),
    ("CLEAR_PLAYLIST", "CLEAR_PLAYLIST <playlist_name>"),
    ("DELETE_PLAYLIST", "DELETE_PLAYLIST <playlist_name>"),
    ("SHOW_ALL_PLAYLISTS", "SHOW_ALL_PLAYLISTS"),
    ("SHOW_PLAYLIST", "SHOW_PLAYLIST <playlist_name>"),
    ("SEARCH_VIDEOS", "SEARCH_VIDEOS <search_term>"),
    ("SEARCH_VIDEOS_WITH_TAG", "SEARCH_VIDEOS_WITH_TAG <tag_name>"),
    ("FLAG_VIDEO", "FLAG_VIDEO <video_id> [flag_reason]"),
    ("ALLOW_VIDEO", "ALLOW_VIDEO <video_id>"),
    ("HELP", "HELP"),
    ("EXIT", "EXIT"),
];

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    ///
    /// The verb is case-insensitive; arguments are whitespace separated
    /// and passed through untouched.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let args: Vec<String> = words.map(String::from).collect();
        let verb = verb.to_uppercase();

        let (verb, usage) = USAGE
            .iter()
            .copied()
            .find(|(v, _)| *v == verb)
            .ok_or_else(|| CommandError::Unknown(verb.clone()))?;

        // FLAG_VIDEO joins everything after the ID into the reason
        let arity = usage.split_whitespace().count() - 1;
        let fits = if verb == "FLAG_VIDEO" {
            !args.is_empty()
        } else {
            args.len() == arity
        };
        if !fits {
            return Err(CommandError::Usage { verb, usage });
        }

        let mut args = args.into_iter();
        let first = args.next().unwrap_or_default();
        let rest: Vec<String> = args.collect();
        let second = rest.first().cloned().unwrap_or_default();

        let command = match verb {
            "NUMBER_OF_VIDEOS" => Command::NumberOfVideos,
            "SHOW_ALL_VIDEOS" => Command::ShowAllVideos,
            "PLAY" => Command::Play(first),
            "PLAY_RANDOM" => Command::PlayRandom,
            "STOP" => Command::Stop,
            "PAUSE" => Command::Pause,
            "CONTINUE" => Command::Continue,
            "SHOW_PLAYING" => Command::ShowPlaying,
            "CREATE_PLAYLIST" => Command::CreatePlaylist(first),
            "ADD_TO_PLAYLIST" => Command::AddToPlaylist {
                playlist: first,
                video_id: second,
            },
            "REMOVE_FROM_PLAYLIST" => Command::RemoveFromPlaylist {
                playlist: first,
                video_id: second,
            },
            "CLEAR_PLAYLIST" => Command::ClearPlaylist(first),
            "DELETE_PLAYLIST" => Command::DeletePlaylist(first),
            "SHOW_ALL_PLAYLISTS" => Command::ShowAllPlaylists,
            "SHOW_PLAYLIST" => Command::ShowPlaylist(first),
            "SEARCH_VIDEOS" => Command::SearchVideos(first),
            "SEARCH_VIDEOS_WITH_TAG" => Command::SearchVideosWithTag(first),
            "FLAG_VIDEO" => Command::FlagVideo {
                video_id: first,
                reason: (!rest.is_empty()).then(|| rest.join(" ")),
            },
            "ALLOW_VIDEO" => Command::AllowVideo(first),
            "HELP" => Command::Help,
            _ => Command::Exit,
        };

        Ok(Some(command))
    }
}
