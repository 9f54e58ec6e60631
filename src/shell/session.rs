//! Interactive session: reads commands, runs them, prints results

use super::command::{Command, USAGE};
use super::config::ShellConfig;
use crate::model::Video;
use crate::playback::{PauseOutcome, RandomSource, Transition};
use crate::player::VideoPlayer;
use crate::playlists::PlaylistContents;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::ops::ControlFlow;

/// Line-based shell driving one `VideoPlayer`
pub struct Shell<R: RandomSource> {
    player: VideoPlayer<R>,
    config: ShellConfig,
}

impl<R: RandomSource> Shell<R> {
    pub fn new(player: VideoPlayer<R>, config: ShellConfig) -> Self {
        Self { player, config }
    }

    pub fn player(&self) -> &VideoPlayer<R> {
        &self.player
    }

    /// Read and run commands until EXIT or end of input
    pub fn run<I: BufRead, O: Write>(&mut self, input: &mut I, output: &mut O) -> Result<()> {
        if self.config.greeting {
            writeln!(output, "Hello and welcome to the video player, what would you like to do?")?;
            writeln!(output, "Enter HELP for list of available commands or EXIT to terminate.")?;
        }

        loop {
            write!(output, "{}", self.config.prompt)?;
            output.flush()?;

            let Some(line) = read_line(input)? else {
                log::debug!("End of input, leaving shell");
                break;
            };

            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    writeln!(output, "{}", e)?;
                    continue;
                }
            };

            log::debug!("Running {:?}", command);
            if self.execute(command, input, output)?.is_break() {
                break;
            }
        }

        writeln!(output, "The video player has now terminated its execution. Thank you and goodbye!")?;
        Ok(())
    }

    /// Run one command. `input` is only read by searches, for the pick prompt.
    pub fn execute<I: BufRead, O: Write>(
        &mut self,
        command: Command,
        input: &mut I,
        output: &mut O,
    ) -> Result<ControlFlow<()>> {
        let VideoPlayer {
            catalog,
            playback,
            playlists,
        } = &mut self.player;

        match command {
            Command::NumberOfVideos => {
                writeln!(output, "{} videos in the library", catalog.count())?;
            }
            Command::ShowAllVideos => {
                writeln!(output, "Here's a list of all available videos:")?;
                for video in catalog.list_all_sorted_by_title() {
                    writeln!(output, "\t{}", video)?;
                }
            }
            Command::Play(id) => match playback.play(catalog, &id) {
                Ok(transition) => print_transition(output, &transition)?,
                Err(e) => writeln!(output, "Cannot play video: {}", e)?,
            },
            Command::PlayRandom => match playback.play_random(catalog) {
                Ok(transition) => print_transition(output, &transition)?,
                Err(e) => writeln!(output, "{}", e)?,
            },
            Command::Stop => match playback.stop(catalog) {
                Ok(video) => writeln!(output, "Stopping video: {}", video.title)?,
                Err(e) => writeln!(output, "Cannot stop video: {}", e)?,
            },
            Command::Pause => match playback.pause(catalog) {
                Ok(PauseOutcome::Paused(video)) => {
                    writeln!(output, "Pausing video: {}", video.title)?
                }
                Ok(PauseOutcome::AlreadyPaused(video)) => {
                    writeln!(output, "Video already paused: {}", video.title)?
                }
                Err(e) => writeln!(output, "Cannot pause video: {}", e)?,
            },
            Command::Continue => match playback.resume(catalog) {
                Ok(video) => writeln!(output, "Continuing video: {}", video.title)?,
                Err(e) => writeln!(output, "Cannot continue video: {}", e)?,
            },
            Command::ShowPlaying => match playback.current(catalog) {
                Some(now) => writeln!(output, "Currently playing: {}", now)?,
                None => writeln!(output, "No video is currently playing")?,
            },
            Command::CreatePlaylist(name) => match playlists.create(&name) {
                Ok(_) => writeln!(output, "Successfully created new playlist: {}", name)?,
                Err(e) => writeln!(output, "Cannot create playlist: {}", e)?,
            },
            Command::AddToPlaylist { playlist, video_id } => {
                match playlists.add(catalog, &playlist, &video_id) {
                    Ok(video) => writeln!(output, "Added video to {}: {}", playlist, video.title)?,
                    Err(e) => writeln!(output, "Cannot add video to {}: {}", playlist, e)?,
                }
            }
            Command::RemoveFromPlaylist { playlist, video_id } => {
                match playlists.remove(catalog, &playlist, &video_id) {
                    Ok(video) => {
                        writeln!(output, "Removed video from {}: {}", playlist, video.title)?
                    }
                    Err(e) => writeln!(output, "Cannot remove video from {}: {}", playlist, e)?,
                }
            }
            Command::ClearPlaylist(name) => match playlists.clear(&name) {
                Ok(()) => writeln!(output, "Successfully removed all videos from {}", name)?,
                Err(e) => writeln!(output, "Cannot clear playlist {}: {}", name, e)?,
            },
            Command::DeletePlaylist(name) => match playlists.delete(&name) {
                Ok(_) => writeln!(output, "Deleted playlist: {}", name)?,
                Err(e) => writeln!(output, "Cannot delete playlist {}: {}", name, e)?,
            },
            Command::ShowAllPlaylists => {
                let names = playlists.list_all();
                if names.is_empty() {
                    writeln!(output, "No playlists exist yet")?;
                } else {
                    writeln!(output, "Showing all playlists:")?;
                    for name in names {
                        writeln!(output, "\t{}", name)?;
                    }
                }
            }
            Command::ShowPlaylist(name) => match playlists.show(catalog, &name) {
                Ok(PlaylistContents::Empty) => {
                    writeln!(output, "Showing playlist: {}", name)?;
                    writeln!(output, "\tNo videos here yet")?;
                }
                Ok(PlaylistContents::Videos(videos)) => {
                    writeln!(output, "Showing playlist: {}", name)?;
                    for video in videos {
                        writeln!(output, "\t{}", video)?;
                    }
                }
                Err(e) => writeln!(output, "Cannot show playlist {}: {}", name, e)?,
            },
            Command::SearchVideos(term) => {
                let ids = result_ids(&catalog.search_by_title(&term));
                return self.offer_results(&term, ids, input, output);
            }
            Command::SearchVideosWithTag(tag) => {
                let ids = result_ids(&catalog.search_by_tag(&tag));
                return self.offer_results(&tag, ids, input, output);
            }
            Command::FlagVideo { video_id, reason } => {
                match self.player.flag(&video_id, reason.as_deref()) {
                    Ok(flagged) => {
                        if flagged.stopped {
                            writeln!(output, "Stopping video: {}", flagged.video.title)?;
                        }
                        writeln!(
                            output,
                            "Successfully flagged video: {} (reason: {})",
                            flagged.video.title,
                            flagged.video.flag().unwrap_or_default()
                        )?;
                    }
                    Err(e) => writeln!(output, "Cannot flag video: {}", e)?,
                }
            }
            Command::AllowVideo(video_id) => match self.player.allow(&video_id) {
                Ok(video) => writeln!(output, "Successfully removed flag from video: {}", video.title)?,
                Err(e) => writeln!(output, "Cannot remove flag from video: {}", e)?,
            },
            Command::Help => {
                writeln!(output, "Available commands:")?;
                for (_, usage) in USAGE {
                    writeln!(output, "\t{}", usage)?;
                }
            }
            Command::Exit => return Ok(ControlFlow::Break(())),
        }

        Ok(ControlFlow::Continue(()))
    }

    /// List search results and play the one the user picks by number
    fn offer_results<I: BufRead, O: Write>(
        &mut self,
        query: &str,
        ids: Vec<String>,
        input: &mut I,
        output: &mut O,
    ) -> Result<ControlFlow<()>> {
        if ids.is_empty() {
            writeln!(output, "No search results for {}", query)?;
            return Ok(ControlFlow::Continue(()));
        }

        writeln!(output, "Here are the results for {}:", query)?;
        for (n, id) in ids.iter().enumerate() {
            if let Some(video) = self.player.catalog.find(id) {
                writeln!(output, "\t{}) {}", n + 1, video)?;
            }
        }
        writeln!(
            output,
            "Would you like to play any of the above? If yes, specify the number of the video."
        )?;
        writeln!(output, "If your answer is not a valid number, we will assume it's a no.")?;
        output.flush()?;

        let answer = read_line(input)?.unwrap_or_default();
        let picked = answer
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| ids.get(i));

        if let Some(id) = picked {
            let player = &mut self.player;
            match player.playback.play(&player.catalog, id) {
                Ok(transition) => print_transition(output, &transition)?,
                Err(e) => writeln!(output, "Cannot play video: {}", e)?,
            }
        }

        Ok(ControlFlow::Continue(()))
    }
}

fn result_ids(videos: &[&Video]) -> Vec<String> {
    videos.iter().map(|v| v.id.clone()).collect()
}

fn print_transition<O: Write>(output: &mut O, transition: &Transition) -> Result<()> {
    if let Some(stopped) = &transition.stopped {
        writeln!(output, "Stopping video: {}", stopped.title)?;
    }
    writeln!(output, "Playing video: {}", transition.started.title)?;
    Ok(())
}

/// Read one line without its terminator. `None` at end of input.
fn read_line<I: BufRead>(input: &mut I) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
