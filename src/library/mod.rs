//! Video catalog provider
//!
//! Loads the video library from a plain text file, one video per line:
//!
//! ```text
//! Funny Dogs | funny_dogs_video_id | #dog , #animal
//! ```

mod parser;
mod source;

pub use parser::{parse_catalog, parse_line};
pub use source::{VideoLibrary, VideoSource};

use anyhow::{Context, Result};
use std::path::Path;

/// Load a video library from its catalog file
///
/// # Arguments
/// * `path` - Path to the catalog file (e.g. data/videos.txt)
pub fn load_library(path: &Path) -> Result<VideoLibrary> {
    log::info!("Loading video catalog from {:?}", path);
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read video catalog: {:?}", path))?;

    let library = VideoLibrary::new(parse_catalog(&text));
    log::info!("Loaded {} videos", library.len());
    Ok(library)
}
