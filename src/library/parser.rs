//! Catalog file parser

use crate::model::Video;
use std::collections::HashSet;

/// Parse a whole catalog file, skipping lines that cannot be used
pub fn parse_catalog(text: &str) -> Vec<Video> {
    let mut videos = Vec::new();
    let mut seen = HashSet::new();

    for (line_no, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let Some(video) = parse_line(line) else {
            log::warn!("Skipping malformed catalog line {}: {:?}", line_no + 1, line);
            continue;
        };

        if !seen.insert(video.id.clone()) {
            log::warn!(
                "Skipping duplicate video ID {:?} on line {}",
                video.id,
                line_no + 1
            );
            continue;
        }

        videos.push(video);
    }

    log::debug!("Parsed {} videos from catalog", videos.len());
    videos
}

/// Parse one `title | id | tag, tag` line
///
/// The tag field is optional. Returns None without a title and an ID.
pub fn parse_line(line: &str) -> Option<Video> {
    let mut fields = line.split('|').map(str::trim);

    let title = fields.next()?;
    let id = fields.next()?;
    if id.is_empty() {
        return None;
    }

    let tags: Vec<String> = fields
        .next()
        .map(|tags| {
            tags.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    Some(Video::new(id, title, tags))
}
