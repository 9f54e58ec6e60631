use crate::error::FlagError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single video in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Unique identifier for this video
    pub id: String,

    /// Display title
    pub title: String,

    /// Tags in the order they were loaded
    pub tags: Vec<String>,

    /// Moderation flag reason (None = allowed)
    flag: Option<String>,
}

impl Video {
    /// Create a new, unflagged video
    pub fn new(id: impl Into<String>, title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags,
            flag: None,
        }
    }

    /// Reason this video was flagged, if it is
    pub fn flag(&self) -> Option<&str> {
        self.flag.as_deref()
    }

    pub fn is_flagged(&self) -> bool {
        self.flag.is_some()
    }

    /// Check whether one of the tags matches, ignoring case
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }

    /// Set or clear the flag
    ///
    /// Setting requires the video to be unflagged, clearing requires it to
    /// be flagged.
    pub fn set_flag(&mut self, reason: Option<String>) -> Result<(), FlagError> {
        match (&self.flag, reason) {
            (Some(_), Some(_)) => Err(FlagError::AlreadyFlagged),
            (None, None) => Err(FlagError::NotFlagged),
            (_, reason) => {
                self.flag = reason;
                Ok(())
            }
        }
    }
}

/// Renders `title (id) [tag1 tag2]`, plus the flag reason when flagged
impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.id, self.tags.join(" "))?;
        if let Some(reason) = &self.flag {
            write!(f, " - FLAGGED (reason: {})", reason)?;
        }
        Ok(())
    }
}
