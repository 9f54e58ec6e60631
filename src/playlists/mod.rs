//! Named playlists over the catalog
//!
//! Names match case-insensitively but keep the casing they were created
//! with.

mod registry;

pub use registry::{PlaylistContents, PlaylistRegistry};
