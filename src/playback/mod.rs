//! Playback state machine
//!
//! A single cursor that is stopped, playing a video, or paused on one.
//! Random selection goes through the `RandomSource` trait so callers can
//! swap in a seeded or fixed source.

mod controller;
mod random;
mod traits;

pub use controller::{NowPlaying, PauseOutcome, PlaybackController, PlaybackState, Transition};
pub use random::StdRandom;
pub use traits::RandomSource;
