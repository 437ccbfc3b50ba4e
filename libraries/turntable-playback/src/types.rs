//! Core types for the playback session

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use turntable_core::Track;

/// Repeat mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RepeatMode {
    /// Stop when the queue ends
    #[default]
    Off,

    /// Loop the entire queue
    All,

    /// Loop the current track only
    One,
}

impl RepeatMode {
    /// Next mode in the user toggle cycle: Off → All → One → Off
    pub fn cycled(self) -> Self {
        match self {
            Self::Off => Self::All,
            Self::All => Self::One,
            Self::One => Self::Off,
        }
    }
}

/// Collection a playback queue is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackSource {
    /// The flat song catalog
    Library,

    /// A named playlist. Not implemented yet: selecting it is an
    /// `UnsupportedSource` error, never a silent no-op.
    Playlist {
        /// Playlist identifier in the catalog
        id: i64,
    },
}

/// Display/transport state owned by the session
///
/// Initialized empty, populated on first playback, reset to empty on
/// explicit stop or end-of-queue. Timing fields are cached copies of
/// the engine's answers from the last [`refresh`]; they carry no
/// state-machine meaning of their own.
///
/// [`refresh`]: crate::PlaybackSession::refresh
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaybackState {
    /// Track currently at the queue position
    pub current_track: Option<Track>,

    /// File path the engine reports it is playing
    pub file_path: Option<PathBuf>,

    /// Tag name → value map from the engine
    pub metadata: HashMap<String, String>,

    /// Elapsed time in seconds
    pub position: Option<f64>,

    /// Track duration in seconds
    pub duration: Option<f64>,

    /// Whether the engine is playing
    pub playing: bool,

    /// Whether the queue is shuffled
    pub shuffle: bool,

    /// Repeat mode
    pub repeat: RepeatMode,
}

/// Configuration for a playback session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Initial volume, on the engine's native scale (default: 0.0)
    pub volume: f64,

    /// Initial shuffle flag (default: off)
    pub shuffle: bool,

    /// Initial repeat mode (default: Off)
    pub repeat: RepeatMode,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            volume: 0.0,
            shuffle: false,
            repeat: RepeatMode::Off,
        }
    }
}
