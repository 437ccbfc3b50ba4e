//! Error types for the playback session

use crate::types::PlaybackSource;
use thiserror::Error;
use turntable_core::{CoreError, TrackId};

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Step requested with no queue built
    #[error("No active queue")]
    NoActiveQueue,

    /// Queue requested over an empty collection
    #[error("Collection is empty, nothing to play")]
    EmptyCollection,

    /// Anchor track is not part of the collection
    #[error("Anchor track not in collection: {0}")]
    AnchorNotFound(TrackId),

    /// Playback source variant without an implementation
    #[error("Unsupported playback source: {0:?}")]
    UnsupportedSource(PlaybackSource),

    /// Engine or catalog call failure
    #[error(transparent)]
    Remote(#[from] CoreError),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
