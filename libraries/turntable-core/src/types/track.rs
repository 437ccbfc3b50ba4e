/// Track domain type
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Unique track identifier assigned by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TrackId(pub i64);

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Audio track as presented by the catalog
///
/// Immutable from the playback client's point of view: the catalog owns
/// these records, the client only reads them. Artist/album/genre names
/// are resolved when the catalog is queried with details and absent
/// otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// File path on disk, passed verbatim to the playback engine
    pub path: PathBuf,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: Option<String>,

    /// Album name
    pub album: Option<String>,

    /// Genre
    pub genre: Option<String>,

    /// Release year
    pub year: Option<u32>,
}

impl Track {
    /// Create a new track with minimal metadata
    pub fn new(id: TrackId, path: PathBuf, title: impl Into<String>) -> Self {
        Self {
            id,
            path,
            title: title.into(),
            artist: None,
            album: None,
            genre: None,
            year: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_creation() {
        let track = Track::new(TrackId(7), PathBuf::from("/music/song.mp3"), "Test Song");

        assert_eq!(track.id, TrackId(7));
        assert_eq!(track.title, "Test Song");
        assert!(track.artist.is_none());
        assert!(track.year.is_none());
    }

    #[test]
    fn track_id_display() {
        assert_eq!(TrackId(42).to_string(), "42");
    }
}
