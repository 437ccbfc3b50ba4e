//! Wire types for the playback daemon API.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use turntable_core::{Track, TrackId};

/// Daemon identification returned by `GET /api/info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Daemon name
    pub name: String,
    /// Daemon version
    pub version: String,
}

/// Track record as the daemon serializes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackDto {
    /// Catalog identifier
    pub id: i64,
    /// File path on the daemon's host
    pub path: PathBuf,
    /// Track title
    pub title: String,
    /// Artist name, when resolved
    #[serde(default)]
    pub artist: Option<String>,
    /// Album name, when resolved
    #[serde(default)]
    pub album: Option<String>,
    /// Genre tag
    #[serde(default)]
    pub genre: Option<String>,
    /// Release year
    #[serde(default)]
    pub year: Option<u32>,
}

impl From<TrackDto> for Track {
    fn from(dto: TrackDto) -> Self {
        Track {
            id: TrackId(dto.id),
            path: dto.path,
            title: dto.title,
            artist: dto.artist,
            album: dto.album,
            genre: dto.genre,
            year: dto.year,
        }
    }
}

/// Body for `POST /api/playback/play`.
#[derive(Debug, Serialize, Deserialize)]
pub struct PlayRequest {
    /// File to play
    pub path: PathBuf,
}

/// Body for `POST /api/playback/seek`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SeekRequest {
    /// Offset from the start of the file
    pub seconds: f64,
}

/// Body for `POST /api/playback/volume`.
#[derive(Debug, Serialize, Deserialize)]
pub struct VolumeRequest {
    /// Level on the engine's native scale
    pub level: f64,
}

/// Response carrying a number of seconds (position, duration).
#[derive(Debug, Serialize, Deserialize)]
pub struct SecondsResponse {
    /// Seconds value
    pub seconds: f64,
}

/// Response for `GET /api/playback/playing`.
#[derive(Debug, Serialize, Deserialize)]
pub struct PlayingResponse {
    /// Whether the engine is playing
    pub playing: bool,
}

/// Response for `GET /api/playback/file`.
#[derive(Debug, Serialize, Deserialize)]
pub struct FileResponse {
    /// Currently loaded file
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_dto_converts_with_absent_tags() {
        let dto: TrackDto =
            serde_json::from_str(r#"{"id": 3, "path": "/m/3.flac", "title": "Three"}"#).unwrap();

        let track = Track::from(dto);
        assert_eq!(track.id, TrackId(3));
        assert_eq!(track.title, "Three");
        assert!(track.artist.is_none());
        assert!(track.year.is_none());
    }
}
