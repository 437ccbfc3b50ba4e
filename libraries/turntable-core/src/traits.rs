/// Service traits for the Turntable client
use crate::error::Result;
use crate::types::Track;
use async_trait::async_trait;

/// Read surface of the external song catalog
///
/// The catalog lives in another process and is reached through
/// asynchronous request/response calls that fail independently of the
/// playback logic. Ordering of the returned collections is whatever the
/// catalog presents; callers sort locally.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// List all tracks in catalog order
    async fn list_tracks(&self) -> Result<Vec<Track>>;

    /// List all tracks with artist/album/genre names resolved
    async fn list_tracks_with_details(&self) -> Result<Vec<Track>>;
}
