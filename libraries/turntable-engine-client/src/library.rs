//! Library routes and the `Catalog` implementation.

use crate::client::EngineClient;
use crate::error::{ClientError, Result};
use crate::types::TrackDto;
use async_trait::async_trait;
use tracing::debug;
use turntable_core::{Catalog, CoreError, Track};

impl EngineClient {
    /// List all catalog tracks.
    pub async fn library_tracks(&self) -> Result<Vec<Track>> {
        let dtos: Vec<TrackDto> = self.get_json("/api/library/tracks").await?;
        debug!(count = dtos.len(), "fetched library tracks");
        Ok(dtos.into_iter().map(Track::from).collect())
    }

    /// List all catalog tracks with artist/album/genre names resolved.
    pub async fn library_tracks_with_details(&self) -> Result<Vec<Track>> {
        let dtos: Vec<TrackDto> = self.get_json("/api/library/tracks/details").await?;
        debug!(count = dtos.len(), "fetched library tracks with details");
        Ok(dtos.into_iter().map(Track::from).collect())
    }
}

// Catalog failures keep their own error flavor; only transport-level
// problems surface as network errors.
fn catalog_error(err: ClientError) -> CoreError {
    match err {
        ClientError::ServerUnreachable(msg) => CoreError::network(msg),
        ClientError::Request(e) => CoreError::network(e.to_string()),
        other => CoreError::catalog(other.to_string()),
    }
}

#[async_trait]
impl Catalog for EngineClient {
    async fn list_tracks(&self) -> turntable_core::Result<Vec<Track>> {
        self.library_tracks().await.map_err(catalog_error)
    }

    async fn list_tracks_with_details(&self) -> turntable_core::Result<Vec<Track>> {
        self.library_tracks_with_details()
            .await
            .map_err(catalog_error)
    }
}
