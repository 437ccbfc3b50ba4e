//! Playback routes and the `PlayerEngine` implementation.

use crate::client::EngineClient;
use crate::error::Result;
use crate::types::{
    FileResponse, PlayRequest, PlayingResponse, SecondsResponse, SeekRequest, VolumeRequest,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use turntable_playback::PlayerEngine;

impl EngineClient {
    /// Start playing `path` from the beginning.
    pub async fn play_file(&self, path: &Path) -> Result<()> {
        self.post_json(
            "/api/playback/play",
            &PlayRequest {
                path: path.to_path_buf(),
            },
        )
        .await
    }

    /// Toggle pause on the current file.
    pub async fn toggle_pause(&self) -> Result<()> {
        self.post_empty("/api/playback/pause").await
    }

    /// Stop playback.
    pub async fn stop_playback(&self) -> Result<()> {
        self.post_empty("/api/playback/stop").await
    }

    /// Seek to `seconds` in the current file.
    pub async fn seek_to(&self, seconds: f64) -> Result<()> {
        self.post_json("/api/playback/seek", &SeekRequest { seconds })
            .await
    }

    /// Set the output volume.
    pub async fn set_volume_level(&self, level: f64) -> Result<()> {
        self.post_json("/api/playback/volume", &VolumeRequest { level })
            .await
    }

    /// Elapsed seconds in the current file.
    pub async fn playback_position(&self) -> Result<f64> {
        let response: SecondsResponse = self.get_json("/api/playback/position").await?;
        Ok(response.seconds)
    }

    /// Duration of the current file in seconds.
    pub async fn playback_duration(&self) -> Result<f64> {
        let response: SecondsResponse = self.get_json("/api/playback/duration").await?;
        Ok(response.seconds)
    }

    /// Whether the daemon is currently playing.
    pub async fn playback_playing(&self) -> Result<bool> {
        let response: PlayingResponse = self.get_json("/api/playback/playing").await?;
        Ok(response.playing)
    }

    /// Path of the file the daemon currently holds.
    pub async fn playback_file(&self) -> Result<PathBuf> {
        let response: FileResponse = self.get_json("/api/playback/file").await?;
        Ok(response.path)
    }

    /// Tag map for the current file.
    pub async fn playback_metadata(&self) -> Result<HashMap<String, String>> {
        self.get_json("/api/playback/metadata").await
    }
}

#[async_trait]
impl PlayerEngine for EngineClient {
    async fn play(&self, path: &Path) -> turntable_core::Result<()> {
        Ok(self.play_file(path).await?)
    }

    async fn pause(&self) -> turntable_core::Result<()> {
        Ok(self.toggle_pause().await?)
    }

    async fn stop(&self) -> turntable_core::Result<()> {
        Ok(self.stop_playback().await?)
    }

    async fn seek(&self, seconds: f64) -> turntable_core::Result<()> {
        Ok(self.seek_to(seconds).await?)
    }

    async fn set_volume(&self, level: f64) -> turntable_core::Result<()> {
        Ok(self.set_volume_level(level).await?)
    }

    async fn position(&self) -> turntable_core::Result<f64> {
        Ok(self.playback_position().await?)
    }

    async fn duration(&self) -> turntable_core::Result<f64> {
        Ok(self.playback_duration().await?)
    }

    async fn is_playing(&self) -> turntable_core::Result<bool> {
        Ok(self.playback_playing().await?)
    }

    async fn current_file_path(&self) -> turntable_core::Result<PathBuf> {
        Ok(self.playback_file().await?)
    }

    async fn metadata(&self) -> turntable_core::Result<HashMap<String, String>> {
        Ok(self.playback_metadata().await?)
    }
}
