//! Playback engine seam
//!
//! The native engine decodes and renders audio in another process; the
//! session drives it through this trait. Every call crosses a process
//! boundary and fails independently of queue/transport logic.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use turntable_core::Result;

/// Remote playback engine surface
///
/// All operations are asynchronous request/response calls. Timing
/// getters are read-only; the session caches their answers for display
/// and never derives transport state from them, except for the
/// position ≥ duration end-of-track check.
#[async_trait]
pub trait PlayerEngine: Send + Sync {
    /// Start playing the file at `path` from the beginning
    async fn play(&self, path: &Path) -> Result<()>;

    /// Toggle pause on the current file
    async fn pause(&self) -> Result<()>;

    /// Stop playback and release the current file
    async fn stop(&self) -> Result<()>;

    /// Seek to `seconds` from the start of the current file
    async fn seek(&self, seconds: f64) -> Result<()>;

    /// Set output volume on the engine's native scale
    async fn set_volume(&self, level: f64) -> Result<()>;

    /// Elapsed seconds in the current file
    async fn position(&self) -> Result<f64>;

    /// Duration of the current file in seconds
    async fn duration(&self) -> Result<f64>;

    /// Whether the engine is currently playing
    async fn is_playing(&self) -> Result<bool>;

    /// Path of the file the engine currently holds
    async fn current_file_path(&self) -> Result<PathBuf>;

    /// Tag name → value map for the current file
    async fn metadata(&self) -> Result<HashMap<String, String>>;
}
