//! Playback session - core orchestration
//!
//! Owns the queue, transport position, sort spec, and cached display
//! state, and drives the remote engine. All mutation goes through
//! `&mut self` methods, so a session has a single writer and no two
//! engine round-trips interleave against the same state.

use crate::{
    engine::PlayerEngine,
    error::{PlaybackError, Result},
    queue::{self, shuffle_tracks},
    sort::{sort_tracks, SortKey, SortSpec},
    transport::{self, StepOutcome},
    types::{PlaybackSource, PlaybackState, RepeatMode, SessionConfig},
    volume::Volume,
};
use tracing::{debug, info, warn};
use turntable_core::{Catalog, Track, TrackId};

/// Client-side playback session
///
/// Composition root for the queue/transport/sort core: resolves a
/// collection from the catalog, derives the play queue, and issues
/// engine commands for every user intent. Engine calls are suspension
/// points; queue and position are committed only after the engine call
/// succeeds, so a failed call leaves the session stale but consistent.
pub struct PlaybackSession<E, C> {
    engine: E,
    catalog: C,

    state: PlaybackState,
    volume: Volume,
    sort_spec: SortSpec,

    // Play order; rebuilt wholesale on begin_playback, never patched
    queue: Vec<Track>,

    // Rotation of the sort-ordered collection captured when shuffle was
    // last toggled; restores deterministic order on shuffle-off
    unshuffled: Vec<Track>,

    queue_index: usize,
}

impl<E, C> PlaybackSession<E, C>
where
    E: PlayerEngine,
    C: Catalog,
{
    /// Create a session over an engine and a catalog
    pub fn new(engine: E, catalog: C, config: SessionConfig) -> Self {
        let state = PlaybackState {
            shuffle: config.shuffle,
            repeat: config.repeat,
            ..PlaybackState::default()
        };

        Self {
            engine,
            catalog,
            state,
            volume: Volume::new(config.volume),
            sort_spec: SortSpec::default(),
            queue: Vec::new(),
            unshuffled: Vec::new(),
            queue_index: 0,
        }
    }

    // ===== Playback Control =====

    /// Begin playback of `anchor` from `source`
    ///
    /// Resolves the source collection, sorts it by the current spec,
    /// builds a queue rotated to the anchor (shuffled if shuffle is
    /// on), and starts the engine on the queue head. On success the
    /// display state is re-queried from the engine rather than assumed.
    pub async fn begin_playback(&mut self, anchor: TrackId, source: PlaybackSource) -> Result<()> {
        let mut tracks = match source {
            PlaybackSource::Library => self.catalog.list_tracks_with_details().await?,
            other @ PlaybackSource::Playlist { .. } => {
                return Err(PlaybackError::UnsupportedSource(other));
            }
        };

        if tracks.is_empty() {
            return Err(PlaybackError::EmptyCollection);
        }

        sort_tracks(&mut tracks, self.sort_spec);

        let unshuffled = queue::rotate_to(&tracks, anchor)?;
        let mut new_queue = unshuffled.clone();
        if self.state.shuffle {
            shuffle_tracks(&mut new_queue);
        }

        // After shuffling the anchor may no longer sit at index 0; the
        // queue head is treated as current either way (inherited).
        self.engine.play(&new_queue[0].path).await?;

        info!(track = %new_queue[0].id, queue_len = new_queue.len(), "began playback");

        self.queue = new_queue;
        self.unshuffled = unshuffled;
        self.queue_index = 0;
        self.state.current_track = Some(self.queue[0].clone());
        self.state.playing = true;
        self.refresh_after_transition().await;
        Ok(())
    }

    /// Step to the next track
    ///
    /// `user_initiated` marks an explicit skip; a natural end-of-track
    /// advance passes `false` so RepeatOne replays the current track.
    /// Exhausting the queue under `RepeatMode::Off` stops the engine
    /// and clears playback state.
    pub async fn next(&mut self, user_initiated: bool) -> Result<()> {
        if self.queue.is_empty() {
            return Err(PlaybackError::NoActiveQueue);
        }

        let (outcome, repeat) = transport::step_forward(
            self.queue.len(),
            self.queue_index,
            self.state.repeat,
            user_initiated,
        );

        match outcome {
            StepOutcome::Advance(index) => self.play_at(index, repeat).await,
            StepOutcome::End => {
                self.engine.stop().await?;
                info!("queue exhausted, playback stopped");
                self.state.repeat = repeat;
                self.clear_playback();
                Ok(())
            }
        }
    }

    /// Step to the previous track
    ///
    /// Clamps at the first track; never wraps backward.
    pub async fn previous(&mut self) -> Result<()> {
        if self.queue.is_empty() {
            return Err(PlaybackError::NoActiveQueue);
        }

        let (index, repeat) =
            transport::step_backward(self.queue.len(), self.queue_index, self.state.repeat);
        self.play_at(index, repeat).await
    }

    /// Internal: play the queue entry at `index`, then commit position
    /// and repeat mode
    async fn play_at(&mut self, index: usize, repeat: RepeatMode) -> Result<()> {
        let path = self.queue[index].path.clone();
        self.engine.play(&path).await?;

        debug!(index, track = %self.queue[index].id, "stepped to track");

        self.queue_index = index;
        self.state.repeat = repeat;
        self.state.current_track = Some(self.queue[index].clone());
        self.state.playing = true;
        self.refresh_after_transition().await;
        Ok(())
    }

    /// Toggle pause on the engine
    pub async fn toggle_playback(&mut self) -> Result<()> {
        self.engine.pause().await?;

        match self.engine.is_playing().await {
            Ok(playing) => self.state.playing = playing,
            Err(err) => warn!(error = %err, "could not re-read playing flag"),
        }
        Ok(())
    }

    /// Seek to `seconds` in the current track
    pub async fn seek(&mut self, seconds: f64) -> Result<()> {
        self.engine.seek(seconds).await?;

        match self.engine.position().await {
            Ok(position) => self.state.position = Some(position),
            Err(err) => warn!(error = %err, "could not re-read position after seek"),
        }
        Ok(())
    }

    /// Stop playback and clear all playback state
    pub async fn stop(&mut self) -> Result<()> {
        self.engine.stop().await?;
        self.clear_playback();
        Ok(())
    }

    // ===== Shuffle, Repeat, Sort =====

    /// Toggle shuffle on the live queue
    ///
    /// Enabling captures the current (unshuffled) rotation, re-centers
    /// it on the current track, and shuffles. Disabling rotates the
    /// preserved unshuffled order back to the current track. With no
    /// queue built this is a no-op.
    pub fn toggle_shuffle(&mut self) -> Result<()> {
        if self.queue.is_empty() {
            return Ok(());
        }

        let current = match &self.state.current_track {
            Some(track) => track.id,
            None => self.queue[self.queue_index].id,
        };

        if self.state.shuffle {
            let restored = queue::rotate_to(&self.unshuffled, current)?;
            self.unshuffled = restored.clone();
            self.queue = restored;
        } else {
            let rotated = queue::rotate_to(&self.queue, current)?;
            self.unshuffled = rotated.clone();
            let mut shuffled = rotated;
            shuffle_tracks(&mut shuffled);
            self.queue = shuffled;
        }

        self.queue_index = 0;
        self.state.shuffle = !self.state.shuffle;
        debug!(shuffle = self.state.shuffle, "shuffle toggled");
        Ok(())
    }

    /// Advance the repeat mode: Off → All → One → Off
    pub fn cycle_repeat(&mut self) -> RepeatMode {
        self.state.repeat = self.state.repeat.cycled();
        self.state.repeat
    }

    /// Apply a user selection of a sort column
    ///
    /// Only the spec changes here; the live queue is left alone so an
    /// in-progress shuffle is not disrupted. The new order takes effect
    /// on the next `begin_playback`.
    pub fn select_sort_key(&mut self, key: SortKey) -> SortSpec {
        self.sort_spec = self.sort_spec.toggled(key);
        self.sort_spec
    }

    // ===== Volume =====

    /// Set the engine volume
    pub async fn set_volume(&mut self, level: f64) -> Result<()> {
        self.engine.set_volume(level).await?;
        self.volume.set_level(level);
        Ok(())
    }

    /// Toggle mute, restoring the remembered level on un-mute
    pub async fn toggle_mute(&mut self) -> Result<()> {
        let mut volume = self.volume;
        let target = volume.toggle_mute();

        self.engine.set_volume(target).await?;
        self.volume = volume;
        Ok(())
    }

    /// Current volume level
    pub fn volume(&self) -> f64 {
        self.volume.level()
    }

    /// Whether the session is muted
    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    // ===== State Queries =====

    /// Re-query the engine and apply the answers as one snapshot
    ///
    /// Fetches path, position, duration, metadata, and the playing
    /// flag; nothing is applied unless every read succeeds, so a
    /// partially failed refresh never leaves mixed old/new values.
    /// Returns `true` when the engine reports the track has played to
    /// completion (position has reached duration).
    pub async fn refresh(&mut self) -> Result<bool> {
        let file_path = self.engine.current_file_path().await?;
        let position = self.engine.position().await?;
        let duration = self.engine.duration().await?;
        let metadata = self.engine.metadata().await?;
        let playing = self.engine.is_playing().await?;

        self.state.file_path = Some(file_path);
        self.state.position = Some(position);
        self.state.duration = Some(duration);
        self.state.metadata = metadata;
        self.state.playing = playing;

        Ok(duration > 0.0 && position >= duration)
    }

    /// Cached display/transport state
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Current play queue
    pub fn queue(&self) -> &[Track] {
        &self.queue
    }

    /// Position within the queue
    pub fn queue_index(&self) -> usize {
        self.queue_index
    }

    /// Current sort criteria
    pub fn sort_spec(&self) -> SortSpec {
        self.sort_spec
    }

    // ===== Internal =====

    /// Refresh after a transition; a failure here leaves the previous
    /// cached values in place rather than failing the transition
    async fn refresh_after_transition(&mut self) {
        if let Err(err) = self.refresh().await {
            warn!(error = %err, "state refresh failed after transition");
        }
    }

    /// Reset playback state to empty; user settings (volume, shuffle,
    /// repeat) survive
    fn clear_playback(&mut self) {
        self.state.current_track = None;
        self.state.file_path = None;
        self.state.metadata.clear();
        self.state.position = None;
        self.state.duration = None;
        self.state.playing = false;
        self.queue.clear();
        self.unshuffled.clear();
        self.queue_index = 0;
    }
}
