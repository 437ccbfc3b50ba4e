//! Turntable - Playback Core
//!
//! Client-side queue, transport, and sort logic for the Turntable
//! player. Decides *what* should play next and *in what order* tracks
//! are presented; the audio engine and the song catalog live in other
//! processes and are reached through the [`PlayerEngine`] and
//! [`Catalog`](turntable_core::Catalog) traits.
//!
//! This crate provides:
//! - Sort spec with tri-state column toggling ([`SortSpec`])
//! - Queue construction: anchor rotation plus optional shuffle
//! - Transport state machine: next/previous under all repeat/shuffle
//!   combinations, with the one-shot RepeatOne demotion on manual skip
//! - [`PlaybackSession`]: the owned session object holding all state
//! - Volume with mute memory
//!
//! # Example: sorting and the toggle cycle
//!
//! ```rust
//! use turntable_playback::{SortKey, SortSpec};
//!
//! let spec = SortSpec::default();           // id, ascending
//! let spec = spec.toggled(SortKey::Title);  // title, ascending
//! let spec = spec.toggled(SortKey::Title);  // title, descending
//! let spec = spec.toggled(SortKey::Title);  // back to id, ascending
//! assert_eq!(spec, SortSpec::default());
//! ```
//!
//! # Example: building a queue
//!
//! ```rust
//! use turntable_playback::build_queue;
//! use turntable_core::{Track, TrackId};
//! use std::path::PathBuf;
//!
//! let collection: Vec<Track> = (1..=3)
//!     .map(|id| Track::new(TrackId(id), PathBuf::from(format!("/m/{id}.mp3")), "t"))
//!     .collect();
//!
//! let queue = build_queue(&collection, TrackId(2), false).unwrap();
//! assert_eq!(queue[0].id, TrackId(2));
//! ```

#![warn(missing_docs)]

mod engine;
mod error;
mod queue;
mod session;
mod sort;
mod transport;
pub mod types;
mod volume;

// Public exports
pub use engine::PlayerEngine;
pub use error::{PlaybackError, Result};
pub use queue::{build_queue, rotate_to, shuffle_tracks};
pub use session::PlaybackSession;
pub use sort::{sort_tracks, SortKey, SortSpec};
pub use transport::{step_backward, step_forward, StepOutcome};
pub use types::{PlaybackSource, PlaybackState, RepeatMode, SessionConfig};
pub use volume::{Volume, MUTE_LEVEL};
