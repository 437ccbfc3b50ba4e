//! Turntable Core
//!
//! Shared types, traits, and error handling for the Turntable playback
//! client.
//!
//! This crate defines:
//! - **Domain Types**: [`Track`], [`TrackId`]
//! - **Service Traits**: [`Catalog`] (the external song catalog)
//! - **Error Handling**: unified [`CoreError`] and [`Result`] types
//!
//! The catalog itself (storage schema, import, CRUD) lives in an
//! external process; this crate only describes the read surface the
//! playback client consumes.
//!
//! # Example
//!
//! ```rust
//! use turntable_core::{Track, TrackId};
//! use std::path::PathBuf;
//!
//! let track = Track::new(TrackId(1), PathBuf::from("/music/song.flac"), "My Song");
//! assert_eq!(track.title, "My Song");
//! assert!(track.artist.is_none());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{CoreError, Result};
pub use traits::Catalog;
pub use types::{Track, TrackId};
