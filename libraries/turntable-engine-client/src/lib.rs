//! Turntable - Engine Client
//!
//! HTTP client for the playback daemon: the native process that decodes
//! and renders audio and serves the song catalog. Implements the
//! [`PlayerEngine`](turntable_playback::PlayerEngine) and
//! [`Catalog`](turntable_core::Catalog) traits over the daemon's
//! `/api/playback` and `/api/library` routes, so a
//! [`PlaybackSession`](turntable_playback::PlaybackSession) can be
//! driven against a live daemon with no other glue.
//!
//! # Example
//!
//! ```ignore
//! use turntable_engine_client::EngineClient;
//! use turntable_playback::{PlaybackSession, SessionConfig};
//!
//! let client = EngineClient::new("http://127.0.0.1:4533")?;
//! let session = PlaybackSession::new(client.clone(), client, SessionConfig::default());
//! ```

#![warn(missing_docs)]

mod client;
mod error;
mod library;
mod playback;
pub mod types;

pub use client::EngineClient;
pub use error::{ClientError, Result};
pub use types::ServerInfo;
