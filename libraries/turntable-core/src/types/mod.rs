//! Domain types shared across the Turntable client

mod track;

pub use track::{Track, TrackId};
