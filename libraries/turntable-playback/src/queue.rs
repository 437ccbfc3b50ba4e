//! Queue construction
//!
//! Builds the ordered play queue from a sorted collection: a cyclic
//! rotation anchored at the chosen track, optionally shuffled.

use crate::error::{PlaybackError, Result};
use rand::seq::SliceRandom;
use rand::thread_rng;
use turntable_core::{Track, TrackId};

/// Build a play queue from `collection`, anchored at `anchor`
///
/// Rotates the collection so the anchor lands at index 0, which makes
/// position 0 "now playing" without a separate index into the unrotated
/// list. With `shuffled`, a random permutation is applied to the
/// rotated result; the anchor is then no longer guaranteed to stay at
/// index 0.
///
/// An anchor absent from the collection is an error.
pub fn build_queue(collection: &[Track], anchor: TrackId, shuffled: bool) -> Result<Vec<Track>> {
    if collection.is_empty() {
        return Err(PlaybackError::EmptyCollection);
    }

    let mut queue = rotate_to(collection, anchor)?;
    if shuffled {
        shuffle_tracks(&mut queue);
    }

    Ok(queue)
}

/// Rotate `collection` so the track with `anchor` id is first
pub fn rotate_to(collection: &[Track], anchor: TrackId) -> Result<Vec<Track>> {
    let position = collection
        .iter()
        .position(|t| t.id == anchor)
        .ok_or(PlaybackError::AnchorNotFound(anchor))?;

    let mut queue = Vec::with_capacity(collection.len());
    queue.extend_from_slice(&collection[position..]);
    queue.extend_from_slice(&collection[..position]);
    Ok(queue)
}

/// Fisher-Yates shuffle over a track slice
pub fn shuffle_tracks(tracks: &mut [Track]) {
    let mut rng = thread_rng();
    tracks.shuffle(&mut rng);
}
