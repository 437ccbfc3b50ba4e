//! Property tests for queue construction and the transport state machine

use proptest::prelude::*;
use std::collections::HashMap;
use std::path::PathBuf;
use turntable_core::{Track, TrackId};
use turntable_playback::{
    build_queue, step_backward, step_forward, RepeatMode, StepOutcome,
};

fn collection(ids: &[i64]) -> Vec<Track> {
    ids.iter()
        .map(|&id| {
            Track::new(
                TrackId(id),
                PathBuf::from(format!("/music/{id}.mp3")),
                format!("Track {id}"),
            )
        })
        .collect()
}

fn id_multiset(tracks: &[Track]) -> HashMap<i64, usize> {
    let mut counts = HashMap::new();
    for track in tracks {
        *counts.entry(track.id.0).or_insert(0) += 1;
    }
    counts
}

fn repeat_mode() -> impl Strategy<Value = RepeatMode> {
    prop_oneof![
        Just(RepeatMode::Off),
        Just(RepeatMode::All),
        Just(RepeatMode::One),
    ]
}

proptest! {
    #[test]
    fn rotation_anchors_and_preserves_multiset(
        ids in prop::collection::hash_set(0i64..1000, 1..40),
        anchor_pick in any::<prop::sample::Index>(),
    ) {
        let ids: Vec<i64> = ids.into_iter().collect();
        let tracks = collection(&ids);
        let anchor = tracks[anchor_pick.index(tracks.len())].id;

        let queue = build_queue(&tracks, anchor, false).unwrap();

        prop_assert_eq!(queue[0].id, anchor);
        prop_assert_eq!(id_multiset(&queue), id_multiset(&tracks));
    }

    #[test]
    fn shuffle_preserves_multiset(
        ids in prop::collection::hash_set(0i64..1000, 1..40),
        anchor_pick in any::<prop::sample::Index>(),
    ) {
        let ids: Vec<i64> = ids.into_iter().collect();
        let tracks = collection(&ids);
        let anchor = tracks[anchor_pick.index(tracks.len())].id;

        let queue = build_queue(&tracks, anchor, true).unwrap();

        prop_assert_eq!(id_multiset(&queue), id_multiset(&tracks));
    }

    #[test]
    fn repeat_cycle_has_period_three(mode in repeat_mode()) {
        prop_assert_eq!(mode.cycled().cycled().cycled(), mode);
        prop_assert_ne!(mode.cycled(), mode);
    }

    #[test]
    fn forward_step_stays_in_bounds(
        len in 1usize..100,
        index_pick in any::<prop::sample::Index>(),
        mode in repeat_mode(),
        user_initiated in any::<bool>(),
    ) {
        let index = index_pick.index(len);
        let (outcome, _) = step_forward(len, index, mode, user_initiated);

        if let StepOutcome::Advance(next) = outcome {
            prop_assert!(next < len);
        }
    }

    #[test]
    fn natural_advance_under_repeat_one_is_stationary(
        len in 1usize..100,
        index_pick in any::<prop::sample::Index>(),
    ) {
        let index = index_pick.index(len);
        let (outcome, mode) = step_forward(len, index, RepeatMode::One, false);

        prop_assert_eq!(outcome, StepOutcome::Advance(index));
        prop_assert_eq!(mode, RepeatMode::One);
    }

    #[test]
    fn backward_step_never_underflows(
        len in 1usize..100,
        index_pick in any::<prop::sample::Index>(),
        mode in repeat_mode(),
    ) {
        let index = index_pick.index(len);
        let (prev, _) = step_backward(len, index, mode);

        prop_assert!(prev <= index);
        prop_assert!(index - prev <= 1);
    }

    #[test]
    fn end_is_only_reachable_under_off(
        len in 1usize..100,
        index_pick in any::<prop::sample::Index>(),
        mode in repeat_mode(),
        user_initiated in any::<bool>(),
    ) {
        let index = index_pick.index(len);
        let (outcome, effective) = step_forward(len, index, mode, user_initiated);

        if outcome == StepOutcome::End {
            prop_assert_eq!(effective, RepeatMode::Off);
            prop_assert_eq!(index, len - 1);
        }
    }
}
