//! Transport state machine
//!
//! Pure step functions over `(queue length, index, repeat mode)`. The
//! session owns the state; these functions only compute transitions, so
//! the one-shot RepeatOne demotion shows up in the return value instead
//! of hidden mutation.
//!
//! Callers guarantee a non-empty queue; stepping with no queue is
//! reported at the session level as `NoActiveQueue`.

use crate::types::RepeatMode;

/// Result of a forward step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Play the track at this index (may equal the current index under
    /// RepeatOne)
    Advance(usize),

    /// Queue exhausted under `RepeatMode::Off`; caller stops playback
    /// and clears state
    End,
}

/// Compute the next queue index
///
/// `user_initiated` distinguishes an explicit skip from a natural
/// end-of-track advance. Under RepeatOne a natural advance replays the
/// current index; an explicit skip demotes the mode to RepeatAll and
/// advances, so manual navigation is never trapped on one track.
/// Overflow wraps to 0 under RepeatAll and ends the queue under Off.
pub fn step_forward(
    len: usize,
    index: usize,
    repeat: RepeatMode,
    user_initiated: bool,
) -> (StepOutcome, RepeatMode) {
    debug_assert!(len > 0, "transport stepped without a queue");
    debug_assert!(index < len);

    let repeat = match repeat {
        RepeatMode::One if !user_initiated => return (StepOutcome::Advance(index), RepeatMode::One),
        RepeatMode::One => RepeatMode::All,
        other => other,
    };

    let next = index + 1;
    if next < len {
        (StepOutcome::Advance(next), repeat)
    } else if repeat == RepeatMode::All {
        (StepOutcome::Advance(0), repeat)
    } else {
        (StepOutcome::End, repeat)
    }
}

/// Compute the previous queue index
///
/// Clamps at the first track: there is no backward wraparound. Always
/// user-initiated, so RepeatOne demotes to RepeatAll here too.
pub fn step_backward(len: usize, index: usize, repeat: RepeatMode) -> (usize, RepeatMode) {
    debug_assert!(len > 0, "transport stepped without a queue");
    debug_assert!(index < len);

    let repeat = if repeat == RepeatMode::One {
        RepeatMode::All
    } else {
        repeat
    };

    (index.saturating_sub(1), repeat)
}
