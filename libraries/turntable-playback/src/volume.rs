//! Volume model with mute memory
//!
//! The engine exposes a bare `set_volume(f64)` on its native scale, so
//! this module only tracks the level and the mute round-trip: muting
//! remembers the pre-mute value and snaps to a fixed low sentinel,
//! un-muting restores the remembered value exactly.

/// Level at or below which the output counts as muted
pub const MUTE_LEVEL: f64 = -5.0;

/// Volume state for a playback session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume {
    /// Current level on the engine's scale
    level: f64,

    /// Level to restore on un-mute
    previous: f64,
}

impl Volume {
    /// Create a volume at `level`
    pub fn new(level: f64) -> Self {
        Self {
            level,
            previous: level,
        }
    }

    /// Current level
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Whether the volume sits at or below the mute sentinel
    pub fn is_muted(&self) -> bool {
        self.level <= MUTE_LEVEL
    }

    /// Set the level directly (clears nothing; an explicit set while
    /// muted simply becomes the new level)
    pub fn set_level(&mut self, level: f64) {
        self.level = level;
    }

    /// Toggle mute, returning the level to hand to the engine
    pub fn toggle_mute(&mut self) -> f64 {
        if self.level > MUTE_LEVEL {
            self.previous = self.level;
            self.level = MUTE_LEVEL;
        } else {
            self.level = self.previous;
        }
        self.level
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(0.0)
    }
}
