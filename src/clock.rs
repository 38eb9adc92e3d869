//! Pause-aware game time.

use std::time::Duration;

use bevy_ecs::resource::Resource;

/// Accumulated simulation time. Advances only when the tick loop feeds it a
/// delta, so pausing the game simply stops feeding it. All lifecycle timing
/// reads this clock, never wall time.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GameClock {
    elapsed: Duration,
}

impl GameClock {
    /// Current simulation time since the run started.
    pub fn now(&self) -> Duration {
        self.elapsed
    }

    /// Advance by one frame's delta. `Duration` is unsigned, so the clock is
    /// monotonic by construction.
    pub fn advance(&mut self, dt: Duration) {
        self.elapsed += dt;
    }

    /// Rewind to zero for a fresh run.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}
