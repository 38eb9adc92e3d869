//! Components and resources shared across systems.

use std::time::Duration;

use bevy_ecs::bundle::Bundle;
use bevy_ecs::component::Component;
use bevy_ecs::resource::Resource;
use bitflags::bitflags;
use glam::Vec2;
use rand::rngs::SmallRng;

use crate::constants::{hazard, pickup};

/// What a spawned target is. Determines timing windows, hitbox and scoring.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Hazard,
    Pickup,
}

impl TargetKind {
    pub fn spawn_anim(&self) -> Duration {
        match self {
            TargetKind::Hazard => hazard::SPAWN_ANIM,
            TargetKind::Pickup => pickup::SPAWN_ANIM,
        }
    }

    pub fn despawn_anim(&self) -> Duration {
        match self {
            TargetKind::Hazard => hazard::DESPAWN_ANIM,
            TargetKind::Pickup => pickup::DESPAWN_ANIM,
        }
    }

    /// Clickable rectangle at reference scale.
    pub fn hitbox(&self) -> Vec2 {
        match self {
            TargetKind::Hazard => hazard::HITBOX,
            TargetKind::Pickup => pickup::HITBOX,
        }
    }
}

/// Marker for hazard targets, for query filtering.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct HazardTag;

/// Marker for pickup targets, for query filtering.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct PickupTag;

/// Which spawn point a target occupies. Position is derived from this index
/// and the current viewport, so resizes never touch entities.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnAnchor(pub usize);

/// Birth time and lifetime budget, both in game time.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lifespan {
    pub born_at: Duration,
    pub budget: Duration,
}

impl Lifespan {
    pub fn age(&self, now: Duration) -> Duration {
        now.saturating_sub(self.born_at)
    }

    pub fn expired(&self, now: Duration) -> bool {
        self.age(now) >= self.budget
    }
}

/// How a target's run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Clicked by the player.
    Hit,
    /// A hazard ran out its budget and struck back.
    Attacking,
    /// A pickup ran out its budget unclaimed.
    Expired,
}

/// Lifecycle state. Transitions are driven exclusively by the game clock and
/// click dispatch; `since` stamps record when a phase was entered.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Rising out of the ground, already clickable.
    Spawning,
    Active,
    /// Outcome decided; the attack animation (if any) is still playing.
    Resolving { outcome: Outcome, since: Duration },
    /// Sinking back down. No longer clickable.
    Despawning { outcome: Outcome, since: Duration },
    /// Finished; pruned at the end of the frame.
    Dead,
}

impl Phase {
    /// Whether a click can still land on this target.
    pub fn is_hittable(&self) -> bool {
        matches!(self, Phase::Spawning | Phase::Active)
    }

    pub fn is_resolved(&self) -> bool {
        !self.is_hittable()
    }
}

/// Monotonic spawn counter, for newest-first click dispatch and stable
/// draw order.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SpawnSeq(pub u64);

#[derive(Bundle)]
pub struct TargetBundle {
    pub kind: TargetKind,
    pub anchor: SpawnAnchor,
    pub lifespan: Lifespan,
    pub phase: Phase,
    pub seq: SpawnSeq,
}

#[derive(Bundle)]
pub struct HazardBundle {
    pub target: TargetBundle,
    pub tag: HazardTag,
}

#[derive(Bundle)]
pub struct PickupBundle {
    pub target: TargetBundle,
    pub tag: PickupTag,
}

/// Score, lives and level progression for the current run.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    pub hits: u32,
    pub misses: u32,
    /// Hazard kills, the sole input to level progression.
    pub kills: u32,
    pub lives: u32,
    pub level: u32,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Scoreboard {
            hits: 0,
            misses: 0,
            kills: 0,
            lives: 0,
            level: 1,
        }
    }
}

impl Scoreboard {
    pub fn new(config: &crate::config::GameConfig) -> Self {
        Scoreboard {
            lives: config.initial_lives,
            ..Default::default()
        }
    }
}

/// Coarse run state.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum GameStage {
    #[default]
    Playing,
    GameOver,
}

bitflags! {
    /// Toggleable modes, flipped by control commands.
    #[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct ModeFlags: u8 {
        const PAUSED = 1 << 0;
        const MUTED = 1 << 1;
        const DEBUG = 1 << 2;
        const SHOW_FPS = 1 << 3;
    }
}

/// RNG for spawn decisions. Seedable for deterministic tests.
#[derive(Resource)]
pub struct SpawnRng(pub SmallRng);

/// Source of [`SpawnSeq`] values.
#[derive(Resource, Debug, Default)]
pub struct SpawnCounter(pub u64);

/// Spawner deadlines, in game time. `None` means not yet scheduled.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct SpawnTimers {
    pub next_hazard_at: Option<Duration>,
    pub next_pickup_check_at: Option<Duration>,
}

/// Flags that outlive a single frame.
#[derive(Resource, Debug, Default)]
pub struct GlobalState {
    pub exit: bool,
    /// Set for the remainder of a frame in which the run was reset, so the
    /// click that restarted the game is not also dispatched at the board.
    pub just_reset: bool,
}
