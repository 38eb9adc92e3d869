//! Events flowing through the game world.

use std::time::Duration;

use bevy_ecs::entity::Entity;
use bevy_ecs::event::Event;
use glam::Vec2;
use strum_macros::{Display, EnumIter};

/// Discrete control actions, as delivered by whatever input frontend is
/// driving the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum GameCommand {
    TogglePause,
    MuteAudio,
    ToggleDebug,
    ToggleFps,
    Reset,
    Exit,
}

/// Outside-world input for one frame.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Command(GameCommand),
    /// A click or tap at a viewport position.
    Click { position: Vec2 },
    /// The output surface changed size.
    Resized { width: f32, height: f32 },
}

impl From<GameCommand> for GameEvent {
    fn from(command: GameCommand) -> Self {
        GameEvent::Command(command)
    }
}

/// A resolved click or expiry, produced by dispatch and lifecycle and
/// consumed by scoring.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum ScoreEvent {
    /// A hazard was whacked while hittable.
    HazardWhacked { position: Vec2, anchor: usize },
    /// A pickup was collected while hittable.
    PickupCollected { position: Vec2, anchor: usize },
    /// A click landed on nothing.
    Miss { position: Vec2 },
}

/// A hazard finished its attack animation; the player takes one hit.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageEvent {
    pub entity: Entity,
    pub anchor: usize,
}

/// Sound cues for the audio sink.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AudioEvent {
    HazardHit,
    PickupCollected,
    Miss,
    LevelUp,
    GameOver,
}

/// Outcome classes for the on-disk event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RecordKind {
    #[strum(serialize = "HIT")]
    Hit,
    #[strum(serialize = "MISS")]
    Miss,
    #[strum(serialize = "LEVEL UP")]
    LevelUp,
    #[strum(serialize = "GAME OVER")]
    GameOver,
}

/// One row of the markdown event log.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub kind: RecordKind,
    /// Viewport position for click outcomes; `None` for system rows.
    pub position: Option<Vec2>,
    pub details: String,
    /// Game time at which the record was produced.
    pub at: Duration,
}
