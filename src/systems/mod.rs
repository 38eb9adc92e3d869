//! ECS systems and their shared components.

pub mod audio;
pub mod components;
pub mod control;
pub mod event_log;
pub mod hitbox;
pub mod hud;
pub mod input;
pub mod lifecycle;
pub mod scoring;
pub mod spawner;

pub use audio::{audio_system, AudioOutput, AudioSink, NullSink};
pub use components::{
    GameStage, GlobalState, HazardTag, Lifespan, ModeFlags, Outcome, Phase, PickupTag, Scoreboard,
    SpawnAnchor, SpawnCounter, SpawnRng, SpawnSeq, SpawnTimers, TargetKind,
};
pub use control::control_system;
pub use event_log::{event_log_system, EventLog};
pub use hud::{snapshot_system, FrameSnapshot, TargetView};
pub use input::click_system;
pub use lifecycle::{lifecycle_system, prune_system};
pub use scoring::scoring_system;
pub use spawner::spawner_system;
