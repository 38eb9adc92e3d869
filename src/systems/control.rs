//! Control commands, restart and resize handling.

use bevy_ecs::prelude::*;
use tracing::{debug, info};

use crate::board::{SpawnPoints, Viewport};
use crate::clock::GameClock;
use crate::config::GameConfig;
use crate::events::{GameCommand, GameEvent};

use super::components::{
    GameStage, GlobalState, ModeFlags, Scoreboard, SpawnAnchor, SpawnTimers,
};

/// Applies commands and window geometry changes. Runs first in the frame so
/// a pause or reset takes effect before any simulation system.
#[allow(clippy::too_many_arguments)]
pub fn control_system(
    mut commands: Commands,
    mut events: EventReader<GameEvent>,
    config: Res<GameConfig>,
    mut flags: ResMut<ModeFlags>,
    mut stage: ResMut<GameStage>,
    mut clock: ResMut<GameClock>,
    mut scoreboard: ResMut<Scoreboard>,
    mut timers: ResMut<SpawnTimers>,
    mut viewport: ResMut<Viewport>,
    mut board: ResMut<SpawnPoints>,
    mut state: ResMut<GlobalState>,
    targets: Query<Entity, With<SpawnAnchor>>,
) {
    state.just_reset = false;
    for event in events.read() {
        match *event {
            GameEvent::Command(GameCommand::TogglePause) => {
                // Pausing a finished run is meaningless
                if *stage == GameStage::Playing {
                    flags.toggle(ModeFlags::PAUSED);
                    info!(paused = flags.contains(ModeFlags::PAUSED), "Pause toggled");
                }
            }
            GameEvent::Command(GameCommand::MuteAudio) => {
                flags.toggle(ModeFlags::MUTED);
                debug!(muted = flags.contains(ModeFlags::MUTED), "Mute toggled");
            }
            GameEvent::Command(GameCommand::ToggleDebug) => {
                flags.toggle(ModeFlags::DEBUG);
            }
            GameEvent::Command(GameCommand::ToggleFps) => {
                flags.toggle(ModeFlags::SHOW_FPS);
            }
            GameEvent::Command(GameCommand::Reset) => {
                reset_run(
                    &mut commands,
                    &config,
                    &mut flags,
                    &mut stage,
                    &mut clock,
                    &mut scoreboard,
                    &mut timers,
                    &targets,
                );
                state.just_reset = true;
            }
            GameEvent::Command(GameCommand::Exit) => {
                info!("Exit requested");
                state.exit = true;
            }
            GameEvent::Click { .. } => {
                // Any click on the game-over screen starts a fresh run
                if *stage == GameStage::GameOver {
                    reset_run(
                        &mut commands,
                        &config,
                        &mut flags,
                        &mut stage,
                        &mut clock,
                        &mut scoreboard,
                        &mut timers,
                        &targets,
                    );
                    state.just_reset = true;
                }
            }
            GameEvent::Resized { width, height } => {
                *viewport = Viewport::new(width, height);
                *board = SpawnPoints::for_viewport(&viewport);
                debug!(width, height, "Viewport resized");
            }
        }
    }
}

/// Despawns every target and rewinds all run state. Pending attack
/// animations die with their entities, so no stale damage can land.
#[allow(clippy::too_many_arguments)]
fn reset_run(
    commands: &mut Commands,
    config: &GameConfig,
    flags: &mut ModeFlags,
    stage: &mut GameStage,
    clock: &mut GameClock,
    scoreboard: &mut Scoreboard,
    timers: &mut SpawnTimers,
    targets: &Query<Entity, With<SpawnAnchor>>,
) {
    for entity in targets.iter() {
        commands.entity(entity).despawn();
    }
    *scoreboard = Scoreboard::new(config);
    *stage = GameStage::Playing;
    *timers = SpawnTimers::default();
    clock.reset();
    flags.remove(ModeFlags::PAUSED);
    info!("Run reset");
}
