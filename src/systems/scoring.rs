//! Score, lives and level progression.

use bevy_ecs::prelude::*;
use tracing::{debug, info};

use crate::clock::GameClock;
use crate::config::GameConfig;
use crate::events::{AudioEvent, DamageEvent, LogRecord, RecordKind, ScoreEvent};

use super::components::{GameStage, Scoreboard};

/// Folds the frame's score and damage events into the scoreboard. Runs after
/// dispatch and lifecycle so a hit and an attack landing on the same frame
/// are both counted.
pub fn scoring_system(
    clock: Res<GameClock>,
    config: Res<GameConfig>,
    mut scoreboard: ResMut<Scoreboard>,
    mut stage: ResMut<GameStage>,
    mut score_events: EventReader<ScoreEvent>,
    mut damage_events: EventReader<DamageEvent>,
    mut audio: EventWriter<AudioEvent>,
    mut log: EventWriter<LogRecord>,
) {
    let now = clock.now();

    for event in score_events.read() {
        match *event {
            ScoreEvent::HazardWhacked { .. } => {
                scoreboard.hits += 1;
                scoreboard.kills += 1;

                let reached = config
                    .max_level
                    .min(1 + scoreboard.kills / config.kills_per_level);
                if reached > scoreboard.level {
                    scoreboard.level = reached;
                    scoreboard.lives = (scoreboard.lives + 1).min(config.max_lives);
                    info!(level = reached, lives = scoreboard.lives, "Level up");
                    audio.write(AudioEvent::LevelUp);
                    log.write(LogRecord {
                        kind: RecordKind::LevelUp,
                        position: None,
                        details: format!("Reached level {reached}"),
                        at: now,
                    });
                }
            }
            ScoreEvent::PickupCollected { .. } => {
                scoreboard.lives = (scoreboard.lives + 1).min(config.max_lives);
                debug!(lives = scoreboard.lives, "Extra life collected");
            }
            ScoreEvent::Miss { .. } => {
                scoreboard.misses += 1;
            }
        }
    }

    for event in damage_events.read() {
        scoreboard.lives = scoreboard.lives.saturating_sub(1);
        debug!(anchor = event.anchor, lives = scoreboard.lives, "Player hit");

        if scoreboard.lives == 0 && *stage == GameStage::Playing {
            *stage = GameStage::GameOver;
            info!(
                hits = scoreboard.hits,
                misses = scoreboard.misses,
                level = scoreboard.level,
                "Game over"
            );
            audio.write(AudioEvent::GameOver);
            log.write(LogRecord {
                kind: RecordKind::GameOver,
                position: None,
                details: format!(
                    "Final score {} hits, {} misses, level {}",
                    scoreboard.hits, scoreboard.misses, scoreboard.level
                ),
                at: now,
            });
        }
    }
}
