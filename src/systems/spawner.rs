//! Timed spawning of hazards and pickups.

use std::time::Duration;

use bevy_ecs::prelude::*;
use rand::Rng;
use smallvec::SmallVec;
use tracing::debug;

use crate::board::SpawnPoints;
use crate::clock::GameClock;
use crate::config::GameConfig;
use crate::constants::spawn;

use super::components::{
    GameStage, HazardBundle, HazardTag, Lifespan, ModeFlags, Phase, PickupBundle, PickupTag,
    Scoreboard, SpawnAnchor, SpawnCounter, SpawnRng, SpawnSeq, SpawnTimers, TargetBundle,
    TargetKind,
};

/// The level-scaled hazard interval with random jitter applied, floored so
/// back-to-back spawns can never collapse to zero.
fn jittered_interval(config: &GameConfig, level: u32, rng: &mut SpawnRng) -> Duration {
    let base = config.spawn_interval(level);
    let jitter = rng.0.random_range(spawn::JITTER_MIN_MS..=spawn::JITTER_MAX_MS);
    let millis = (base.as_millis() as i64 + jitter).max(spawn::JITTER_FLOOR.as_millis() as i64);
    Duration::from_millis(millis as u64)
}

/// Spawns hazards on a jittered cadence and rolls for pickups on a fixed
/// cadence. Occupancy is derived by scanning live targets, so a spawn point
/// only frees up once its previous occupant has been pruned.
#[allow(clippy::too_many_arguments)]
pub fn spawner_system(
    mut commands: Commands,
    clock: Res<GameClock>,
    config: Res<GameConfig>,
    stage: Res<GameStage>,
    flags: Res<ModeFlags>,
    board: Res<SpawnPoints>,
    scoreboard: Res<Scoreboard>,
    mut timers: ResMut<SpawnTimers>,
    mut rng: ResMut<SpawnRng>,
    mut counter: ResMut<SpawnCounter>,
    occupants: Query<&SpawnAnchor>,
    hazards: Query<&HazardTag>,
) {
    if *stage != GameStage::Playing || flags.contains(ModeFlags::PAUSED) {
        return;
    }
    let now = clock.now();

    let mut occupied = vec![false; board.len()];
    for anchor in occupants.iter() {
        if let Some(slot) = occupied.get_mut(anchor.0) {
            *slot = true;
        }
    }
    let free = |occupied: &[bool]| -> SmallVec<[usize; 20]> {
        occupied
            .iter()
            .enumerate()
            .filter_map(|(index, &taken)| (!taken).then_some(index))
            .collect()
    };

    // Hazards: due when the jittered deadline passes, capped by concurrency.
    let due = match timers.next_hazard_at {
        Some(at) => now >= at,
        None => {
            timers.next_hazard_at = Some(now + jittered_interval(&config, scoreboard.level, &mut rng));
            false
        }
    };
    if due {
        let live_hazards = hazards.iter().count();
        let candidates = free(&occupied);
        if live_hazards < config.max_live_hazards && !candidates.is_empty() {
            let anchor = candidates[rng.0.random_range(0..candidates.len())];
            occupied[anchor] = true;
            counter.0 += 1;
            commands.spawn(HazardBundle {
                target: TargetBundle {
                    kind: TargetKind::Hazard,
                    anchor: SpawnAnchor(anchor),
                    lifespan: Lifespan {
                        born_at: now,
                        budget: config.hazard_lifetime(scoreboard.level),
                    },
                    phase: Phase::Spawning,
                    seq: SpawnSeq(counter.0),
                },
                tag: HazardTag,
            });
            debug!(anchor, level = scoreboard.level, "Hazard spawned");
        }
        // Reschedule either way; a capped frame just skips its turn.
        timers.next_hazard_at = Some(now + jittered_interval(&config, scoreboard.level, &mut rng));
    }

    // Pickups: a probability roll on a fixed cadence.
    let check_due = match timers.next_pickup_check_at {
        Some(at) => now >= at,
        None => {
            timers.next_pickup_check_at = Some(now + config.pickup_check_interval);
            false
        }
    };
    if check_due {
        if rng.0.random_bool(config.pickup_probability) {
            let candidates = free(&occupied);
            if !candidates.is_empty() {
                let anchor = candidates[rng.0.random_range(0..candidates.len())];
                counter.0 += 1;
                commands.spawn(PickupBundle {
                    target: TargetBundle {
                        kind: TargetKind::Pickup,
                        anchor: SpawnAnchor(anchor),
                        lifespan: Lifespan {
                            born_at: now,
                            budget: config.pickup_lifetime,
                        },
                        phase: Phase::Spawning,
                        seq: SpawnSeq(counter.0),
                    },
                    tag: PickupTag,
                });
                debug!(anchor, "Pickup spawned");
            }
        }
        timers.next_pickup_check_at = Some(now + config.pickup_check_interval);
    }
}
