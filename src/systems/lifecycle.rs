//! Clock-driven phase transitions and end-of-frame pruning.

use bevy_ecs::prelude::*;
use tracing::{debug, trace};

use crate::clock::GameClock;
use crate::constants::hazard;
use crate::events::DamageEvent;

use super::components::{
    GameStage, Lifespan, ModeFlags, Outcome, Phase, SpawnAnchor, TargetKind,
};

/// Walks every target through its timing windows. All comparisons are
/// against the game clock, so a paused frame advances nothing.
pub fn lifecycle_system(
    clock: Res<GameClock>,
    stage: Res<GameStage>,
    flags: Res<ModeFlags>,
    mut targets: Query<(Entity, &TargetKind, &SpawnAnchor, &Lifespan, &mut Phase)>,
    mut damage: EventWriter<DamageEvent>,
) {
    if *stage != GameStage::Playing || flags.contains(ModeFlags::PAUSED) {
        return;
    }
    let now = clock.now();

    for (entity, kind, anchor, lifespan, mut phase) in targets.iter_mut() {
        // A target can run out its budget mid-spawn; expiry wins.
        if phase.is_hittable() && lifespan.expired(now) {
            let outcome = match kind {
                TargetKind::Hazard => Outcome::Attacking,
                TargetKind::Pickup => Outcome::Expired,
            };
            *phase = Phase::Resolving { outcome, since: now };
            debug!(?entity, anchor = anchor.0, ?outcome, "Target expired");
        }

        match *phase {
            Phase::Spawning => {
                if lifespan.age(now) >= kind.spawn_anim() {
                    *phase = Phase::Active;
                    trace!(?entity, anchor = anchor.0, "Target active");
                }
            }
            Phase::Resolving {
                outcome: Outcome::Attacking,
                since,
            } => {
                // Damage lands exactly once, when the attack animation
                // completes. A reset mid-animation despawns the entity
                // before this fires.
                if now.saturating_sub(since) >= hazard::ATTACK_ANIM {
                    damage.write(DamageEvent {
                        entity,
                        anchor: anchor.0,
                    });
                    *phase = Phase::Despawning {
                        outcome: Outcome::Attacking,
                        since: now,
                    };
                    debug!(?entity, anchor = anchor.0, "Attack landed");
                }
            }
            Phase::Resolving { outcome, since } => {
                // Hit and expired targets start sinking immediately; the
                // despawn window counts from the moment of resolution.
                *phase = Phase::Despawning { outcome, since };
            }
            Phase::Despawning { since, .. } => {
                if now.saturating_sub(since) >= kind.despawn_anim() {
                    *phase = Phase::Dead;
                }
            }
            Phase::Active | Phase::Dead => {}
        }
    }
}

/// Removes dead targets. Runs after every consumer of target state, so a
/// spawn point only reads as free once its occupant is truly gone.
pub fn prune_system(mut commands: Commands, targets: Query<(Entity, &Phase)>) {
    for (entity, phase) in targets.iter() {
        if *phase == Phase::Dead {
            trace!(?entity, "Pruning dead target");
            commands.entity(entity).despawn();
        }
    }
}
