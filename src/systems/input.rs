//! Click dispatch.

use bevy_ecs::prelude::*;
use tracing::debug;

use crate::board::{SpawnPoints, Viewport};
use crate::clock::GameClock;
use crate::events::{AudioEvent, GameEvent, LogRecord, RecordKind, ScoreEvent};

use super::components::{
    GameStage, GlobalState, HazardTag, Lifespan, ModeFlags, Outcome, Phase, PickupTag, SpawnAnchor,
    SpawnSeq, TargetKind,
};
use super::hitbox;

type TargetData = (
    Entity,
    &'static SpawnAnchor,
    &'static Lifespan,
    &'static mut Phase,
    &'static SpawnSeq,
);

type PickupQuery<'w, 's> = Query<'w, 's, TargetData, (With<PickupTag>, Without<HazardTag>)>;
type HazardQuery<'w, 's> = Query<'w, 's, TargetData, (With<HazardTag>, Without<PickupTag>)>;

/// A hittable candidate snapshot, ordered for dispatch.
struct Candidate {
    kind: TargetKind,
    entity: Entity,
    anchor: usize,
    lifespan: Lifespan,
    phase: Phase,
    seq: u64,
}

fn collect<F: bevy_ecs::query::QueryFilter>(
    kind: TargetKind,
    query: &Query<TargetData, F>,
) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = query
        .iter()
        .filter(|(_, _, _, phase, _)| phase.is_hittable())
        .map(|(entity, anchor, lifespan, phase, seq)| Candidate {
            kind,
            entity,
            anchor: anchor.0,
            lifespan: *lifespan,
            phase: *phase,
            seq: seq.0,
        })
        .collect();
    // Newest first: the most recent spawn sits on top visually
    candidates.sort_by(|a, b| b.seq.cmp(&a.seq));
    candidates
}

/// Resolves clicks against live targets. Pickups are checked before hazards,
/// newest spawn first within each group, and a click resolves at most one
/// target. Anything else is a miss.
#[allow(clippy::too_many_arguments)]
pub fn click_system(
    clock: Res<GameClock>,
    stage: Res<GameStage>,
    flags: Res<ModeFlags>,
    state: Res<GlobalState>,
    board: Res<SpawnPoints>,
    viewport: Res<Viewport>,
    mut events: EventReader<GameEvent>,
    mut pickups: PickupQuery,
    mut hazards: HazardQuery,
    mut score: EventWriter<ScoreEvent>,
    mut audio: EventWriter<AudioEvent>,
    mut log: EventWriter<LogRecord>,
) {
    let now = clock.now();
    let scale = viewport.factor();

    for event in events.read() {
        let GameEvent::Click { position } = *event else {
            continue;
        };
        // Game-over clicks restart via the control system; paused clicks
        // and the click that triggered a restart are swallowed.
        if *stage != GameStage::Playing
            || flags.contains(ModeFlags::PAUSED)
            || state.just_reset
        {
            continue;
        }

        let mut candidates = collect(TargetKind::Pickup, &pickups);
        candidates.extend(collect(TargetKind::Hazard, &hazards));

        let hit = candidates.into_iter().find(|candidate| {
            board.get(candidate.anchor).is_some_and(|point| {
                hitbox::contains(
                    point.position,
                    candidate.kind,
                    &candidate.phase,
                    &candidate.lifespan,
                    now,
                    scale,
                    position,
                )
            })
        });

        let Some(candidate) = hit else {
            score.write(ScoreEvent::Miss { position });
            audio.write(AudioEvent::Miss);
            log.write(LogRecord {
                kind: RecordKind::Miss,
                position: Some(position),
                details: "Nothing there".to_owned(),
                at: now,
            });
            continue;
        };

        let resolved = Phase::Resolving {
            outcome: Outcome::Hit,
            since: now,
        };
        match candidate.kind {
            TargetKind::Pickup => {
                if let Ok((_, _, _, mut phase, _)) = pickups.get_mut(candidate.entity) {
                    *phase = resolved;
                }
                debug!(entity = ?candidate.entity, anchor = candidate.anchor, "Pickup collected");
                score.write(ScoreEvent::PickupCollected {
                    position,
                    anchor: candidate.anchor,
                });
                audio.write(AudioEvent::PickupCollected);
                log.write(LogRecord {
                    kind: RecordKind::Hit,
                    position: Some(position),
                    details: format!("Brain collected at spawn {}", candidate.anchor),
                    at: now,
                });
            }
            TargetKind::Hazard => {
                if let Ok((_, _, _, mut phase, _)) = hazards.get_mut(candidate.entity) {
                    *phase = resolved;
                }
                debug!(entity = ?candidate.entity, anchor = candidate.anchor, "Hazard whacked");
                score.write(ScoreEvent::HazardWhacked {
                    position,
                    anchor: candidate.anchor,
                });
                audio.write(AudioEvent::HazardHit);
                log.write(LogRecord {
                    kind: RecordKind::Hit,
                    position: Some(position),
                    details: format!("Zombie whacked at spawn {}", candidate.anchor),
                    at: now,
                });
            }
        }
    }
}
