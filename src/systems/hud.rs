//! Per-frame render snapshot.
//!
//! Rendering lives outside this crate; each frame the world is condensed
//! into a plain-data snapshot a frontend can draw without touching the ECS.

use std::time::Duration;

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::board::{SpawnPoints, Viewport};
use crate::clock::GameClock;

use super::components::{
    GameStage, Lifespan, ModeFlags, Phase, Scoreboard, SpawnAnchor, SpawnSeq, TargetKind,
};
use super::hitbox;

/// One drawable target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetView {
    pub entity: Entity,
    pub kind: TargetKind,
    pub phase: Phase,
    /// Anchor position in viewport coordinates.
    pub position: Vec2,
    /// Downward displacement of the sprite at this instant.
    pub vertical_offset: f32,
    pub opacity: f32,
    /// Fraction of the lifetime budget left, zero once resolved.
    pub remaining: f32,
    pub age: Duration,
    pub anchor: usize,
}

/// Everything a frontend needs to draw one frame.
#[derive(Resource, Debug, Default, Clone)]
pub struct FrameSnapshot {
    /// Draw order: oldest spawn first.
    pub targets: Vec<TargetView>,
    pub scoreboard: Scoreboard,
    pub stage: GameStage,
    pub flags: ModeFlags,
    pub now: Duration,
}

pub fn snapshot_system(
    clock: Res<GameClock>,
    board: Res<SpawnPoints>,
    viewport: Res<Viewport>,
    scoreboard: Res<Scoreboard>,
    stage: Res<GameStage>,
    flags: Res<ModeFlags>,
    targets: Query<(
        Entity,
        &TargetKind,
        &SpawnAnchor,
        &Lifespan,
        &Phase,
        &SpawnSeq,
    )>,
    mut snapshot: ResMut<FrameSnapshot>,
) {
    let now = clock.now();
    let scale = viewport.factor();

    let mut views: Vec<(u64, TargetView)> = targets
        .iter()
        .filter_map(|(entity, kind, anchor, lifespan, phase, seq)| {
            let point = board.get(anchor.0)?;
            let sprite_height = kind.hitbox().y * scale;
            let remaining = if phase.is_resolved() || lifespan.budget.is_zero() {
                0.0
            } else {
                1.0 - (lifespan.age(now).as_secs_f32() / lifespan.budget.as_secs_f32()).min(1.0)
            };
            Some((
                seq.0,
                TargetView {
                    entity,
                    kind: *kind,
                    phase: *phase,
                    position: point.position,
                    vertical_offset: hitbox::vertical_offset(*kind, phase, lifespan, now, sprite_height),
                    opacity: hitbox::opacity(*kind, phase, lifespan, now),
                    remaining,
                    age: lifespan.age(now),
                    anchor: anchor.0,
                },
            ))
        })
        .collect();
    views.sort_by_key(|(seq, _)| *seq);

    snapshot.targets = views.into_iter().map(|(_, view)| view).collect();
    snapshot.scoreboard = *scoreboard;
    snapshot.stage = *stage;
    snapshot.flags = *flags;
    snapshot.now = now;
}
