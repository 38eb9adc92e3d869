//! Time-dependent target geometry.
//!
//! A target's clickable rectangle follows its animation: hazards rise out of
//! the ground, bob while attacking and sink on despawn; pickups fade in place.
//! All functions here are pure so dispatch and rendering share one source of
//! truth.

use std::f32::consts::PI;
use std::time::Duration;

use glam::Vec2;

use super::components::{Lifespan, Outcome, Phase, TargetKind};

fn progress(since: Duration, now: Duration, window: Duration) -> f32 {
    if window.is_zero() {
        return 1.0;
    }
    (now.saturating_sub(since).as_secs_f32() / window.as_secs_f32()).clamp(0.0, 1.0)
}

/// Downward displacement from the anchor, in sprite-height units scaled by
/// `sprite_height`. Positive values sink the target into the ground.
pub fn vertical_offset(
    kind: TargetKind,
    phase: &Phase,
    lifespan: &Lifespan,
    now: Duration,
    sprite_height: f32,
) -> f32 {
    match (kind, phase) {
        // Pickups fade rather than move.
        (TargetKind::Pickup, _) => 0.0,
        (TargetKind::Hazard, Phase::Spawning) => {
            let t = progress(lifespan.born_at, now, kind.spawn_anim());
            let eased = 1.0 - (1.0 - t) * (1.0 - t);
            sprite_height * (1.0 - eased)
        }
        (TargetKind::Hazard, Phase::Active) => 0.0,
        (
            TargetKind::Hazard,
            Phase::Resolving {
                outcome: Outcome::Attacking,
                since,
            },
        ) => {
            // Lunge bob during the attack animation.
            let t = progress(*since, now, crate::constants::hazard::ATTACK_ANIM);
            -5.0 * (t * PI * 6.0).sin()
        }
        (TargetKind::Hazard, Phase::Resolving { .. }) => 0.0,
        (TargetKind::Hazard, Phase::Despawning { since, .. }) => {
            let t = progress(*since, now, kind.despawn_anim());
            sprite_height * t * t
        }
        (TargetKind::Hazard, Phase::Dead) => sprite_height,
    }
}

/// Opacity in `0.0..=1.0`. Hazards are always opaque; pickups fade in and out.
pub fn opacity(kind: TargetKind, phase: &Phase, lifespan: &Lifespan, now: Duration) -> f32 {
    match (kind, phase) {
        (TargetKind::Hazard, _) => 1.0,
        (TargetKind::Pickup, Phase::Spawning) => progress(lifespan.born_at, now, kind.spawn_anim()),
        (TargetKind::Pickup, Phase::Active) => 1.0,
        (TargetKind::Pickup, Phase::Resolving { since, .. })
        | (TargetKind::Pickup, Phase::Despawning { since, .. }) => {
            1.0 - progress(*since, now, kind.despawn_anim())
        }
        (TargetKind::Pickup, Phase::Dead) => 0.0,
    }
}

/// Clickable rectangle center and size at the current instant, in viewport
/// coordinates. `scale` is the viewport's uniform size factor.
pub fn hit_rect(
    anchor_position: Vec2,
    kind: TargetKind,
    phase: &Phase,
    lifespan: &Lifespan,
    now: Duration,
    scale: f32,
) -> (Vec2, Vec2) {
    let size = kind.hitbox() * scale;
    let offset = vertical_offset(kind, phase, lifespan, now, size.y);
    (anchor_position + Vec2::new(0.0, offset), size)
}

/// Whether `point` lands inside the target's current rectangle.
pub fn contains(
    anchor_position: Vec2,
    kind: TargetKind,
    phase: &Phase,
    lifespan: &Lifespan,
    now: Duration,
    scale: f32,
    point: Vec2,
) -> bool {
    let (center, size) = hit_rect(anchor_position, kind, phase, lifespan, now, scale);
    let delta = (point - center).abs();
    delta.x <= size.x / 2.0 && delta.y <= size.y / 2.0
}
