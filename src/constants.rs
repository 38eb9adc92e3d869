//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::Vec2;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The reference playfield size, in pixels. Spawn positions and hitboxes are
/// authored against this size and scaled to the live viewport.
pub const BASE_SIZE: Vec2 = Vec2::new(960.0, 540.0);

/// Playfield layout: the fixed grid of spawn points.
pub mod playfield {
    /// Hole radius at reference scale.
    pub const SPAWN_RADIUS: f32 = 30.0;

    /// Spawn point centers at reference scale, 5 columns by 4 rows, aligned
    /// with the graves of the background art. A spawn point's identity is its
    /// index in this sequence.
    pub const SPAWN_GRID: [(f32, f32); 20] = [
        (165.0, 75.0),
        (325.0, 75.0),
        (475.0, 75.0),
        (635.0, 75.0),
        (790.0, 75.0),
        (165.0, 190.0),
        (325.0, 190.0),
        (475.0, 190.0),
        (635.0, 190.0),
        (790.0, 190.0),
        (165.0, 305.0),
        (325.0, 305.0),
        (475.0, 305.0),
        (635.0, 305.0),
        (790.0, 305.0),
        (165.0, 415.0),
        (325.0, 415.0),
        (475.0, 415.0),
        (635.0, 415.0),
        (790.0, 415.0),
    ];
}

/// Hazard (zombie) timing and geometry.
pub mod hazard {
    use std::time::Duration;

    use glam::Vec2;

    /// Rise-out-of-the-ground window after birth.
    pub const SPAWN_ANIM: Duration = Duration::from_millis(150);
    /// Sink-back-down window after resolution.
    pub const DESPAWN_ANIM: Duration = Duration::from_millis(250);
    /// Attack animation length. Damage lands when this completes, not when
    /// the attack starts.
    pub const ATTACK_ANIM: Duration = Duration::from_millis(300);

    /// Clickable rectangle at reference scale (80x70 sprite at 1.35x).
    pub const HITBOX: Vec2 = Vec2::new(108.0, 94.0);

    /// Lifetime budget at level 1.
    pub const BASE_LIFETIME: Duration = Duration::from_millis(2000);
    /// Lifetime budget floor, regardless of level.
    pub const MIN_LIFETIME: Duration = Duration::from_millis(500);
    /// Lifetime shaved off per level past the first.
    pub const LIFETIME_DECREASE: Duration = Duration::from_millis(100);
}

/// Pickup (brain) timing and geometry.
pub mod pickup {
    use std::time::Duration;

    use glam::Vec2;

    /// Fade-in window after birth.
    pub const SPAWN_ANIM: Duration = Duration::from_millis(200);
    /// Fade-out window after resolution or expiry.
    pub const DESPAWN_ANIM: Duration = Duration::from_millis(300);

    /// Clickable rectangle at reference scale.
    pub const HITBOX: Vec2 = Vec2::new(48.0, 48.0);

    /// How long an unclaimed pickup stays up.
    pub const LIFETIME: Duration = Duration::from_millis(1000);
    /// Cadence of spawn attempts.
    pub const CHECK_INTERVAL: Duration = Duration::from_millis(4000);
    /// Chance that a due spawn attempt actually spawns.
    pub const PROBABILITY: f64 = 0.25;
}

/// Hazard spawn cadence.
pub mod spawn {
    use std::time::Duration;

    /// Spawn interval at level 1.
    pub const BASE_INTERVAL: Duration = Duration::from_millis(1000);
    /// Spawn interval floor, regardless of level.
    pub const MIN_INTERVAL: Duration = Duration::from_millis(500);
    /// Interval shaved off per level past the first.
    pub const LEVEL_DECREASE: Duration = Duration::from_millis(50);

    /// Cadence jitter range, in milliseconds.
    pub const JITTER_MIN_MS: i64 = -150;
    pub const JITTER_MAX_MS: i64 = 220;
    /// Hard floor for the jittered interval.
    pub const JITTER_FLOOR: Duration = Duration::from_millis(200);
}

/// Level progression.
pub mod level {
    pub const MAX: u32 = 10;
    /// Hazard kills needed per level step.
    pub const KILLS_PER_LEVEL: u32 = 10;
}

/// Lives.
pub mod lives {
    pub const INITIAL: u32 = 3;
    pub const MAX: u32 = 10;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_time() {
        // 60 FPS, ~16.67ms per frame
        let expected_nanos = (1_000_000_000.0 / 60.0) as u64;
        assert_eq!(LOOP_TIME.as_nanos() as u64, expected_nanos);
    }

    #[test]
    fn test_spawn_grid_dimensions() {
        assert_eq!(playfield::SPAWN_GRID.len(), 20);

        // 5 columns by 4 rows: each row shares a y coordinate
        for row in playfield::SPAWN_GRID.chunks(5) {
            let y = row[0].1;
            assert!(row.iter().all(|&(_, py)| py == y));
        }
    }

    #[test]
    fn test_spawn_grid_within_playfield() {
        for &(x, y) in playfield::SPAWN_GRID.iter() {
            assert!(x > 0.0 && x < BASE_SIZE.x);
            assert!(y > 0.0 && y < BASE_SIZE.y);
        }
    }

    #[test]
    fn test_lifetime_stays_above_floor_at_max_level() {
        let at_max = hazard::BASE_LIFETIME - hazard::LIFETIME_DECREASE * (level::MAX - 1);
        assert!(at_max >= hazard::MIN_LIFETIME);
    }

    #[test]
    fn test_interval_stays_above_floor_at_max_level() {
        let at_max = spawn::BASE_INTERVAL - spawn::LEVEL_DECREASE * (level::MAX - 1);
        assert!(at_max >= spawn::MIN_INTERVAL);
    }

    #[test]
    fn test_attack_animation_fits_in_min_lifetime() {
        assert!(hazard::ATTACK_ANIM < hazard::MIN_LIFETIME);
    }
}
