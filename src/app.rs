//! Headless exhibition driver.
//!
//! Runs the game at 60 FPS with a scripted player clicking targets, until the
//! run ends or the configured frame budget runs out. Useful for soak-testing
//! balance changes and for demoing the core without a frontend.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use bevy_ecs::entity::Entity;
use circular_buffer::CircularBuffer;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::constants::LOOP_TIME;
use crate::error::GameResult;
use crate::game::Game;
use crate::systems::{GameStage, TargetKind};

/// A scripted player with human-ish reaction time and imperfect aim.
struct ScriptedPlayer {
    rng: SmallRng,
    /// How old a target must be before the player reacts to it.
    reaction: Duration,
    /// Chance a reaction lands on the target rather than beside it.
    accuracy: f64,
    /// Targets already swung at, so a miss is not retried forever.
    attempted: HashSet<Entity>,
}

impl ScriptedPlayer {
    fn new(seed: u64) -> Self {
        ScriptedPlayer {
            rng: SmallRng::seed_from_u64(seed),
            reaction: Duration::from_millis(350),
            accuracy: 0.8,
            attempted: HashSet::new(),
        }
    }

    /// Pick at most one click for this frame.
    fn act(&mut self, game: &Game) -> Option<Vec2> {
        let snapshot = game.snapshot();
        let target = snapshot.targets.iter().find(|view| {
            view.phase.is_hittable()
                && view.age >= self.reaction
                && !self.attempted.contains(&view.entity)
        })?;
        self.attempted.insert(target.entity);

        // Pickups get snapped up; hazards get the accuracy roll
        let on_target = target.kind == TargetKind::Pickup || self.rng.random_bool(self.accuracy);
        if on_target {
            let jitter = Vec2::new(
                self.rng.random_range(-10.0..=10.0),
                self.rng.random_range(-10.0..=10.0),
            );
            Some(target.position + jitter)
        } else {
            // A flub lands well outside any hitbox
            Some(target.position + Vec2::new(200.0, 150.0))
        }
    }
}

pub struct App {
    game: Game,
    player: ScriptedPlayer,
}

impl App {
    pub fn new(config: GameConfig) -> GameResult<App> {
        let seed = config.rng_seed.unwrap_or(0xC0FFEE);
        Ok(App {
            game: Game::new(config)?,
            player: ScriptedPlayer::new(seed),
        })
    }

    /// Run until game over or exit. Returns the final scoreboard.
    pub fn run(&mut self) -> GameResult<()> {
        info!(
            "Starting exhibition loop ({:.3}ms per frame)",
            LOOP_TIME.as_secs_f32() * 1000.0
        );

        let mut frame_times: CircularBuffer<60, f32> = CircularBuffer::new();
        let mut tick_no = 0u64;

        loop {
            let start = Instant::now();

            if let Some(position) = self.player.act(&self.game) {
                self.game.click(position);
            }

            let exit = self.game.tick(LOOP_TIME);
            if exit {
                break;
            }
            if self.game.snapshot().stage == GameStage::GameOver {
                break;
            }

            frame_times.push_back(start.elapsed().as_secs_f32());
            tick_no += 1;
            if tick_no % 600 == 0 {
                let average: f32 =
                    frame_times.iter().sum::<f32>() / frame_times.len().max(1) as f32;
                let scoreboard = self.game.scoreboard();
                debug!(
                    tick = tick_no,
                    avg_frame_ms = average * 1000.0,
                    level = scoreboard.level,
                    lives = scoreboard.lives,
                    "Exhibition progress"
                );
            }

            let elapsed = start.elapsed();
            if elapsed < LOOP_TIME {
                spin_sleep::sleep(LOOP_TIME - elapsed);
            } else {
                warn!("Frame behind schedule by {:?}", elapsed - LOOP_TIME);
            }
        }

        let scoreboard = self.game.scoreboard();
        info!(
            hits = scoreboard.hits,
            misses = scoreboard.misses,
            level = scoreboard.level,
            "Exhibition finished"
        );
        Ok(())
    }
}
