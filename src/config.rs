//! Runtime configuration for a game session.

use std::path::PathBuf;
use std::time::Duration;

use bevy_ecs::resource::Resource;

use crate::constants::{hazard, level, lives, pickup, spawn};
use crate::error::ConfigError;

/// Tunable parameters for one game session. Defaults reproduce the stock
/// arcade balance; tests and the exhibition driver override individual fields.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    pub initial_lives: u32,
    pub max_lives: u32,
    pub max_level: u32,
    /// Hazard kills required per level step.
    pub kills_per_level: u32,

    /// Hazard spawn interval at level 1, shrinking per level.
    pub base_spawn_interval: Duration,
    pub min_spawn_interval: Duration,
    pub spawn_interval_decrease: Duration,

    /// Hazard lifetime budget at level 1, shrinking per level.
    pub base_lifetime: Duration,
    pub min_lifetime: Duration,
    pub lifetime_decrease: Duration,

    /// How many unresolved hazards may exist at once.
    pub max_live_hazards: usize,

    pub pickup_check_interval: Duration,
    pub pickup_probability: f64,
    pub pickup_lifetime: Duration,

    /// Where to write the markdown event log. `None` disables logging.
    pub log_path: Option<PathBuf>,
    /// Fixed RNG seed. `None` seeds from the OS.
    pub rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            initial_lives: lives::INITIAL,
            max_lives: lives::MAX,
            max_level: level::MAX,
            kills_per_level: level::KILLS_PER_LEVEL,
            base_spawn_interval: spawn::BASE_INTERVAL,
            min_spawn_interval: spawn::MIN_INTERVAL,
            spawn_interval_decrease: spawn::LEVEL_DECREASE,
            base_lifetime: hazard::BASE_LIFETIME,
            min_lifetime: hazard::MIN_LIFETIME,
            lifetime_decrease: hazard::LIFETIME_DECREASE,
            max_live_hazards: 1,
            pickup_check_interval: pickup::CHECK_INTERVAL,
            pickup_probability: pickup::PROBABILITY,
            pickup_lifetime: pickup::LIFETIME,
            log_path: None,
            rng_seed: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_lives < self.initial_lives {
            return Err(ConfigError::LivesRange {
                initial: self.initial_lives,
                max: self.max_lives,
            });
        }
        if self.max_level == 0 {
            return Err(ConfigError::ZeroMaxLevel);
        }
        if self.kills_per_level == 0 {
            return Err(ConfigError::ZeroKillsPerLevel);
        }
        if self.max_live_hazards == 0 {
            return Err(ConfigError::ZeroHazardCap);
        }
        if !(0.0..=1.0).contains(&self.pickup_probability) {
            return Err(ConfigError::ProbabilityRange(self.pickup_probability));
        }
        if self.min_lifetime > self.base_lifetime {
            return Err(ConfigError::LifetimeRange);
        }
        if self.min_spawn_interval > self.base_spawn_interval {
            return Err(ConfigError::IntervalRange);
        }
        Ok(())
    }

    /// Hazard spawn interval at the given level, before jitter.
    pub fn spawn_interval(&self, level: u32) -> Duration {
        let scaled = self
            .base_spawn_interval
            .saturating_sub(self.spawn_interval_decrease * level.saturating_sub(1));
        scaled.max(self.min_spawn_interval)
    }

    /// Hazard lifetime budget at the given level.
    pub fn hazard_lifetime(&self, level: u32) -> Duration {
        let scaled = self
            .base_lifetime
            .saturating_sub(self.lifetime_decrease * level.saturating_sub(1));
        scaled.max(self.min_lifetime)
    }
}
