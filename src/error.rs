//! Error types for the game.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level game error.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Event log error: {0}")]
    Log(#[from] LogError),
}

/// Errors produced while validating a [`crate::config::GameConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("max_lives ({max}) must be at least initial_lives ({initial})")]
    LivesRange { initial: u32, max: u32 },

    #[error("max_level must be at least 1")]
    ZeroMaxLevel,

    #[error("kills_per_level must be at least 1")]
    ZeroKillsPerLevel,

    #[error("max_live_hazards must be at least 1")]
    ZeroHazardCap,

    #[error("pickup_probability ({0}) must be within 0.0..=1.0")]
    ProbabilityRange(f64),

    #[error("min_lifetime must not exceed base_lifetime")]
    LifetimeRange,

    #[error("min_spawn_interval must not exceed base_spawn_interval")]
    IntervalRange,
}

/// Errors produced by the on-disk event log.
#[derive(Error, Debug)]
pub enum LogError {
    #[error("Failed to open event log at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write event log record: {0}")]
    Write(#[from] std::io::Error),

    #[error("Failed to format timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
}

/// A specialized `Result` type for game operations.
pub type GameResult<T> = Result<T, GameError>;
