//! A whack-a-mole style arcade core: timed zombies, brain pickups and
//! level-scaled difficulty, built on a fixed-tick ECS world.
//!
//! Rendering, audio output and windowing live in the embedding application;
//! this crate owns the simulation and exposes a per-frame
//! [`systems::FrameSnapshot`] for drawing.

pub mod app;
pub mod board;
pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod game;
pub mod systems;
