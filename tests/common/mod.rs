//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::time::Duration;

use bevy_ecs::entity::Entity;
use bevy_ecs::query::With;
use glam::Vec2;
use whack_a_zombie::clock::GameClock;
use whack_a_zombie::config::GameConfig;
use whack_a_zombie::game::Game;
use whack_a_zombie::systems::components::{
    HazardBundle, HazardTag, Lifespan, Phase, PickupBundle, PickupTag, SpawnAnchor, SpawnSeq,
    TargetBundle, TargetKind,
};

/// A config with the spawner effectively disabled, for tests that plant
/// their own targets and need full control of the timeline.
pub fn quiet_config() -> GameConfig {
    GameConfig {
        base_spawn_interval: Duration::from_secs(600),
        min_spawn_interval: Duration::from_secs(600),
        pickup_probability: 0.0,
        rng_seed: Some(42),
        ..Default::default()
    }
}

pub fn new_game() -> Game {
    Game::new(quiet_config()).unwrap()
}

pub fn tick_ms(game: &mut Game, ms: u64) -> bool {
    game.tick(Duration::from_millis(ms))
}

/// Run whole 16ms frames until `total_ms` of game time has passed.
pub fn run_frames(game: &mut Game, total_ms: u64) {
    let mut remaining = total_ms;
    while remaining > 0 {
        let step = remaining.min(16);
        game.tick(Duration::from_millis(step));
        remaining -= step;
    }
}

pub fn now(game: &Game) -> Duration {
    game.world.resource::<GameClock>().now()
}

/// Directly plant a hazard, bypassing the spawner, for precise timing tests.
pub fn plant_hazard(game: &mut Game, anchor: usize, budget_ms: u64) -> Entity {
    let born_at = now(game);
    let seq = next_seq(game);
    game.world
        .spawn(HazardBundle {
            target: TargetBundle {
                kind: TargetKind::Hazard,
                anchor: SpawnAnchor(anchor),
                lifespan: Lifespan {
                    born_at,
                    budget: Duration::from_millis(budget_ms),
                },
                phase: Phase::Spawning,
                seq,
            },
            tag: HazardTag,
        })
        .id()
}

pub fn plant_pickup(game: &mut Game, anchor: usize, budget_ms: u64) -> Entity {
    let born_at = now(game);
    let seq = next_seq(game);
    game.world
        .spawn(PickupBundle {
            target: TargetBundle {
                kind: TargetKind::Pickup,
                anchor: SpawnAnchor(anchor),
                lifespan: Lifespan {
                    born_at,
                    budget: Duration::from_millis(budget_ms),
                },
                phase: Phase::Spawning,
                seq,
            },
            tag: PickupTag,
        })
        .id()
}

fn next_seq(game: &mut Game) -> SpawnSeq {
    use whack_a_zombie::systems::SpawnCounter;
    let mut counter = game.world.resource_mut::<SpawnCounter>();
    counter.0 += 1;
    SpawnSeq(counter.0)
}

pub fn hazard_count(game: &mut Game) -> usize {
    let mut query = game.world.query_filtered::<Entity, With<HazardTag>>();
    query.iter(&game.world).count()
}

/// Live hazards with their frozen lifetime budgets.
pub fn hazard_lifespans(game: &mut Game) -> Vec<(Entity, Lifespan)> {
    let mut query = game
        .world
        .query_filtered::<(Entity, &Lifespan), With<HazardTag>>();
    query
        .iter(&game.world)
        .map(|(entity, lifespan)| (entity, *lifespan))
        .collect()
}

pub fn pickup_count(game: &mut Game) -> usize {
    let mut query = game.world.query_filtered::<Entity, With<PickupTag>>();
    query.iter(&game.world).count()
}

pub fn phase_of(game: &Game, entity: Entity) -> Option<Phase> {
    game.world.get::<Phase>(entity).copied()
}

/// Anchor position at the default viewport.
pub fn anchor_position(index: usize) -> Vec2 {
    let (x, y) = whack_a_zombie::constants::playfield::SPAWN_GRID[index];
    Vec2::new(x, y)
}
