//! Click dispatch: hit resolution order, misses and gating.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use whack_a_zombie::events::GameCommand;
use whack_a_zombie::systems::components::{Outcome, Phase};

#[test]
fn click_on_active_hazard_counts_a_hit() {
    let mut game = new_game();
    let hazard = plant_hazard(&mut game, 0, 5000);
    run_frames(&mut game, 200);

    game.click(anchor_position(0));
    tick_ms(&mut game, 16);

    let scoreboard = game.scoreboard();
    assert_eq!(scoreboard.hits, 1);
    assert_eq!(scoreboard.kills, 1);
    assert_eq!(scoreboard.misses, 0);
    assert!(matches!(
        phase_of(&game, hazard),
        Some(Phase::Resolving {
            outcome: Outcome::Hit,
            ..
        }) | Some(Phase::Despawning {
            outcome: Outcome::Hit,
            ..
        })
    ));
}

#[test]
fn click_on_empty_ground_is_a_miss() {
    let mut game = new_game();
    plant_hazard(&mut game, 0, 5000);
    run_frames(&mut game, 200);

    // Far from any spawn point
    game.click(glam::Vec2::new(900.0, 530.0));
    tick_ms(&mut game, 16);

    let scoreboard = game.scoreboard();
    assert_eq!(scoreboard.hits, 0);
    assert_eq!(scoreboard.misses, 1);
}

#[test]
fn pickup_is_preferred_over_overlapping_hazard() {
    let mut game = new_game();
    let hazard = plant_hazard(&mut game, 0, 5000);
    let pickup = plant_pickup(&mut game, 0, 5000);
    run_frames(&mut game, 250);

    game.click(anchor_position(0));
    tick_ms(&mut game, 16);

    let scoreboard = game.scoreboard();
    assert_eq!(scoreboard.lives, 4);
    assert_eq!(scoreboard.kills, 0);
    assert!(phase_of(&game, pickup).unwrap().is_resolved());
    assert!(phase_of(&game, hazard).unwrap().is_hittable());
}

#[test]
fn one_click_resolves_at_most_one_target() {
    let mut game = new_game();
    let older = plant_hazard(&mut game, 0, 5000);
    let newer = plant_hazard(&mut game, 0, 5000);
    run_frames(&mut game, 200);

    game.click(anchor_position(0));
    tick_ms(&mut game, 16);

    assert_eq!(game.scoreboard().hits, 1);
    // Newest spawn takes the hit
    assert!(phase_of(&game, newer).unwrap().is_resolved());
    assert!(phase_of(&game, older).unwrap().is_hittable());
}

#[test]
fn resolved_hazard_cannot_be_hit_again() {
    let mut game = new_game();
    plant_hazard(&mut game, 0, 5000);
    run_frames(&mut game, 200);

    game.click(anchor_position(0));
    tick_ms(&mut game, 16);
    game.click(anchor_position(0));
    tick_ms(&mut game, 16);

    let scoreboard = game.scoreboard();
    assert_eq!(scoreboard.hits, 1);
    assert_eq!(scoreboard.misses, 1);
}

#[test]
fn attacking_hazard_is_out_of_reach() {
    let mut game = new_game();
    plant_hazard(&mut game, 0, 500);

    // Budget exhausted: the hazard is mid-attack
    tick_ms(&mut game, 550);
    game.click(anchor_position(0));
    tick_ms(&mut game, 16);

    let scoreboard = game.scoreboard();
    assert_eq!(scoreboard.hits, 0);
    assert_eq!(scoreboard.misses, 1);
}

#[test]
fn clicks_are_swallowed_while_paused() {
    let mut game = new_game();
    plant_hazard(&mut game, 0, 5000);
    run_frames(&mut game, 200);

    game.command(GameCommand::TogglePause);
    tick_ms(&mut game, 16);

    game.click(anchor_position(0));
    tick_ms(&mut game, 16);

    let scoreboard = game.scoreboard();
    assert_eq!(scoreboard.hits, 0);
    assert_eq!(scoreboard.misses, 0);
}

#[test]
fn rising_hazard_hitbox_sits_below_the_anchor() {
    let mut game = new_game();
    plant_hazard(&mut game, 0, 5000);

    // A few milliseconds in, the sprite is still mostly underground: a click
    // at the anchor itself misses, one below it connects
    tick_ms(&mut game, 8);
    game.click(anchor_position(0));
    tick_ms(&mut game, 1);
    assert_eq!(game.scoreboard().misses, 1);

    game.click(anchor_position(0) + glam::Vec2::new(0.0, 80.0));
    tick_ms(&mut game, 1);
    assert_eq!(game.scoreboard().hits, 1);
}
