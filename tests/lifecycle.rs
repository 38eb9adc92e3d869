//! Target lifecycle timing: spawn windows, expiry, attacks and pruning.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use whack_a_zombie::events::GameCommand;
use whack_a_zombie::systems::components::{Outcome, Phase};
use whack_a_zombie::systems::Scoreboard;

#[test]
fn hazard_becomes_active_after_spawn_window() {
    let mut game = new_game();
    let hazard = plant_hazard(&mut game, 0, 2000);

    tick_ms(&mut game, 100);
    assert_eq!(phase_of(&game, hazard), Some(Phase::Spawning));

    tick_ms(&mut game, 100);
    assert_eq!(phase_of(&game, hazard), Some(Phase::Active));
}

#[test]
fn spawning_hazard_is_already_hittable() {
    let mut game = new_game();
    let hazard = plant_hazard(&mut game, 0, 2000);
    tick_ms(&mut game, 10);

    let phase = phase_of(&game, hazard).unwrap();
    assert!(phase.is_hittable());
}

#[test]
fn expired_hazard_attacks_and_damage_lands_once() {
    let mut game = new_game();
    let hazard = plant_hazard(&mut game, 0, 500);

    tick_ms(&mut game, 500);
    assert!(matches!(
        phase_of(&game, hazard),
        Some(Phase::Resolving {
            outcome: Outcome::Attacking,
            ..
        })
    ));
    // Attack is still animating: no damage yet
    assert_eq!(game.scoreboard().lives, 3);

    tick_ms(&mut game, 150);
    assert_eq!(game.scoreboard().lives, 3);

    tick_ms(&mut game, 150);
    assert_eq!(game.scoreboard().lives, 2);

    // Sinking now; no further damage from the same hazard
    run_frames(&mut game, 1000);
    assert_eq!(game.scoreboard().lives, 2);
}

#[test]
fn dead_hazard_is_pruned() {
    let mut game = new_game();
    let hazard = plant_hazard(&mut game, 0, 500);

    // 500 budget + 300 attack + 250 despawn, plus one frame to prune
    run_frames(&mut game, 1100);
    assert_eq!(phase_of(&game, hazard), None);
    assert_eq!(hazard_count(&mut game), 0);
}

#[test]
fn unclaimed_pickup_expires_without_damage() {
    let mut game = new_game();
    let pickup = plant_pickup(&mut game, 5, 1000);

    tick_ms(&mut game, 1000);
    assert!(matches!(
        phase_of(&game, pickup),
        Some(Phase::Resolving {
            outcome: Outcome::Expired,
            ..
        }) | Some(Phase::Despawning {
            outcome: Outcome::Expired,
            ..
        })
    ));

    // Fade-out runs, then the entity goes away; lives untouched
    run_frames(&mut game, 500);
    assert_eq!(phase_of(&game, pickup), None);
    assert_eq!(game.scoreboard().lives, 3);
}

#[test]
fn pause_freezes_all_timing() {
    let mut game = new_game();
    let hazard = plant_hazard(&mut game, 0, 500);

    tick_ms(&mut game, 100);
    game.command(GameCommand::TogglePause);
    tick_ms(&mut game, 10);

    // Way past the budget in wall time, but game time is stopped
    for _ in 0..100 {
        tick_ms(&mut game, 100);
    }
    assert!(phase_of(&game, hazard).unwrap().is_hittable());
    assert_eq!(game.scoreboard().lives, 3);

    // Unpause and the budget resumes from where it left off
    game.command(GameCommand::TogglePause);
    run_frames(&mut game, 500);
    assert!(phase_of(&game, hazard).unwrap().is_resolved());
}

#[test]
fn reset_mid_attack_cancels_pending_damage() {
    let mut game = new_game();
    plant_hazard(&mut game, 0, 500);

    // Into the attack animation, damage not yet landed
    tick_ms(&mut game, 600);
    let lives_before = game.scoreboard().lives;
    assert_eq!(lives_before, 3);

    game.command(GameCommand::Reset);
    tick_ms(&mut game, 16);
    assert_eq!(hazard_count(&mut game), 0);

    // The attack entity died with the reset; its damage never lands
    run_frames(&mut game, 500);
    let scoreboard = game.world.resource::<Scoreboard>();
    assert_eq!(scoreboard.lives, 3);
}
