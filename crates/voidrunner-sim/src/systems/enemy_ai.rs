//! Enemy AI system: updates enemy behavior each tick.
//!
//! Calls the enemy FSM from voidrunner-enemy-ai for every enemy in pool
//! order, writes the updates back, then carries out the requested actions
//! (slow fields, reinforcements, projectile fans).

use glam::DVec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use voidrunner_core::components::{Enemy, Position, Velocity};
use voidrunner_core::constants::*;
use voidrunner_core::enums::{HazardKind, Species};
use voidrunner_core::types::fan_directions;

use voidrunner_enemy_ai::fsm::{evaluate, EnemyAction, EnemyContext, EnemyUpdate};

use crate::session::Session;
use crate::world_setup::{
    random_point_near, spawn_enemy, spawn_hazard, spawn_projectile, ProjectileSpec,
};

/// Run the enemy AI system: evaluate the FSM for each enemy, apply updates,
/// then perform actions.
pub fn run(world: &mut World, session: &mut Session, rng: &mut ChaCha8Rng, dt: f64) {
    let player_position = session.player.pos;

    // Collect updates in a buffer to avoid borrow issues with hecs
    let mut updates: Vec<(u32, Entity, EnemyUpdate)> = Vec::new();
    {
        let mut query = world.query::<(&Enemy, &Position, &Velocity)>();
        for (entity, (enemy, pos, vel)) in query.iter() {
            let ctx = EnemyContext {
                species: enemy.species,
                mode: enemy.mode,
                position: pos.0,
                velocity: vel.0,
                player_position,
                timers: enemy.timers,
                orbit_radius: enemy.orbit_radius,
                orbit_dir: enemy.orbit_dir,
                dash_dir: enemy.dash_dir,
                dt,
            };
            updates.push((enemy.id, entity, evaluate(&ctx)));
        }
    }
    updates.sort_by_key(|(id, _, _)| *id);

    let mut actions = Vec::new();
    for (_id, entity, update) in updates {
        if let Ok(mut enemy) = world.get::<&mut Enemy>(entity) {
            enemy.mode = update.mode;
            enemy.timers = update.timers;
            enemy.dash_dir = update.dash_dir;
        }
        if let Ok(mut vel) = world.get::<&mut Velocity>(entity) {
            vel.0 = update.velocity;
        }
        actions.extend(update.actions);
    }

    for action in actions {
        perform(world, session, rng, action);
    }
}

fn perform(world: &mut World, session: &mut Session, rng: &mut ChaCha8Rng, action: EnemyAction) {
    match action {
        EnemyAction::DropSlowField { at } => {
            spawn_hazard(world, session, HazardKind::SlowField, at);
        }
        EnemyAction::SpawnReinforcements { at, count } => {
            for _ in 0..count {
                if world.query::<&Enemy>().iter().count() >= MAX_ENEMIES {
                    break;
                }
                let species = if rng.gen_bool(0.5) {
                    Species::Chaser
                } else {
                    Species::Splitlet
                };
                let pos = random_point_near(rng, at, 60.0, 16.0);
                spawn_enemy(world, session, rng, species, pos, DVec2::ZERO);
            }
        }
        EnemyAction::FireFan { origin, heading } => {
            for dir in fan_directions(heading, BOSS_FAN_COUNT, BOSS_FAN_SPREAD) {
                spawn_projectile(world, session, ProjectileSpec::enemy(), origin, dir);
            }
        }
    }
}
