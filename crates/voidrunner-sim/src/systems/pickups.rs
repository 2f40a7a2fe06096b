//! Pickup update: gem magnetism, lifetime expiry and timed spawns.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use voidrunner_core::components::{Pickup, Position};
use voidrunner_core::constants::*;
use voidrunner_core::enums::{AmmoMode, PickupKind};
use voidrunner_core::types::tick_down;

use crate::session::Session;
use crate::systems::cleanup;
use crate::world_setup::{random_point_away_from, spawn_pickup};

pub fn run(
    world: &mut World,
    session: &mut Session,
    rng: &mut ChaCha8Rng,
    dt: f64,
    despawn_buffer: &mut Vec<Entity>,
) {
    attract_gems(world, session, dt);
    expire(world, dt, despawn_buffer);
    cleanup::flush(world, despawn_buffer);
    spawn_timed(world, session, rng, dt);
}

/// Pull gems within the magnet radius toward the player without overshooting.
fn attract_gems(world: &mut World, session: &Session, dt: f64) {
    let player = session.player.pos;
    let step = GEM_MAGNET_SPEED * dt;
    for (_entity, (pos, pickup)) in world.query_mut::<(&mut Position, &Pickup)>() {
        if pickup.kind != PickupKind::Gem {
            continue;
        }
        let delta = player - pos.0;
        let dist = delta.length();
        if dist > GEM_MAGNET_RADIUS || dist == 0.0 {
            continue;
        }
        pos.0 += delta * (step.min(dist) / dist);
    }
}

fn expire(world: &mut World, dt: f64, despawn_buffer: &mut Vec<Entity>) {
    for (entity, pickup) in world.query_mut::<&mut Pickup>() {
        if let Some(life) = pickup.life.as_mut() {
            *life = tick_down(*life, dt);
            if *life == 0.0 {
                despawn_buffer.push(entity);
            }
        }
    }
}

fn count_kind(world: &World, matches: impl Fn(PickupKind) -> bool) -> usize {
    world
        .query::<&Pickup>()
        .iter()
        .filter(|(_, p)| matches(p.kind))
        .count()
}

/// Fuel pods and ammo mods appear on their own timers, up to a cap each.
fn spawn_timed(world: &mut World, session: &mut Session, rng: &mut ChaCha8Rng, dt: f64) {
    let avoid = session.player.pos;

    session.fuel_pod_timer = tick_down(session.fuel_pod_timer, dt);
    if session.fuel_pod_timer == 0.0 {
        session.fuel_pod_timer = FUEL_POD_INTERVAL;
        if count_kind(world, |k| k == PickupKind::FuelPod) < FUEL_POD_MAX {
            let pos = random_point_away_from(rng, avoid, GEM_MAGNET_RADIUS);
            spawn_pickup(world, session, PickupKind::FuelPod, pos);
        }
    }

    session.ammo_mod_timer = tick_down(session.ammo_mod_timer, dt);
    if session.ammo_mod_timer == 0.0 {
        session.ammo_mod_timer = AMMO_MOD_INTERVAL;
        if count_kind(world, |k| matches!(k, PickupKind::AmmoMod(_))) < AMMO_MOD_MAX {
            let mode = AmmoMode::ALTERNATES[rng.gen_range(0..AmmoMode::ALTERNATES.len())];
            let pos = random_point_away_from(rng, avoid, GEM_MAGNET_RADIUS);
            spawn_pickup(world, session, PickupKind::AmmoMod(mode), pos);
        }
    }
}
