//! Collision and resolution system.
//!
//! Circle-circle tests only. Passes run in a fixed order and each works on
//! a snapshot of the pools taken in pool order; removals are queued and
//! flushed at the end of the pass. A pass that ends the session stops
//! resolution for the rest of the step.
//!
//! Pass order: (a) gems, (b) gate opening, (c) enemy contact, (d) hostile
//! fire, (e) friendly fire, (f) fuel pods, (g) ammo mods, (h) gate reached.

use glam::DVec2;
use hecs::{Entity, World};
use log::info;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use voidrunner_core::components::*;
use voidrunner_core::constants::*;
use voidrunner_core::enums::*;
use voidrunner_core::types::{circles_overlap, unit_from_angle};

use voidrunner_enemy_ai::profiles::get_profile;

use crate::session::Session;
use crate::systems::cleanup;
use crate::systems::objectives::{self, ObjectiveEvent};
use crate::world_setup::{gate_position, replenish_gems, spawn_enemy};

/// Run every resolution pass for one step.
pub fn run(
    world: &mut World,
    session: &mut Session,
    rng: &mut ChaCha8Rng,
    despawn_buffer: &mut Vec<Entity>,
) {
    collect_gems(world, session, rng, despawn_buffer);
    open_gate(world, session, despawn_buffer);
    enemy_contact(world, session);
    if session.phase != GamePhase::Playing {
        return;
    }
    hostile_fire(world, session, despawn_buffer);
    if session.phase != GamePhase::Playing {
        return;
    }
    friendly_fire(world, session, rng, despawn_buffer);
    collect_fuel_pods(world, session, despawn_buffer);
    collect_ammo_mods(world, session, despawn_buffer);
    reach_gate(session);
}

/// Apply damage to the player unless invulnerable. Grants hit
/// invulnerability, knocks the player away from `source`, voids a survive
/// objective and ends the session at zero health. Returns whether damage
/// was applied.
pub fn hurt_player(session: &mut Session, amount: i32, source: Option<DVec2>) -> bool {
    if session.player.invuln > 0.0 || amount <= 0 {
        return false;
    }
    let player = &mut session.player;
    player.health = (player.health - amount).max(0);
    player.invuln = HIT_INVULN_SECS;
    if let Some(from) = source {
        let away = (player.pos - from).normalize_or_zero();
        if away != DVec2::ZERO {
            player.vel = away * CONTACT_KNOCKBACK;
        }
    }
    let pos = player.pos;
    let dead = player.health == 0;

    session.stats.damage_taken += amount as u32;
    session.effects.tone(ToneCue::Hurt);
    session.effects.shake(8.0, 0.25);
    session.effects.flash(COLOR_DAMAGE, 0.2);
    session.effects.burst(pos, COLOR_DAMAGE, 14, 180.0, 0.35);
    objectives::notify(session, ObjectiveEvent::Damage);

    if dead {
        info!("game over: score {} at wave {}", session.score, session.wave);
        session.set_phase(GamePhase::GameOver);
        session.effects.tone(ToneCue::GameOver);
    }
    true
}

/// Pickups of the matching kinds that the player touches, in pool order.
fn touching_pickups(
    world: &World,
    session: &Session,
    matches: impl Fn(PickupKind) -> bool,
) -> Vec<(Entity, PickupKind, DVec2)> {
    let player = &session.player;
    let mut hits: Vec<(u32, Entity, PickupKind, DVec2)> = world
        .query::<(&Position, &Pickup)>()
        .iter()
        .filter(|(_, (pos, pickup))| {
            matches(pickup.kind) && circles_overlap(player.pos, player.radius, pos.0, pickup.radius)
        })
        .map(|(entity, (pos, pickup))| (pickup.id, entity, pickup.kind, pos.0))
        .collect();
    hits.sort_by_key(|(id, ..)| *id);
    hits.into_iter()
        .map(|(_, entity, kind, pos)| (entity, kind, pos))
        .collect()
}

// (a)
fn collect_gems(
    world: &mut World,
    session: &mut Session,
    rng: &mut ChaCha8Rng,
    despawn_buffer: &mut Vec<Entity>,
) {
    let hits = touching_pickups(world, session, |k| k == PickupKind::Gem);
    if hits.is_empty() {
        return;
    }
    for (entity, _, pos) in hits {
        despawn_buffer.push(entity);
        session.collected += 1;

        let extension = if session.in_risk_zone {
            RISK_CHAIN_EXTENSION
        } else {
            0.0
        };
        let player = &mut session.player;
        player.chain = if player.chain_timer > 0.0 {
            player.chain + 1
        } else {
            1
        };
        player.chain_timer = player.chain_window + extension;
        let chain = player.chain as u64;

        session.award(GEM_SCORE * chain);
        objectives::notify(session, ObjectiveEvent::Collect);
        session.effects.tone(ToneCue::Collect);
        session.effects.burst(pos, COLOR_GEM, 8, 90.0, 0.4);
    }
    cleanup::flush(world, despawn_buffer);

    if session.gate.is_none() && session.collected < session.resource_goal {
        replenish_gems(world, session, rng);
    }
}

// (b)
fn open_gate(world: &mut World, session: &mut Session, despawn_buffer: &mut Vec<Entity>) {
    if session.gate.is_some() || session.collected < session.resource_goal {
        return;
    }
    for (entity, pickup) in world.query_mut::<&Pickup>() {
        if pickup.kind == PickupKind::Gem {
            despawn_buffer.push(entity);
        }
    }
    cleanup::flush(world, despawn_buffer);

    let pos = gate_position(session.player.pos);
    session.gate = Some(Gate {
        pos,
        radius: GATE_RADIUS,
        active: true,
    });
    session.wave_countdown = None;
    info!("gate open at ({:.0}, {:.0})", pos.x, pos.y);
    session.effects.tone(ToneCue::GateOpen);
    session.effects.flash(COLOR_GATE, 0.3);
    session.effects.burst(pos, COLOR_GATE, 30, 200.0, 0.6);
}

// (c)
fn enemy_contact(world: &World, session: &mut Session) {
    let mut touching: Vec<(u32, DVec2)> = world
        .query::<(&Position, &Enemy)>()
        .iter()
        .filter(|(_, (pos, enemy))| {
            enemy.hp > 0
                && circles_overlap(
                    session.player.pos,
                    session.player.radius,
                    pos.0,
                    enemy.radius,
                )
        })
        .map(|(_, (pos, enemy))| (enemy.id, pos.0))
        .collect();
    touching.sort_by_key(|(id, _)| *id);

    for (_, pos) in touching {
        hurt_player(session, CONTACT_DAMAGE, Some(pos));
        if session.phase != GamePhase::Playing {
            return;
        }
    }
}

// (d)
fn hostile_fire(world: &mut World, session: &mut Session, despawn_buffer: &mut Vec<Entity>) {
    let mut hits: Vec<(u32, Entity, DVec2, i32)> = world
        .query::<(&Position, &Projectile)>()
        .iter()
        .filter(|(_, (pos, projectile))| {
            !projectile.owner.is_friendly()
                && circles_overlap(
                    session.player.pos,
                    session.player.radius,
                    pos.0,
                    projectile.radius,
                )
        })
        .map(|(entity, (pos, projectile))| (projectile.id, entity, pos.0, projectile.damage))
        .collect();
    hits.sort_by_key(|(id, ..)| *id);

    for (_, entity, pos, damage) in hits {
        // An invulnerable player lets hostile fire pass through.
        if hurt_player(session, damage, Some(pos)) {
            despawn_buffer.push(entity);
        }
        if session.phase != GamePhase::Playing {
            break;
        }
    }
    cleanup::flush(world, despawn_buffer);
}

/// Working copy of an enemy during the friendly-fire pass.
struct Target {
    entity: Entity,
    pos: DVec2,
    radius: f64,
    hp: i32,
    species: Species,
    splits: bool,
}

// (e)
fn friendly_fire(
    world: &mut World,
    session: &mut Session,
    rng: &mut ChaCha8Rng,
    despawn_buffer: &mut Vec<Entity>,
) {
    let mut shots: Vec<(u32, Entity, DVec2, f64, i32)> = world
        .query::<(&Position, &Projectile)>()
        .iter()
        .filter(|(_, (_, projectile))| projectile.owner.is_friendly())
        .map(|(entity, (pos, p))| (p.id, entity, pos.0, p.radius, p.damage))
        .collect();
    shots.sort_by_key(|(id, ..)| *id);

    let mut targets: Vec<(u32, Target)> = world
        .query::<(&Position, &Enemy)>()
        .iter()
        .map(|(entity, (pos, enemy))| {
            (
                enemy.id,
                Target {
                    entity,
                    pos: pos.0,
                    radius: enemy.radius,
                    hp: enemy.hp,
                    species: enemy.species,
                    splits: enemy.splits_on_death,
                },
            )
        })
        .collect();
    targets.sort_by_key(|(id, _)| *id);
    if targets.is_empty() {
        return;
    }

    let mut deaths: Vec<usize> = Vec::new();
    for (_, shot, pos, radius, damage) in shots {
        // One enemy per projectile per step: the first hit in pool order.
        let Some(index) = targets
            .iter()
            .position(|(_, t)| t.hp > 0 && circles_overlap(pos, radius, t.pos, t.radius))
        else {
            continue;
        };

        let consumed = match world.get::<&mut Projectile>(shot) {
            Ok(mut projectile) if projectile.pierce > 0 => {
                projectile.pierce -= 1;
                false
            }
            _ => true,
        };
        if consumed {
            despawn_buffer.push(shot);
        }

        let target = &mut targets[index].1;
        target.hp = (target.hp - damage).max(0);
        if target.hp == 0 {
            deaths.push(index);
        }
    }

    for (_, target) in &targets {
        if let Ok(mut enemy) = world.get::<&mut Enemy>(target.entity) {
            enemy.hp = target.hp;
        }
    }
    for &index in &deaths {
        despawn_buffer.push(targets[index].1.entity);
    }
    cleanup::flush(world, despawn_buffer);

    for index in deaths {
        let target = &targets[index].1;
        on_enemy_killed(world, session, rng, target);
    }
}

fn on_enemy_killed(world: &mut World, session: &mut Session, rng: &mut ChaCha8Rng, target: &Target) {
    session.award(get_profile(target.species).score);
    session.stats.enemies_slain += 1;
    objectives::notify(session, ObjectiveEvent::Slay);

    session.effects.tone(ToneCue::Kill);
    if target.species == Species::Boss {
        session.effects.shake(12.0, 0.5);
        session.effects.burst(target.pos, COLOR_KILL, 48, 260.0, 0.8);
    } else {
        session.effects.shake(3.0, 0.12);
        session.effects.burst(target.pos, COLOR_KILL, 16, 180.0, 0.45);
    }

    if target.splits {
        for _ in 0..SPLITLET_COUNT {
            let dir = unit_from_angle(rng.gen_range(0.0..std::f64::consts::TAU));
            let speed = rng.gen_range(SPLITLET_BURST_SPEED.0..SPLITLET_BURST_SPEED.1);
            let pos = target.pos + dir * target.radius * 0.5;
            spawn_enemy(world, session, rng, Species::Splitlet, pos, dir * speed);
        }
    }
}

// (f)
fn collect_fuel_pods(world: &mut World, session: &mut Session, despawn_buffer: &mut Vec<Entity>) {
    for (entity, _, pos) in touching_pickups(world, session, |k| k == PickupKind::FuelPod) {
        despawn_buffer.push(entity);
        let player = &mut session.player;
        if player.health < player.max_health {
            player.health += 1;
        } else {
            player.boost_timer = BOOST_DURATION;
        }
        session.effects.tone(ToneCue::PowerUp);
        session.effects.burst(pos, COLOR_FUEL, 12, 120.0, 0.4);
    }
    cleanup::flush(world, despawn_buffer);
}

// (g)
fn collect_ammo_mods(world: &mut World, session: &mut Session, despawn_buffer: &mut Vec<Entity>) {
    for (entity, kind, pos) in touching_pickups(world, session, |k| matches!(k, PickupKind::AmmoMod(_))) {
        despawn_buffer.push(entity);
        if let PickupKind::AmmoMod(mode) = kind {
            session.player.ammo_mode = mode;
            session.player.ammo_timer = AMMO_MOD_DURATION;
        }
        session.effects.tone(ToneCue::PowerUp);
        session.effects.burst(pos, COLOR_PLAYER, 12, 120.0, 0.4);
    }
    cleanup::flush(world, despawn_buffer);
}

// (h)
fn reach_gate(session: &mut Session) {
    let Some(gate) = session.gate else {
        return;
    };
    let player = &session.player;
    if gate.active && circles_overlap(player.pos, player.radius, gate.pos, gate.radius) {
        info!("gate reached: score {}", session.score);
        session.set_phase(GamePhase::Win);
        session.effects.tone(ToneCue::Win);
        session.effects.flash(COLOR_GATE, 0.5);
    }
}
