//! Snapshot system: queries the ECS world and the session and builds a
//! complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use voidrunner_core::components::*;
use voidrunner_core::constants::HEAT_MAX;
use voidrunner_core::enums::UpgradeKind;
use voidrunner_core::state::*;
use voidrunner_core::types::SimTime;

use voidrunner_economy::MAX_UPGRADE_LEVEL;

use crate::session::Session;
use crate::systems::drone::drone_position;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(world: &World, time: &SimTime, session: &Session) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase: session.phase,
        score: session.score,
        wave: session.wave,
        wave_countdown: session.wave_countdown,
        collected: session.collected,
        resource_goal: session.resource_goal,
        player: build_player(session),
        drone: build_drone(session),
        gate: session.gate.map(|g| GateView {
            position: g.pos,
            radius: g.radius,
            active: g.active,
        }),
        objective: session.objective.map(|o| ObjectiveView {
            kind: o.kind,
            target: o.target,
            progress: o.progress,
            timer: o.timer,
            reward: o.reward,
        }),
        objective_rearm: session.objective_rearm,
        upgrades: build_upgrades(session),
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        pickups: build_pickups(world),
        hazards: build_hazards(world),
        effects: session.effects.view(),
        stats: StatsView {
            shots_fired: session.stats.shots_fired,
            enemies_slain: session.stats.enemies_slain,
            damage_taken: session.stats.damage_taken,
        },
    }
}

fn build_player(session: &Session) -> PlayerView {
    let p = &session.player;
    PlayerView {
        position: p.pos,
        velocity: p.vel,
        facing: p.facing,
        radius: p.radius,
        health: p.health,
        max_health: p.max_health,
        invuln: p.invuln,
        dash_timer: p.dash_timer,
        dash_cooldown: p.dash_cooldown,
        shield_cooldown: p.shield_cooldown,
        heat: p.heat,
        heat_max: HEAT_MAX,
        overheated: p.overheated,
        ammo_mode: p.ammo_mode,
        ammo_timer: p.ammo_timer,
        chain: p.chain,
        chain_timer: p.chain_timer,
        boost_timer: p.boost_timer,
        max_speed: p.base_speed * p.speed_multiplier,
        in_risk_zone: session.in_risk_zone,
        in_slow_field: session.in_slow_field,
    }
}

fn build_drone(session: &Session) -> DroneView {
    let d = &session.drone;
    DroneView {
        position: drone_position(d, session.player.pos),
        angle: d.angle,
        orbit_radius: d.orbit_radius,
        fire_cooldown: d.fire_cooldown,
        level: d.level,
    }
}

fn build_upgrades(session: &Session) -> UpgradeView {
    let u = &session.upgrades;
    UpgradeView {
        speed_level: u.speed,
        shield_level: u.shield,
        chain_level: u.chain,
        max_level: MAX_UPGRADE_LEVEL,
        speed_cost: u.next_cost(UpgradeKind::Speed),
        shield_cost: u.next_cost(UpgradeKind::Shield),
        chain_cost: u.next_cost(UpgradeKind::Chain),
    }
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Position, &Velocity, &Enemy)>()
        .iter()
        .map(|(_, (pos, vel, e))| EnemyView {
            id: e.id,
            species: e.species,
            mode: e.mode,
            position: pos.0,
            velocity: vel.0,
            radius: e.radius,
            hp: e.hp,
            max_hp: e.max_hp,
            orbit_radius: e.orbit_radius,
            charge_cooldown: e.timers.charge_cooldown,
            windup: e.timers.windup,
            dash: e.timers.dash,
            stun: e.timers.stun,
            drop_cooldown: e.timers.drop_cooldown,
            splits_on_death: e.splits_on_death,
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Position, &Velocity, &Projectile)>()
        .iter()
        .map(|(_, (pos, vel, p))| ProjectileView {
            id: p.id,
            owner: p.owner,
            position: pos.0,
            velocity: vel.0,
            radius: p.radius,
            life: p.life,
            damage: p.damage,
            pierce: p.pierce,
            homing: p.homing,
            bounces: p.bounces,
        })
        .collect();

    projectiles.sort_by_key(|p| p.id);
    projectiles
}

fn build_pickups(world: &World) -> Vec<PickupView> {
    let mut pickups: Vec<PickupView> = world
        .query::<(&Position, &Pickup)>()
        .iter()
        .map(|(_, (pos, p))| PickupView {
            id: p.id,
            kind: p.kind,
            position: pos.0,
            radius: p.radius,
            life: p.life,
        })
        .collect();

    pickups.sort_by_key(|p| p.id);
    pickups
}

fn build_hazards(world: &World) -> Vec<HazardView> {
    let mut hazards: Vec<HazardView> = world
        .query::<(&Position, &Hazard)>()
        .iter()
        .map(|(_, (pos, h))| HazardView {
            id: h.id,
            kind: h.kind,
            position: pos.0,
            radius: h.radius,
            life: h.life,
        })
        .collect();

    hazards.sort_by_key(|h| h.id);
    hazards
}
