//! Entity data.
//!
//! Pool entities (enemies, projectiles, pickups, hazards) are hecs entities
//! carrying `Position`, usually `Velocity`, and one category record. The
//! singletons (player, drone, gate, objective) are held directly by the
//! session. Components are plain data; game logic lives in systems.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::*;

/// Centre position (px).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec2);

/// Velocity (px/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub DVec2);

/// Species-specific countdowns (seconds). Unused fields stay at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EnemyTimers {
    /// Charger: time until the next windup is allowed.
    pub charge_cooldown: f64,
    /// Charger: windup remaining.
    pub windup: f64,
    /// Charger: dash remaining.
    pub dash: f64,
    /// Shield-burst stun remaining.
    pub stun: f64,
    /// Sapper: time until the next slow field.
    pub drop_cooldown: f64,
    /// Boss: time until the next reinforcement batch.
    pub spawn_cooldown: f64,
    /// Boss: time until the next projectile fan.
    pub fire_cooldown: f64,
}

/// Enemy record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Spawn-order id; pool order is ascending id.
    pub id: u32,
    pub species: Species,
    pub mode: EnemyMode,
    pub radius: f64,
    pub hp: i32,
    pub max_hp: i32,
    pub timers: EnemyTimers,
    /// Preferred orbit distance for orbiting species.
    pub orbit_radius: f64,
    /// Orbit direction: +1 counterclockwise on screen, -1 clockwise.
    pub orbit_dir: f64,
    /// Direction captured at windup end.
    pub dash_dir: DVec2,
    /// Death spawns offspring.
    pub splits_on_death: bool,
}

/// Projectile record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub owner: ProjectileOwner,
    pub radius: f64,
    /// Remaining lifetime (seconds).
    pub life: f64,
    pub damage: i32,
    /// Additional enemies this projectile may pass through.
    pub pierce: u32,
    pub homing: bool,
    /// Remaining wall bounces.
    pub bounces: u32,
}

/// Pickup record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    pub id: u32,
    pub kind: PickupKind,
    pub radius: f64,
    /// Remaining lifetime; `None` never expires.
    pub life: Option<f64>,
}

/// Area hazard record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hazard {
    pub id: u32,
    pub kind: HazardKind,
    pub radius: f64,
    /// Remaining lifetime (seconds).
    pub life: f64,
}

/// The player craft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: DVec2,
    pub vel: DVec2,
    /// Unit facing vector.
    pub facing: DVec2,
    pub radius: f64,
    pub base_speed: f64,
    pub accel: f64,
    pub drag: f64,
    pub health: i32,
    pub max_health: i32,
    pub invuln: f64,

    // --- Abilities ---
    pub dash_timer: f64,
    pub dash_cooldown: f64,
    pub dash_dir: DVec2,
    pub shield_cooldown: f64,

    // --- Weapon ---
    pub heat: f64,
    pub overheated: bool,
    pub fire_cooldown: f64,
    pub ammo_mode: AmmoMode,
    /// Remaining duration of a non-base ammo mode.
    pub ammo_timer: f64,

    // --- Chain scoring ---
    pub chain: u32,
    pub chain_timer: f64,

    pub boost_timer: f64,

    // --- Derived from upgrades ---
    pub speed_multiplier: f64,
    pub shield_cooldown_max: f64,
    pub chain_window: f64,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: crate::types::field_center(),
            vel: DVec2::ZERO,
            facing: DVec2::new(0.0, -1.0),
            radius: PLAYER_RADIUS,
            base_speed: PLAYER_BASE_SPEED,
            accel: PLAYER_ACCEL,
            drag: PLAYER_DRAG,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            invuln: 0.0,
            dash_timer: 0.0,
            dash_cooldown: 0.0,
            dash_dir: DVec2::ZERO,
            shield_cooldown: 0.0,
            heat: 0.0,
            overheated: false,
            fire_cooldown: 0.0,
            ammo_mode: AmmoMode::Tri,
            ammo_timer: 0.0,
            chain: 0,
            chain_timer: 0.0,
            boost_timer: 0.0,
            speed_multiplier: 1.0,
            shield_cooldown_max: SHIELD_BASE_COOLDOWN,
            chain_window: CHAIN_BASE_WINDOW,
        }
    }
}

/// Companion drone orbiting the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drone {
    pub angle: f64,
    pub orbit_radius: f64,
    pub fire_cooldown: f64,
    pub level: u32,
}

impl Default for Drone {
    fn default() -> Self {
        Self {
            angle: 0.0,
            orbit_radius: DRONE_ORBIT_RADIUS,
            fire_cooldown: DRONE_FIRE_INTERVAL,
            level: 1,
        }
    }
}

/// Win-condition gate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Gate {
    pub pos: DVec2,
    pub radius: f64,
    pub active: bool,
}

/// The active objective.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Objective {
    pub kind: ObjectiveKind,
    /// Seconds for `Survive`, a count otherwise.
    pub target: f64,
    pub progress: f64,
    /// Time left before the objective times out.
    pub timer: f64,
    pub reward: u64,
}
