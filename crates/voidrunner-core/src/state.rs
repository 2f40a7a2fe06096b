//! Game state snapshot: the complete visible state of a session.
//!
//! Schema notes:
//! - Coordinates are field pixels, origin at the top-left corner, +x right,
//!   +y down. Vectors serialize as `[x, y]`.
//! - Times and timers are seconds. Speeds are px/s.
//! - Every pool is listed in pool order (ascending spawn id).
//! - Building a snapshot never mutates the session.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::SimTime;

/// Complete session state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub score: u64,
    pub wave: u32,
    /// Seconds until the next wave, while one is pending.
    pub wave_countdown: Option<f64>,
    pub collected: u32,
    pub resource_goal: u32,
    pub player: PlayerView,
    pub drone: DroneView,
    pub gate: Option<GateView>,
    pub objective: Option<ObjectiveView>,
    /// Seconds until a new objective may be chosen.
    pub objective_rearm: f64,
    pub upgrades: UpgradeView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub pickups: Vec<PickupView>,
    pub hazards: Vec<HazardView>,
    pub effects: EffectsView,
    pub stats: StatsView,
}

/// Player craft state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: DVec2,
    pub velocity: DVec2,
    pub facing: DVec2,
    pub radius: f64,
    pub health: i32,
    pub max_health: i32,
    pub invuln: f64,
    pub dash_timer: f64,
    pub dash_cooldown: f64,
    pub shield_cooldown: f64,
    pub heat: f64,
    pub heat_max: f64,
    pub overheated: bool,
    pub ammo_mode: AmmoMode,
    pub ammo_timer: f64,
    pub chain: u32,
    pub chain_timer: f64,
    pub boost_timer: f64,
    /// Current top speed including upgrades (boost and slow excluded).
    pub max_speed: f64,
    pub in_risk_zone: bool,
    pub in_slow_field: bool,
}

/// Companion drone state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DroneView {
    pub position: DVec2,
    pub angle: f64,
    pub orbit_radius: f64,
    pub fire_cooldown: f64,
    pub level: u32,
}

/// Gate state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateView {
    pub position: DVec2,
    pub radius: f64,
    pub active: bool,
}

/// Active objective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveView {
    pub kind: ObjectiveKind,
    pub target: f64,
    pub progress: f64,
    pub timer: f64,
    pub reward: u64,
}

/// Purchased upgrade levels and next-level costs (`None` at the cap).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpgradeView {
    pub speed_level: u32,
    pub shield_level: u32,
    pub chain_level: u32,
    pub max_level: u32,
    pub speed_cost: Option<u64>,
    pub shield_cost: Option<u64>,
    pub chain_cost: Option<u64>,
}

/// One enemy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub species: Species,
    pub mode: EnemyMode,
    pub position: DVec2,
    pub velocity: DVec2,
    pub radius: f64,
    pub hp: i32,
    pub max_hp: i32,
    pub orbit_radius: f64,
    pub charge_cooldown: f64,
    pub windup: f64,
    pub dash: f64,
    pub stun: f64,
    pub drop_cooldown: f64,
    pub splits_on_death: bool,
}

/// One projectile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub owner: ProjectileOwner,
    pub position: DVec2,
    pub velocity: DVec2,
    pub radius: f64,
    pub life: f64,
    pub damage: i32,
    pub pierce: u32,
    pub homing: bool,
    pub bounces: u32,
}

/// One pickup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupView {
    pub id: u32,
    pub kind: PickupKind,
    pub position: DVec2,
    pub radius: f64,
    pub life: Option<f64>,
}

/// One hazard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardView {
    pub id: u32,
    pub kind: HazardKind,
    pub position: DVec2,
    pub radius: f64,
    pub life: f64,
}

/// Cosmetic effect timers for the presentation layer to read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectsView {
    pub shake_magnitude: f64,
    pub shake_timer: f64,
    pub flash_color: u32,
    pub flash_timer: f64,
}

/// Running session statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsView {
    pub shots_fired: u32,
    pub enemies_slain: u32,
    pub damage_taken: u32,
}
