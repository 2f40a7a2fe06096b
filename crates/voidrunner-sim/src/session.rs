//! Session state that is not stored as ECS entities.
//!
//! The player, drone, gate, objective, upgrades, effect timers and the
//! orchestration counters live here. A fresh `Session` is the
//! construction-time default that restart returns to.

use log::info;

use voidrunner_core::components::{Drone, Gate, Objective, Player};
use voidrunner_core::constants::*;
use voidrunner_core::enums::GamePhase;

use voidrunner_economy::UpgradeLevels;

use crate::systems::effects::EffectState;

/// Running statistics for the current run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub shots_fired: u32,
    pub enemies_slain: u32,
    pub damage_taken: u32,
}

/// All per-run state outside the ECS world.
#[derive(Debug, Clone)]
pub struct Session {
    pub phase: GamePhase,
    pub score: u64,
    pub collected: u32,
    pub resource_goal: u32,
    pub gem_target_count: usize,

    pub wave: u32,
    /// Seconds until the next wave, while one is pending.
    pub wave_countdown: Option<f64>,
    /// The live wave contains a boss; clearing it levels the drone.
    pub boss_wave_active: bool,

    pub player: Player,
    pub drone: Drone,
    pub gate: Option<Gate>,
    pub objective: Option<Objective>,
    pub objective_rearm: f64,
    pub upgrades: UpgradeLevels,

    pub effects: EffectState,
    pub stats: Stats,

    // --- Area state, refreshed by the hazard pass ---
    pub in_risk_zone: bool,
    pub in_slow_field: bool,
    pub risk_damage_timer: f64,

    // --- Timed spawns ---
    pub fuel_pod_timer: f64,
    pub ammo_mod_timer: f64,
    pub risk_zone_timer: f64,

    next_id: u32,
}

impl Session {
    pub fn new(resource_goal: u32, gem_target_count: usize) -> Self {
        Self {
            phase: GamePhase::Menu,
            score: 0,
            collected: 0,
            resource_goal,
            gem_target_count,
            wave: 0,
            wave_countdown: None,
            boss_wave_active: false,
            player: Player::default(),
            drone: Drone::default(),
            gate: None,
            objective: None,
            objective_rearm: OBJECTIVE_FIRST_DELAY,
            upgrades: UpgradeLevels::default(),
            effects: EffectState::default(),
            stats: Stats::default(),
            in_risk_zone: false,
            in_slow_field: false,
            risk_damage_timer: RISK_DAMAGE_INTERVAL,
            fuel_pod_timer: FUEL_POD_INTERVAL,
            ammo_mod_timer: AMMO_MOD_INTERVAL,
            risk_zone_timer: RISK_ZONE_INTERVAL,
            next_id: 0,
        }
    }

    /// Allocate the next entity id. Ids only grow, so id order is spawn order.
    pub fn alloc_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Change mode, logging the transition.
    pub fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            info!("phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    /// Recompute player stats that depend on upgrade levels.
    pub fn apply_upgrades(&mut self) {
        let derived = self.upgrades.derived();
        self.player.speed_multiplier = derived.speed_multiplier;
        self.player.shield_cooldown_max = derived.shield_cooldown;
        self.player.chain_window = derived.chain_window;
    }

    /// Top speed including upgrades, boost and slow fields.
    pub fn player_max_speed(&self) -> f64 {
        let mut speed = self.player.base_speed * self.player.speed_multiplier;
        if self.player.boost_timer > 0.0 {
            speed *= BOOST_MULTIPLIER;
        }
        if self.in_slow_field {
            speed *= SLOW_FIELD_FACTOR;
        }
        speed
    }

    /// Score multiplier for kills and pickups this step.
    pub fn score_multiplier(&self) -> f64 {
        if self.in_risk_zone {
            RISK_MULTIPLIER
        } else {
            1.0
        }
    }

    /// Add `base` points scaled by the current multiplier.
    pub fn award(&mut self, base: u64) -> u64 {
        let points = (base as f64 * self.score_multiplier()).round() as u64;
        self.score += points;
        points
    }
}
