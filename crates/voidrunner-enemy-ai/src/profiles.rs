//! Species-specific behavioral profiles.
//!
//! Consolidates per-species parameters for the enemy FSM and the spawner.

use voidrunner_core::components::EnemyTimers;
use voidrunner_core::constants::*;
use voidrunner_core::enums::Species;

/// Behavioral profile for a species.
#[derive(Debug, Clone, Copy)]
pub struct SpeciesProfile {
    /// Speed cap (px/s). Dashing chargers are exempt.
    pub max_speed: f64,
    /// Steering acceleration (px/s²).
    pub accel: f64,
    pub radius: f64,
    pub hp: i32,
    /// Base score for a kill.
    pub score: u64,
    /// Preferred orbit distance, for orbiting species.
    pub orbit_radius: Option<f64>,
    pub splits_on_death: bool,
}

/// Get the behavioral profile for a given species.
pub fn get_profile(species: Species) -> SpeciesProfile {
    match species {
        Species::Chaser => SpeciesProfile {
            max_speed: 120.0,
            accel: 240.0,
            radius: 14.0,
            hp: 3,
            score: 100,
            orbit_radius: None,
            splits_on_death: false,
        },
        Species::Skirmisher => SpeciesProfile {
            max_speed: 170.0,
            accel: 360.0,
            radius: 13.0,
            hp: 2,
            score: 150,
            orbit_radius: Some(170.0),
            splits_on_death: false,
        },
        Species::Charger => SpeciesProfile {
            max_speed: 90.0,
            accel: 200.0,
            radius: 16.0,
            hp: 4,
            score: 200,
            orbit_radius: None,
            splits_on_death: false,
        },
        Species::Sapper => SpeciesProfile {
            max_speed: 110.0,
            accel: 260.0,
            radius: 15.0,
            hp: 3,
            score: 175,
            orbit_radius: Some(240.0),
            splits_on_death: false,
        },
        Species::Splitter => SpeciesProfile {
            max_speed: 100.0,
            accel: 220.0,
            radius: 18.0,
            hp: 4,
            score: 150,
            orbit_radius: None,
            splits_on_death: true,
        },
        Species::Splitlet => SpeciesProfile {
            max_speed: 190.0,
            accel: 420.0,
            radius: 9.0,
            hp: 1,
            score: 50,
            orbit_radius: None,
            splits_on_death: false,
        },
        Species::Boss => SpeciesProfile {
            max_speed: 60.0,
            accel: 90.0,
            radius: 42.0,
            hp: 60,
            score: 2000,
            orbit_radius: None,
            splits_on_death: false,
        },
    }
}

/// Initial timers for a freshly spawned enemy of this species.
pub fn initial_cooldowns(species: Species) -> EnemyTimers {
    let mut timers = EnemyTimers::default();
    match species {
        Species::Charger => timers.charge_cooldown = CHARGER_COOLDOWN * 0.5,
        Species::Sapper => timers.drop_cooldown = SAPPER_DROP_COOLDOWN * 0.5,
        Species::Boss => {
            timers.spawn_cooldown = BOSS_SPAWN_COOLDOWN;
            timers.fire_cooldown = BOSS_FIRE_COOLDOWN;
        }
        _ => {}
    }
    timers
}
