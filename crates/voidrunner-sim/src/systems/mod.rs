//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` plus the session state they
//! touch. They do not own state.

pub mod abilities;
pub mod cleanup;
pub mod collision;
pub mod drone;
pub mod effects;
pub mod enemy_ai;
pub mod hazards;
pub mod movement;
pub mod objectives;
pub mod pickups;
pub mod projectiles;
pub mod snapshot;
pub mod waves;
pub mod weapon;
