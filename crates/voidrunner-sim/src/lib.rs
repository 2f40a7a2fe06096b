//! Simulation engine for Voidrunner.
//!
//! Owns the hecs ECS world and the session state, runs systems at a fixed
//! tick rate, and produces GameStateSnapshots for the presentation layer.

pub mod engine;
pub mod error;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use error::{ConfigError, DriveError};
pub use voidrunner_core as core;
