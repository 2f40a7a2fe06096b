//! Enemy AI for Voidrunner.
//!
//! Implements per-species behavior state machines and the species profiles
//! the spawner and collision engine read.

pub mod fsm;
pub mod profiles;

pub use voidrunner_core as core;

#[cfg(test)]
mod tests;
