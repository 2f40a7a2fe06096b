//! Error types for engine construction and driving.

use thiserror::Error;

use voidrunner_core::enums::DriveMode;

/// A `SimConfig` that cannot produce a playable session.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("resource goal must be at least 1")]
    ZeroResourceGoal,
    #[error("gem target count must be at least 1")]
    ZeroGemTarget,
    #[error("max frame delta must be finite and at least one step, got {0}")]
    InvalidFrameDelta(f64),
}

/// A session driven in one time-advancement mode was asked to use the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DriveError {
    #[error("session is driven in {active:?} mode, cannot drive it in {requested:?} mode")]
    ModeConflict {
        active: DriveMode,
        requested: DriveMode,
    },
}
