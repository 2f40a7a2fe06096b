//! Player commands sent from the input layer to the simulation.
//!
//! Discrete commands are queued and processed at the next tick boundary.
//! Held controls (movement, aim, fire) are replaced wholesale via
//! `ControlInput`.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::UpgradeKind;

/// Discrete player actions. A command invalid for the current mode is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session ---
    /// Leave the menu and start playing.
    Start,
    /// Rebuild the session from scratch and resume play.
    Restart,
    Pause,
    Resume,
    OpenShop,
    CloseShop,
    /// Buy one level of an upgrade (shop only).
    Purchase { upgrade: UpgradeKind },

    // --- Abilities (edge-triggered) ---
    Dash,
    Shield,
}

/// Held control state, sampled every step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlInput {
    /// Movement intent; zero or unit length.
    pub movement: DVec2,
    /// Aim point in field coordinates. `None` means "face along velocity".
    pub aim: Option<DVec2>,
    /// Fire trigger held.
    pub fire: bool,
}

impl ControlInput {
    /// Normalize the movement intent to zero or unit length.
    pub fn normalized(self) -> Self {
        Self {
            movement: self.movement.normalize_or_zero(),
            ..self
        }
    }
}
