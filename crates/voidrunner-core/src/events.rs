//! Events emitted by the simulation for audio and visual feedback.
//!
//! The core only decides that an effect happens and with what parameters;
//! presentation is somebody else's job.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::ToneCue;

/// Particle burst descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleBurst {
    pub pos: DVec2,
    pub color: u32,
    pub count: u32,
    pub speed: f64,
    pub lifetime: f64,
}

/// Effect notifications for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EffectEvent {
    Tone { cue: ToneCue },
    Shake { magnitude: f64, duration: f64 },
    Flash { color: u32, duration: f64 },
    Particles(ParticleBurst),
}
