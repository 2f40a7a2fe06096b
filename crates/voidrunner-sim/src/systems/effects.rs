//! Cosmetic effect bookkeeping.
//!
//! Systems raise effect events through `EffectState`; the presentation
//! layer drains them with `take_effects` and reads the shake/flash timers
//! from the snapshot.

use glam::DVec2;

use voidrunner_core::enums::ToneCue;
use voidrunner_core::events::{EffectEvent, ParticleBurst};
use voidrunner_core::state::EffectsView;
use voidrunner_core::types::tick_down;

#[derive(Debug, Clone, Default)]
pub struct EffectState {
    pub shake_magnitude: f64,
    pub shake_timer: f64,
    pub flash_color: u32,
    pub flash_timer: f64,
    /// Events raised since the last drain.
    pub pending: Vec<EffectEvent>,
}

impl EffectState {
    pub fn tone(&mut self, cue: ToneCue) {
        self.pending.push(EffectEvent::Tone { cue });
    }

    /// A stronger shake replaces a weaker one; a weaker one never cuts a
    /// stronger one short.
    pub fn shake(&mut self, magnitude: f64, duration: f64) {
        if self.shake_timer == 0.0 || magnitude >= self.shake_magnitude {
            self.shake_magnitude = magnitude;
            self.shake_timer = self.shake_timer.max(duration);
        }
        self.pending.push(EffectEvent::Shake {
            magnitude,
            duration,
        });
    }

    pub fn flash(&mut self, color: u32, duration: f64) {
        self.flash_color = color;
        self.flash_timer = duration;
        self.pending.push(EffectEvent::Flash { color, duration });
    }

    pub fn burst(&mut self, pos: DVec2, color: u32, count: u32, speed: f64, lifetime: f64) {
        self.pending.push(EffectEvent::Particles(ParticleBurst {
            pos,
            color,
            count,
            speed,
            lifetime,
        }));
    }

    pub fn view(&self) -> EffectsView {
        EffectsView {
            shake_magnitude: self.shake_magnitude,
            shake_timer: self.shake_timer,
            flash_color: self.flash_color,
            flash_timer: self.flash_timer,
        }
    }
}

/// Decay shake and flash timers.
pub fn run(effects: &mut EffectState, dt: f64) {
    effects.shake_timer = tick_down(effects.shake_timer, dt);
    if effects.shake_timer == 0.0 {
        effects.shake_magnitude = 0.0;
    }
    effects.flash_timer = tick_down(effects.flash_timer, dt);
}
