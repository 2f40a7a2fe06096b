//! Wave spawning system. Arms a countdown whenever the field is clear and
//! spawns the next wave when it runs out.

use glam::DVec2;
use hecs::World;
use log::info;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use voidrunner_core::components::Enemy;
use voidrunner_core::constants::*;
use voidrunner_core::enums::{Species, ToneCue};
use voidrunner_core::types::tick_down;

use crate::session::Session;
use crate::world_setup::{random_edge_point, spawn_enemy};

/// Whether wave `n` is a boss wave.
pub fn is_boss_wave(wave: u32) -> bool {
    wave > 0 && wave % BOSS_WAVE_INTERVAL == 0
}

/// Number of standard enemies in a regular wave.
pub fn wave_size(wave: u32) -> u32 {
    (WAVE_BASE_ENEMIES + WAVE_ENEMIES_PER_WAVE * wave.saturating_sub(1)).min(WAVE_MAX_ENEMIES)
}

pub fn run(world: &mut World, session: &mut Session, rng: &mut ChaCha8Rng, dt: f64) {
    if session.gate.is_some() {
        session.wave_countdown = None;
        return;
    }
    let enemies = world.query::<&Enemy>().iter().count();
    if enemies > 0 {
        return;
    }

    if session.boss_wave_active {
        session.boss_wave_active = false;
        if session.drone.level < DRONE_MAX_LEVEL {
            session.drone.level += 1;
            info!("drone upgraded to level {}", session.drone.level);
            session.effects.tone(ToneCue::PowerUp);
        }
    }

    let remaining = match session.wave_countdown {
        Some(t) => tick_down(t, dt),
        None => tick_down(WAVE_COUNTDOWN, dt),
    };
    if remaining > 0.0 {
        session.wave_countdown = Some(remaining);
        return;
    }

    session.wave_countdown = None;
    session.wave += 1;
    spawn_wave(world, session, rng);
}

fn spawn_wave(world: &mut World, session: &mut Session, rng: &mut ChaCha8Rng) {
    let wave = session.wave;
    if is_boss_wave(wave) {
        info!("wave {wave}: boss");
        spawn_at_edge(world, session, rng, Species::Boss);
        for _ in 0..BOSS_SUPPORT_COUNT {
            let species = random_standard(rng);
            spawn_at_edge(world, session, rng, species);
        }
        session.boss_wave_active = true;
        session.effects.tone(ToneCue::BossWave);
        session.effects.shake(5.0, 0.4);
    } else {
        let count = wave_size(wave);
        info!("wave {wave}: {count} enemies");
        for _ in 0..count {
            let species = random_standard(rng);
            spawn_at_edge(world, session, rng, species);
        }
        session.effects.tone(ToneCue::WaveStart);
    }
}

fn random_standard(rng: &mut ChaCha8Rng) -> Species {
    Species::STANDARD[rng.gen_range(0..Species::STANDARD.len())]
}

fn spawn_at_edge(world: &mut World, session: &mut Session, rng: &mut ChaCha8Rng, species: Species) {
    let pos = random_edge_point(rng, session.player.pos);
    spawn_enemy(world, session, rng, species, pos, DVec2::ZERO);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fourth_wave_is_a_boss_wave() {
        let bosses: Vec<u32> = (1..=12).filter(|&w| is_boss_wave(w)).collect();
        assert_eq!(bosses, vec![4, 8, 12]);
    }

    #[test]
    fn wave_size_scales_and_caps() {
        assert_eq!(wave_size(1), WAVE_BASE_ENEMIES);
        assert_eq!(wave_size(2), WAVE_BASE_ENEMIES + WAVE_ENEMIES_PER_WAVE);
        assert_eq!(wave_size(100), WAVE_MAX_ENEMIES);
    }
}
