//! Companion drone: orbits the player and snipes the nearest enemy in range.

use glam::DVec2;
use hecs::World;

use voidrunner_core::components::Drone;
use voidrunner_core::constants::*;
use voidrunner_core::types::{tick_down, unit_from_angle};

use crate::session::Session;
use crate::systems::projectiles::{enemy_positions, nearest_within};
use crate::world_setup::{spawn_projectile, ProjectileSpec};

/// Fire interval for a drone level.
pub fn fire_interval(level: u32) -> f64 {
    DRONE_FIRE_INTERVAL - DRONE_FIRE_INTERVAL_PER_LEVEL * level.saturating_sub(1) as f64
}

/// Drone position around the player.
pub fn drone_position(drone: &Drone, player: DVec2) -> DVec2 {
    player + unit_from_angle(drone.angle) * drone.orbit_radius
}

pub fn run(world: &mut World, session: &mut Session, dt: f64) {
    let drone = &mut session.drone;
    drone.angle = (drone.angle + DRONE_ORBIT_SPEED * dt).rem_euclid(std::f64::consts::TAU);
    drone.fire_cooldown = tick_down(drone.fire_cooldown, dt);
    if drone.fire_cooldown > 0.0 {
        return;
    }

    let origin = drone_position(drone, session.player.pos);
    let targets = enemy_positions(world);
    let Some(target) = nearest_within(&targets, origin, DRONE_RANGE) else {
        return;
    };
    let dir = (target - origin).normalize_or_zero();
    if dir == DVec2::ZERO {
        return;
    }
    session.drone.fire_cooldown = fire_interval(session.drone.level);
    spawn_projectile(world, session, ProjectileSpec::drone(), origin, dir);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_levels_fire_faster() {
        assert_eq!(fire_interval(1), DRONE_FIRE_INTERVAL);
        assert!(fire_interval(2) < fire_interval(1));
        assert!(fire_interval(DRONE_MAX_LEVEL) > 0.0);
    }
}
