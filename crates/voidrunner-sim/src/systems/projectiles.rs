//! Projectile update: homing steering, lifetime expiry and off-field removal.

use glam::DVec2;
use hecs::{Entity, World};

use voidrunner_core::components::{Enemy, Position, Projectile, Velocity};
use voidrunner_core::constants::{HOMING_RADIUS, HOMING_STEER_RATE, OFF_FIELD_MARGIN};
use voidrunner_core::types::{in_field, tick_down};

/// Live enemy positions in pool order.
pub fn enemy_positions(world: &World) -> Vec<(u32, DVec2)> {
    let mut enemies: Vec<(u32, DVec2)> = world
        .query::<(&Position, &Enemy)>()
        .iter()
        .filter(|(_, (_, enemy))| enemy.hp > 0)
        .map(|(_, (pos, enemy))| (enemy.id, pos.0))
        .collect();
    enemies.sort_by_key(|(id, _)| *id);
    enemies
}

/// Nearest point within `radius` of `from`; ties go to the earlier entry.
pub fn nearest_within(targets: &[(u32, DVec2)], from: DVec2, radius: f64) -> Option<DVec2> {
    let mut best: Option<(f64, DVec2)> = None;
    for &(_, pos) in targets {
        let d2 = from.distance_squared(pos);
        if d2 > radius * radius {
            continue;
        }
        if best.map_or(true, |(b, _)| d2 < b) {
            best = Some((d2, pos));
        }
    }
    best.map(|(_, pos)| pos)
}

/// Re-steer homing projectiles toward the nearest enemy in range, blending
/// a fraction of the seek velocity in and preserving speed.
pub fn steer_homing(world: &mut World, dt: f64) {
    let targets = enemy_positions(world);
    if targets.is_empty() {
        return;
    }
    let blend = (HOMING_STEER_RATE * dt).min(1.0);
    for (_entity, (pos, vel, projectile)) in
        world.query_mut::<(&Position, &mut Velocity, &Projectile)>()
    {
        if !projectile.homing || !projectile.owner.is_friendly() {
            continue;
        }
        let Some(target) = nearest_within(&targets, pos.0, HOMING_RADIUS) else {
            continue;
        };
        let speed = vel.0.length();
        let seek = (target - pos.0).normalize_or_zero() * speed;
        let steered = (vel.0 + (seek - vel.0) * blend).normalize_or_zero();
        if steered != DVec2::ZERO {
            vel.0 = steered * speed;
        }
    }
}

/// Age projectiles and queue expired or off-field ones for removal.
pub fn expire(world: &mut World, dt: f64, despawn_buffer: &mut Vec<Entity>) {
    for (entity, (pos, projectile)) in world.query_mut::<(&Position, &mut Projectile)>() {
        projectile.life = tick_down(projectile.life, dt);
        if projectile.life == 0.0 || !in_field(pos.0, OFF_FIELD_MARGIN) {
            despawn_buffer.push(entity);
        }
    }
}
