//! Kinematic integration.
//!
//! The player integrates with accelerate/clamp/drag; pooled entities
//! integrate `position += velocity * dt` and are then confined: enemies
//! bounce off the field walls (a dashing charger keeps dashing along the
//! reflected heading), ricochet bullets reflect while they have bounces left.

use glam::{BVec2, DVec2};
use hecs::World;

use voidrunner_core::commands::ControlInput;
use voidrunner_core::components::{Enemy, Position, Projectile, Velocity};
use voidrunner_core::enums::EnemyMode;
use voidrunner_core::constants::*;
use voidrunner_core::types::clamp_to_field;

use crate::session::Session;

/// Integrate the player craft for one step.
pub fn run_player(session: &mut Session, controls: &ControlInput, dt: f64) {
    let max_speed = session.player_max_speed();
    let player = &mut session.player;

    if player.dash_timer > 0.0 {
        player.vel = player.dash_dir * DASH_SPEED;
    } else if controls.movement != DVec2::ZERO {
        player.vel += controls.movement * player.accel * dt;
        player.vel = player.vel.clamp_length_max(max_speed);
    } else {
        player.vel *= (-player.drag * dt).exp();
    }

    match controls.aim {
        Some(aim) => {
            let to_aim = (aim - player.pos).normalize_or_zero();
            if to_aim != DVec2::ZERO {
                player.facing = to_aim;
            }
        }
        None => {
            if player.vel.length() > FACING_SPEED_THRESHOLD {
                player.facing = player.vel.normalize();
            }
        }
    }

    player.pos = clamp_to_field(player.pos + player.vel * dt, player.radius);
}

/// Run kinematic integration for all entities with Position + Velocity.
pub fn run(world: &mut World, dt: f64) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.0 += vel.0 * dt;
    }
}

/// Keep enemies inside the field, inverting velocity on the axis crossed.
/// A dash heading is mirrored too, since the FSM re-derives dash velocity
/// from it every step.
pub fn confine_enemies(world: &mut World) {
    for (_entity, (pos, vel, enemy)) in
        world.query_mut::<(&mut Position, &mut Velocity, &mut Enemy)>()
    {
        let crossed = reflect(&mut pos.0, &mut vel.0, enemy.radius);
        if enemy.mode == EnemyMode::Dash {
            if crossed.x {
                enemy.dash_dir.x = -enemy.dash_dir.x;
            }
            if crossed.y {
                enemy.dash_dir.y = -enemy.dash_dir.y;
            }
        }
    }
}

/// Reflect ricochet projectiles off the field walls.
pub fn bounce_projectiles(world: &mut World) {
    for (_entity, (pos, vel, projectile)) in
        world.query_mut::<(&mut Position, &mut Velocity, &mut Projectile)>()
    {
        if projectile.bounces == 0 {
            continue;
        }
        if reflect(&mut pos.0, &mut vel.0, projectile.radius).any() {
            projectile.bounces -= 1;
        }
    }
}

/// Clamp a circle into the field and flip the velocity component of each
/// crossed axis. Returns the axes on which a wall was hit.
fn reflect(pos: &mut DVec2, vel: &mut DVec2, radius: f64) -> BVec2 {
    let clamped = clamp_to_field(*pos, radius);
    let crossed = BVec2::new(clamped.x != pos.x, clamped.y != pos.y);
    if crossed.x {
        vel.x = -vel.x;
    }
    if crossed.y {
        vel.y = -vel.y;
    }
    *pos = clamped;
    crossed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflect_flips_only_the_crossed_axis() {
        let mut pos = DVec2::new(-3.0, 100.0);
        let mut vel = DVec2::new(-50.0, 20.0);
        assert_eq!(reflect(&mut pos, &mut vel, 10.0), BVec2::new(true, false));
        assert_eq!(pos, DVec2::new(10.0, 100.0));
        assert_eq!(vel, DVec2::new(50.0, 20.0));
    }

    #[test]
    fn idle_player_drags_to_rest_and_keeps_facing() {
        let mut session = Session::new(DEFAULT_RESOURCE_GOAL, DEFAULT_GEM_TARGET_COUNT);
        session.player.vel = DVec2::new(100.0, 0.0);
        let facing = session.player.facing;
        let idle = ControlInput::default();
        for _ in 0..600 {
            run_player(&mut session, &idle, DT);
        }
        assert!(session.player.vel.length() < 1e-6);
        // Facing followed velocity while moving, then stayed put.
        assert_ne!(session.player.facing, facing);
        assert_eq!(session.player.facing, DVec2::X);
    }

    #[test]
    fn movement_is_capped_at_max_speed() {
        let mut session = Session::new(DEFAULT_RESOURCE_GOAL, DEFAULT_GEM_TARGET_COUNT);
        let input = ControlInput {
            movement: DVec2::Y,
            aim: None,
            fire: false,
        };
        for _ in 0..30 {
            run_player(&mut session, &input, DT);
        }
        assert!((session.player.vel.length() - PLAYER_BASE_SPEED).abs() < 1e-9);

        session.in_slow_field = true;
        run_player(&mut session, &input, DT);
        assert!(session.player.vel.length() <= PLAYER_BASE_SPEED * SLOW_FIELD_FACTOR + 1e-9);
    }

    #[test]
    fn aim_point_sets_facing() {
        let mut session = Session::new(DEFAULT_RESOURCE_GOAL, DEFAULT_GEM_TARGET_COUNT);
        let pos = session.player.pos;
        let input = ControlInput {
            movement: DVec2::ZERO,
            aim: Some(pos + DVec2::new(0.0, 50.0)),
            fire: false,
        };
        run_player(&mut session, &input, DT);
        assert_eq!(session.player.facing, DVec2::Y);
    }
}
