//! Enemy behavior finite state machine.
//!
//! Pure functions that compute mode transitions, velocity adjustments and
//! side-effect requests for one enemy, based on its species, current mode,
//! timers and the player's position. No ECS dependency; operates on plain
//! data. The simulation applies the returned update and carries out the
//! requested actions.

use glam::DVec2;

use voidrunner_core::components::EnemyTimers;
use voidrunner_core::constants::*;
use voidrunner_core::enums::{EnemyMode, Species};
use voidrunner_core::types::tick_down;

use crate::profiles::{get_profile, SpeciesProfile};

/// Input to the enemy FSM for a single entity.
#[derive(Debug, Clone, Copy)]
pub struct EnemyContext {
    pub species: Species,
    pub mode: EnemyMode,
    pub position: DVec2,
    pub velocity: DVec2,
    pub player_position: DVec2,
    pub timers: EnemyTimers,
    pub orbit_radius: f64,
    pub orbit_dir: f64,
    pub dash_dir: DVec2,
    pub dt: f64,
}

/// Side effects an enemy asks the simulation to perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnemyAction {
    /// Sapper: leave a slow field here.
    DropSlowField { at: DVec2 },
    /// Boss: spawn reinforcements beside this point.
    SpawnReinforcements { at: DVec2, count: u32 },
    /// Boss: fire a projectile fan.
    FireFan { origin: DVec2, heading: DVec2 },
}

/// Output from the enemy FSM.
#[derive(Debug, Clone)]
pub struct EnemyUpdate {
    pub mode: EnemyMode,
    pub velocity: DVec2,
    pub timers: EnemyTimers,
    pub dash_dir: DVec2,
    pub mode_changed: bool,
    pub actions: Vec<EnemyAction>,
}

/// Shared steering primitives toward the player.
#[derive(Debug, Clone, Copy)]
pub struct Steering {
    /// Unit vector toward the player (zero when on top of it).
    pub to_player: DVec2,
    /// `to_player` rotated a quarter turn.
    pub perp: DVec2,
    pub distance: f64,
}

/// Compute the pursuit and orbit basis from `from` toward `player`.
pub fn steering(from: DVec2, player: DVec2) -> Steering {
    let delta = player - from;
    let to_player = delta.normalize_or_zero();
    Steering {
        to_player,
        perp: to_player.perp(),
        distance: delta.length(),
    }
}

/// Evaluate the FSM for one enemy. Returns the updated mode, velocity and timers.
pub fn evaluate(ctx: &EnemyContext) -> EnemyUpdate {
    let profile = get_profile(ctx.species);
    let mut update = EnemyUpdate {
        mode: ctx.mode,
        velocity: ctx.velocity,
        timers: ctx.timers,
        dash_dir: ctx.dash_dir,
        mode_changed: false,
        actions: Vec::new(),
    };

    // A stunned enemy ignores its behavior entirely and is not speed-capped,
    // so shield knockback carries it away.
    if ctx.timers.stun > 0.0 {
        evaluate_stunned(ctx, &mut update);
        update.mode_changed = update.mode != ctx.mode;
        return update;
    }

    let steer = steering(ctx.position, ctx.player_position);

    match ctx.species {
        Species::Chaser | Species::Splitter | Species::Splitlet => {
            pursue(&mut update, &steer, &profile, ctx.dt);
        }
        Species::Skirmisher => {
            orbit(&mut update, ctx, &steer, &profile);
        }
        Species::Sapper => {
            orbit(&mut update, ctx, &steer, &profile);
            evaluate_sapper(&mut update, ctx, &steer);
        }
        Species::Charger => evaluate_charger(&mut update, ctx, &steer, &profile),
        Species::Boss => {
            pursue(&mut update, &steer, &profile, ctx.dt);
            evaluate_boss(&mut update, ctx, &steer);
        }
    }

    if update.mode != EnemyMode::Dash {
        update.velocity = update.velocity.clamp_length_max(profile.max_speed);
    }
    update.mode_changed = update.mode != ctx.mode;
    update
}

fn evaluate_stunned(ctx: &EnemyContext, update: &mut EnemyUpdate) {
    update.timers.stun = tick_down(ctx.timers.stun, ctx.dt);
    update.velocity = ctx.velocity * STUN_DAMPING;

    if update.timers.stun == 0.0 && ctx.species == Species::Charger {
        update.mode = EnemyMode::Normal;
        update.timers.windup = 0.0;
        update.timers.dash = 0.0;
        update.timers.charge_cooldown = CHARGER_COOLDOWN;
    }
}

/// Nudge velocity toward the player.
fn pursue(update: &mut EnemyUpdate, steer: &Steering, profile: &SpeciesProfile, dt: f64) {
    update.velocity += steer.to_player * profile.accel * dt;
}

/// Radial correction toward the preferred radius plus a tangential component.
fn orbit(update: &mut EnemyUpdate, ctx: &EnemyContext, steer: &Steering, profile: &SpeciesProfile) {
    let deviation = steer.distance - ctx.orbit_radius;
    let radial = (deviation * ORBIT_RADIAL_GAIN).clamp(-profile.accel, profile.accel);
    let tangential = steer.perp * ctx.orbit_dir * profile.accel * ORBIT_TANGENT_SHARE;
    update.velocity += (steer.to_player * radial + tangential) * ctx.dt;
}

fn evaluate_sapper(update: &mut EnemyUpdate, ctx: &EnemyContext, steer: &Steering) {
    update.timers.drop_cooldown = tick_down(ctx.timers.drop_cooldown, ctx.dt);
    if update.timers.drop_cooldown == 0.0 && steer.distance <= SAPPER_DROP_RANGE {
        update
            .actions
            .push(EnemyAction::DropSlowField { at: ctx.position });
        update.timers.drop_cooldown = SAPPER_DROP_COOLDOWN;
    }
}

fn evaluate_charger(
    update: &mut EnemyUpdate,
    ctx: &EnemyContext,
    steer: &Steering,
    profile: &SpeciesProfile,
) {
    match ctx.mode {
        EnemyMode::Normal => {
            pursue(update, steer, profile, ctx.dt);
            update.timers.charge_cooldown = tick_down(ctx.timers.charge_cooldown, ctx.dt);
            if update.timers.charge_cooldown == 0.0 && steer.distance <= CHARGER_RANGE {
                update.mode = EnemyMode::Windup;
                update.timers.windup = CHARGER_WINDUP;
            }
        }
        EnemyMode::Windup => {
            update.velocity = ctx.velocity * WINDUP_BRAKE;
            update.timers.windup = tick_down(ctx.timers.windup, ctx.dt);
            if update.timers.windup == 0.0 {
                let dir = if steer.to_player == DVec2::ZERO {
                    DVec2::X
                } else {
                    steer.to_player
                };
                update.mode = EnemyMode::Dash;
                update.dash_dir = dir;
                update.timers.dash = CHARGER_DASH_DURATION;
                update.velocity = dir * CHARGER_DASH_SPEED;
            }
        }
        EnemyMode::Dash => {
            update.velocity = ctx.dash_dir * CHARGER_DASH_SPEED;
            update.timers.dash = tick_down(ctx.timers.dash, ctx.dt);
            if update.timers.dash == 0.0 {
                update.mode = EnemyMode::Normal;
                update.timers.charge_cooldown = CHARGER_COOLDOWN;
            }
        }
    }
}

fn evaluate_boss(update: &mut EnemyUpdate, ctx: &EnemyContext, steer: &Steering) {
    update.timers.spawn_cooldown = tick_down(ctx.timers.spawn_cooldown, ctx.dt);
    if update.timers.spawn_cooldown == 0.0 {
        update.actions.push(EnemyAction::SpawnReinforcements {
            at: ctx.position,
            count: BOSS_REINFORCEMENTS,
        });
        update.timers.spawn_cooldown = BOSS_SPAWN_COOLDOWN;
    }

    update.timers.fire_cooldown = tick_down(ctx.timers.fire_cooldown, ctx.dt);
    if update.timers.fire_cooldown == 0.0 {
        let heading = if steer.to_player == DVec2::ZERO {
            DVec2::Y
        } else {
            steer.to_player
        };
        update.actions.push(EnemyAction::FireFan {
            origin: ctx.position,
            heading,
        });
        update.timers.fire_cooldown = BOSS_FIRE_COOLDOWN;
    }
}
