//! Weapon system: heat model with overheat hysteresis and volley firing.

use hecs::World;

use voidrunner_core::commands::ControlInput;
use voidrunner_core::constants::*;
use voidrunner_core::enums::{AmmoMode, ToneCue};
use voidrunner_core::types::fan_directions;

use crate::session::Session;
use crate::world_setup::{spawn_projectile, ProjectileSpec};

/// Bullet count and fan spread for an ammo mode.
pub fn volley_shape(mode: AmmoMode) -> (u32, f64) {
    match mode {
        AmmoMode::Tri => (3, TRI_SPREAD),
        AmmoMode::Five => (5, FIVE_SPREAD),
        AmmoMode::Pierce => (3, PIERCE_SPREAD),
        AmmoMode::Homing => (3, HOMING_SPREAD),
        AmmoMode::Ricochet => (3, RICOCHET_SPREAD),
    }
}

/// Update heat and fire a volley when allowed.
pub fn run(world: &mut World, session: &mut Session, controls: &ControlInput, dt: f64) {
    update_heat(session, controls.fire, dt);

    let player = &session.player;
    if !controls.fire || player.overheated || player.fire_cooldown > 0.0 {
        return;
    }

    let mode = player.ammo_mode;
    let facing = player.facing;
    let muzzle = player.pos + facing * MUZZLE_OFFSET;
    let (count, spread) = volley_shape(mode);
    let spec = ProjectileSpec::player(mode);
    for dir in fan_directions(facing, count, spread) {
        spawn_projectile(world, session, spec, muzzle, dir);
    }

    session.player.fire_cooldown = FIRE_COOLDOWN;
    session.stats.shots_fired += 1;
    session.effects.tone(ToneCue::Fire);
}

/// Heat rises while the trigger is held on a working weapon and falls
/// otherwise, faster with the trigger released. Overheat engages at max and
/// releases at `OVERHEAT_RELEASE_FRACTION` of max.
pub fn update_heat(session: &mut Session, trigger: bool, dt: f64) {
    let player = &mut session.player;
    if trigger && !player.overheated {
        player.heat += HEAT_RISE_RATE * dt;
    } else {
        player.heat -= HEAT_COOL_RATE * dt;
        if !trigger {
            player.heat -= HEAT_RELEASE_COOL_RATE * dt;
        }
    }
    player.heat = player.heat.clamp(0.0, HEAT_MAX);

    if !player.overheated && player.heat >= HEAT_MAX {
        player.overheated = true;
        session.effects.tone(ToneCue::Overheat);
    } else if player.overheated && player.heat <= HEAT_MAX * OVERHEAT_RELEASE_FRACTION {
        player.overheated = false;
    }
}
