//! Ability and cooldown system: timer decay, dash and shield burst.

use glam::DVec2;
use hecs::World;
use log::debug;

use voidrunner_core::commands::ControlInput;
use voidrunner_core::components::{Enemy, Position, Velocity};
use voidrunner_core::constants::*;
use voidrunner_core::enums::{AmmoMode, ToneCue};
use voidrunner_core::types::{circles_overlap, tick_down};

use crate::session::Session;

/// Edge-triggered abilities requested since the last step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbilityTriggers {
    pub dash: bool,
    pub shield: bool,
}

/// Decay player timers, then fire any requested abilities.
pub fn run(
    world: &mut World,
    session: &mut Session,
    controls: &ControlInput,
    triggers: AbilityTriggers,
    dt: f64,
) {
    decay_timers(session, dt);
    if triggers.dash {
        try_dash(session, controls);
    }
    if triggers.shield {
        try_shield(world, session);
    }
}

fn decay_timers(session: &mut Session, dt: f64) {
    let player = &mut session.player;
    player.invuln = tick_down(player.invuln, dt);
    player.dash_timer = tick_down(player.dash_timer, dt);
    player.dash_cooldown = tick_down(player.dash_cooldown, dt);
    player.shield_cooldown = tick_down(player.shield_cooldown, dt);
    player.fire_cooldown = tick_down(player.fire_cooldown, dt);
    player.boost_timer = tick_down(player.boost_timer, dt);

    if player.ammo_mode != AmmoMode::Tri {
        player.ammo_timer = tick_down(player.ammo_timer, dt);
        if player.ammo_timer == 0.0 {
            player.ammo_mode = AmmoMode::Tri;
        }
    }

    if player.chain > 0 {
        player.chain_timer = tick_down(player.chain_timer, dt);
        if player.chain_timer == 0.0 {
            player.chain = 0;
        }
    }
}

fn try_dash(session: &mut Session, controls: &ControlInput) {
    let player = &mut session.player;
    if player.dash_timer > 0.0 || player.dash_cooldown > 0.0 {
        debug!("dash ignored: active or cooling down");
        return;
    }
    let dir = if controls.movement != DVec2::ZERO {
        controls.movement
    } else {
        player.facing
    };
    player.dash_dir = dir;
    player.dash_timer = DASH_DURATION;
    player.dash_cooldown = DASH_COOLDOWN;
    player.invuln = player.invuln.max(DASH_INVULN_SECS);
    player.vel = dir * DASH_SPEED;

    let pos = player.pos;
    session.effects.tone(ToneCue::Dash);
    session.effects.burst(pos, COLOR_PLAYER, 10, 160.0, 0.25);
}

fn try_shield(world: &mut World, session: &mut Session) {
    if session.player.shield_cooldown > 0.0 {
        debug!("shield ignored: cooling down");
        return;
    }
    let center = session.player.pos;
    for (_entity, (pos, vel, enemy)) in world.query_mut::<(&Position, &mut Velocity, &mut Enemy)>() {
        if !circles_overlap(center, SHIELD_RADIUS, pos.0, enemy.radius) {
            continue;
        }
        let away = (pos.0 - center).normalize_or_zero();
        let away = if away == DVec2::ZERO { DVec2::X } else { away };
        vel.0 = away * SHIELD_KNOCKBACK;
        enemy.timers.stun = SHIELD_STUN_SECS;
        enemy.hp = (enemy.hp - SHIELD_DAMAGE).max(1);
    }
    session.player.shield_cooldown = session.player.shield_cooldown_max;

    session.effects.tone(ToneCue::Shield);
    session.effects.shake(6.0, 0.2);
    session.effects.flash(COLOR_SHIELD, 0.15);
    session.effects.burst(center, COLOR_SHIELD, 24, 260.0, 0.4);
}
