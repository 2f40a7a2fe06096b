//! Area hazards: lifetimes, player occupancy, risk-zone damage ticks and
//! timed risk-zone spawns.

use hecs::{Entity, World};
use log::debug;
use rand_chacha::ChaCha8Rng;

use voidrunner_core::components::{Hazard, Position};
use voidrunner_core::constants::*;
use voidrunner_core::enums::HazardKind;
use voidrunner_core::types::{point_in_circle, tick_down};

use crate::session::Session;
use crate::systems::cleanup;
use crate::systems::collision::hurt_player;
use crate::world_setup::{random_point_away_from, spawn_hazard};

pub fn run(
    world: &mut World,
    session: &mut Session,
    rng: &mut ChaCha8Rng,
    dt: f64,
    despawn_buffer: &mut Vec<Entity>,
) {
    for (entity, hazard) in world.query_mut::<&mut Hazard>() {
        hazard.life = tick_down(hazard.life, dt);
        if hazard.life == 0.0 {
            despawn_buffer.push(entity);
        }
    }
    cleanup::flush(world, despawn_buffer);

    update_occupancy(world, session);
    risk_damage(session, dt);
    spawn_risk_zone(world, session, rng, dt);
}

/// Refresh whether the player stands in a risk zone or slow field.
fn update_occupancy(world: &World, session: &mut Session) {
    let player = session.player.pos;
    let mut in_risk = false;
    let mut in_slow = false;
    for (_entity, (pos, hazard)) in world.query::<(&Position, &Hazard)>().iter() {
        if point_in_circle(player, pos.0, hazard.radius) {
            match hazard.kind {
                HazardKind::RiskZone => in_risk = true,
                HazardKind::SlowField => in_slow = true,
            }
        }
    }
    session.in_risk_zone = in_risk;
    session.in_slow_field = in_slow;
}

/// Staying inside a risk zone deals damage every `RISK_DAMAGE_INTERVAL`,
/// respecting invulnerability.
fn risk_damage(session: &mut Session, dt: f64) {
    if !session.in_risk_zone {
        session.risk_damage_timer = RISK_DAMAGE_INTERVAL;
        return;
    }
    session.risk_damage_timer = tick_down(session.risk_damage_timer, dt);
    if session.risk_damage_timer == 0.0 {
        session.risk_damage_timer = RISK_DAMAGE_INTERVAL;
        hurt_player(session, RISK_DAMAGE, None);
    }
}

/// A new risk zone appears every `RISK_ZONE_INTERVAL` while none is active.
fn spawn_risk_zone(world: &mut World, session: &mut Session, rng: &mut ChaCha8Rng, dt: f64) {
    let active = world
        .query::<&Hazard>()
        .iter()
        .any(|(_, h)| h.kind == HazardKind::RiskZone);
    if active {
        return;
    }
    session.risk_zone_timer = tick_down(session.risk_zone_timer, dt);
    if session.risk_zone_timer == 0.0 {
        session.risk_zone_timer = RISK_ZONE_INTERVAL;
        let pos = random_point_away_from(rng, session.player.pos, RISK_ZONE_RADIUS);
        debug!("risk zone at ({:.0}, {:.0})", pos.x, pos.y);
        spawn_hazard(world, session, HazardKind::RiskZone, pos);
    }
}
