//! Entity spawn factories and placement helpers.
//!
//! Creates enemy, projectile, pickup and hazard entities with the
//! appropriate component bundles. Every factory takes an id from the
//! session so pool order stays spawn order.

use glam::DVec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use voidrunner_core::components::*;
use voidrunner_core::constants::*;
use voidrunner_core::enums::*;
use voidrunner_core::types::{clamp_to_field, field_center, unit_from_angle};

use voidrunner_enemy_ai::profiles::{get_profile, initial_cooldowns};

use crate::session::Session;

/// Attempts at finding a spawn point that satisfies a distance constraint.
const PLACEMENT_ATTEMPTS: usize = 16;

/// Set up a fresh run: seed the gem field and arm the first wave.
pub fn setup_run(world: &mut World, session: &mut Session, rng: &mut ChaCha8Rng) {
    world.clear();
    replenish_gems(world, session, rng);
    session.wave_countdown = Some(WAVE_COUNTDOWN);
}

/// Spawn an enemy of `species` at `pos` with an initial velocity.
pub fn spawn_enemy(
    world: &mut World,
    session: &mut Session,
    rng: &mut ChaCha8Rng,
    species: Species,
    pos: DVec2,
    vel: DVec2,
) -> Entity {
    let profile = get_profile(species);
    let orbit_dir = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    let enemy = Enemy {
        id: session.alloc_id(),
        species,
        mode: EnemyMode::Normal,
        radius: profile.radius,
        hp: profile.hp,
        max_hp: profile.hp,
        timers: initial_cooldowns(species),
        orbit_radius: profile.orbit_radius.unwrap_or(0.0),
        orbit_dir,
        dash_dir: DVec2::ZERO,
        splits_on_death: profile.splits_on_death,
    };
    world.spawn((
        Position(clamp_to_field(pos, profile.radius)),
        Velocity(vel),
        enemy,
    ))
}

/// Projectile attributes that vary by source and ammo mode.
#[derive(Debug, Clone, Copy)]
pub struct ProjectileSpec {
    pub owner: ProjectileOwner,
    pub speed: f64,
    pub radius: f64,
    pub life: f64,
    pub damage: i32,
    pub pierce: u32,
    pub homing: bool,
    pub bounces: u32,
}

impl ProjectileSpec {
    /// Player bullet for the given ammo mode.
    pub fn player(mode: AmmoMode) -> Self {
        Self {
            owner: ProjectileOwner::Player,
            speed: BULLET_SPEED,
            radius: BULLET_RADIUS,
            life: BULLET_LIFETIME,
            damage: BULLET_DAMAGE,
            pierce: if mode == AmmoMode::Pierce { PIERCE_COUNT } else { 0 },
            homing: mode == AmmoMode::Homing,
            bounces: if mode == AmmoMode::Ricochet {
                RICOCHET_BOUNCES
            } else {
                0
            },
        }
    }

    pub fn drone() -> Self {
        Self {
            owner: ProjectileOwner::Drone,
            speed: DRONE_BULLET_SPEED,
            radius: DRONE_BULLET_RADIUS,
            life: DRONE_BULLET_LIFETIME,
            damage: DRONE_BULLET_DAMAGE,
            pierce: 0,
            homing: false,
            bounces: 0,
        }
    }

    pub fn enemy() -> Self {
        Self {
            owner: ProjectileOwner::Enemy,
            speed: ENEMY_BULLET_SPEED,
            radius: ENEMY_BULLET_RADIUS,
            life: ENEMY_BULLET_LIFETIME,
            damage: ENEMY_BULLET_DAMAGE,
            pierce: 0,
            homing: false,
            bounces: 0,
        }
    }
}

/// Spawn a projectile travelling along unit direction `dir`.
pub fn spawn_projectile(
    world: &mut World,
    session: &mut Session,
    spec: ProjectileSpec,
    pos: DVec2,
    dir: DVec2,
) -> Entity {
    let projectile = Projectile {
        id: session.alloc_id(),
        owner: spec.owner,
        radius: spec.radius,
        life: spec.life,
        damage: spec.damage,
        pierce: spec.pierce,
        homing: spec.homing,
        bounces: spec.bounces,
    };
    world.spawn((Position(pos), Velocity(dir * spec.speed), projectile))
}

/// Spawn a pickup. Gems never expire; the timed kinds carry a lifetime.
pub fn spawn_pickup(world: &mut World, session: &mut Session, kind: PickupKind, pos: DVec2) -> Entity {
    let (radius, life) = match kind {
        PickupKind::Gem => (GEM_RADIUS, None),
        PickupKind::FuelPod => (FUEL_POD_RADIUS, Some(FUEL_POD_LIFETIME)),
        PickupKind::AmmoMod(_) => (AMMO_MOD_RADIUS, Some(AMMO_MOD_LIFETIME)),
    };
    let pickup = Pickup {
        id: session.alloc_id(),
        kind,
        radius,
        life,
    };
    world.spawn((Position(pos), pickup))
}

/// Spawn an area hazard.
pub fn spawn_hazard(world: &mut World, session: &mut Session, kind: HazardKind, pos: DVec2) -> Entity {
    let (radius, life) = match kind {
        HazardKind::SlowField => (SLOW_FIELD_RADIUS, SLOW_FIELD_LIFETIME),
        HazardKind::RiskZone => (RISK_ZONE_RADIUS, RISK_ZONE_LIFETIME),
    };
    let hazard = Hazard {
        id: session.alloc_id(),
        kind,
        radius,
        life,
    };
    world.spawn((Position(pos), hazard))
}

/// Top the gem field up to the target count.
pub fn replenish_gems(world: &mut World, session: &mut Session, rng: &mut ChaCha8Rng) {
    let present = world
        .query::<&Pickup>()
        .iter()
        .filter(|(_, p)| p.kind == PickupKind::Gem)
        .count();
    let min_dist = GEM_MAGNET_RADIUS + PICKUP_EDGE_INSET;
    for _ in present..session.gem_target_count {
        let pos = random_point_away_from(rng, session.player.pos, min_dist);
        spawn_pickup(world, session, PickupKind::Gem, pos);
    }
}

/// Uniform point inside the field, `PICKUP_EDGE_INSET` from every edge.
pub fn random_field_point(rng: &mut ChaCha8Rng) -> DVec2 {
    DVec2::new(
        rng.gen_range(PICKUP_EDGE_INSET..FIELD_WIDTH - PICKUP_EDGE_INSET),
        rng.gen_range(PICKUP_EDGE_INSET..FIELD_HEIGHT - PICKUP_EDGE_INSET),
    )
}

/// Field point at least `min_dist` from `avoid`, falling back to the last
/// candidate when the attempts run out.
pub fn random_point_away_from(rng: &mut ChaCha8Rng, avoid: DVec2, min_dist: f64) -> DVec2 {
    let mut pos = random_field_point(rng);
    for _ in 1..PLACEMENT_ATTEMPTS {
        if pos.distance(avoid) >= min_dist {
            break;
        }
        pos = random_field_point(rng);
    }
    pos
}

/// Random point on a field edge, preferring points at least
/// `SPAWN_MIN_PLAYER_DIST` from the player.
pub fn random_edge_point(rng: &mut ChaCha8Rng, player: DVec2) -> DVec2 {
    let mut best = edge_point(rng);
    for _ in 1..PLACEMENT_ATTEMPTS {
        if best.distance(player) >= SPAWN_MIN_PLAYER_DIST {
            break;
        }
        let candidate = edge_point(rng);
        if candidate.distance(player) > best.distance(player) {
            best = candidate;
        }
    }
    best
}

fn edge_point(rng: &mut ChaCha8Rng) -> DVec2 {
    match rng.gen_range(0..4) {
        0 => DVec2::new(rng.gen_range(0.0..FIELD_WIDTH), 0.0),
        1 => DVec2::new(FIELD_WIDTH, rng.gen_range(0.0..FIELD_HEIGHT)),
        2 => DVec2::new(rng.gen_range(0.0..FIELD_WIDTH), FIELD_HEIGHT),
        _ => DVec2::new(0.0, rng.gen_range(0.0..FIELD_HEIGHT)),
    }
}

/// Point `dist` away from `center` in a random direction, clamped inside the field.
pub fn random_point_near(rng: &mut ChaCha8Rng, center: DVec2, dist: f64, radius: f64) -> DVec2 {
    let angle = rng.gen_range(0.0..std::f64::consts::TAU);
    clamp_to_field(center + unit_from_angle(angle) * dist, radius)
}

/// The gate opens on the far side of the field: the player's position
/// mirrored through the field centre, or the farthest corner when the
/// player stands too near the centre for the mirror to be far away.
pub fn gate_position(player: DVec2) -> DVec2 {
    let center = field_center();
    let mirrored = clamp_to_field(center * 2.0 - player, GATE_RADIUS);
    if mirrored.distance(player) >= GATE_MIN_PLAYER_DIST {
        return mirrored;
    }
    let inset = GATE_RADIUS + PICKUP_EDGE_INSET;
    DVec2::new(
        if player.x < center.x { FIELD_WIDTH - inset } else { inset },
        if player.y < center.y { FIELD_HEIGHT - inset } else { inset },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn gate_mirrors_player_through_centre() {
        let pos = gate_position(DVec2::new(100.0, 100.0));
        assert_eq!(pos, DVec2::new(FIELD_WIDTH - 100.0, FIELD_HEIGHT - 100.0));

        // Near the centre the mirror would sit on the player; use a corner.
        let centred = gate_position(field_center());
        assert!(centred.distance(field_center()) >= GATE_MIN_PLAYER_DIST);
    }

    #[test]
    fn edge_points_avoid_the_player() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let player = field_center();
        for _ in 0..200 {
            let p = random_edge_point(&mut rng, player);
            assert!(p.distance(player) >= SPAWN_MIN_PLAYER_DIST);
            let on_edge =
                p.x == 0.0 || p.x == FIELD_WIDTH || p.y == 0.0 || p.y == FIELD_HEIGHT;
            assert!(on_edge, "{p:?}");
        }
    }

    #[test]
    fn replenish_fills_to_target() {
        let mut world = World::new();
        let mut session = Session::new(DEFAULT_RESOURCE_GOAL, 5);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        replenish_gems(&mut world, &mut session, &mut rng);
        replenish_gems(&mut world, &mut session, &mut rng);
        let gems = world.query::<&Pickup>().iter().count();
        assert_eq!(gems, 5);
    }
}
