//! Simulation constants and tuning parameters.
//!
//! Units: pixels, seconds, radians. The field origin is the top-left corner,
//! +x right, +y down.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Timers within this distance of zero are snapped to zero.
pub const TIMER_EPSILON: f64 = 1e-9;

/// Default cap on a single real-time frame delta (seconds).
pub const DEFAULT_MAX_FRAME_DELTA: f64 = 0.05;

// --- Field ---

/// Play field width (px).
pub const FIELD_WIDTH: f64 = 960.0;

/// Play field height (px).
pub const FIELD_HEIGHT: f64 = 540.0;

/// Projectiles farther than this outside the field are removed.
pub const OFF_FIELD_MARGIN: f64 = 24.0;

// --- Player ---

pub const PLAYER_RADIUS: f64 = 14.0;
pub const PLAYER_BASE_SPEED: f64 = 260.0;
pub const PLAYER_ACCEL: f64 = 1800.0;
/// Exponential drag coefficient applied when there is no movement intent (1/s).
pub const PLAYER_DRAG: f64 = 6.0;
pub const PLAYER_MAX_HEALTH: i32 = 5;
/// Facing follows velocity only above this speed.
pub const FACING_SPEED_THRESHOLD: f64 = 20.0;
/// Invulnerability granted after taking damage.
pub const HIT_INVULN_SECS: f64 = 1.0;
/// Speed imparted away from an enemy on body contact.
pub const CONTACT_KNOCKBACK: f64 = 320.0;
/// Damage dealt by enemy body contact.
pub const CONTACT_DAMAGE: i32 = 1;

// --- Dash ---

pub const DASH_SPEED: f64 = 720.0;
pub const DASH_DURATION: f64 = 0.16;
pub const DASH_COOLDOWN: f64 = 1.2;
pub const DASH_INVULN_SECS: f64 = 0.25;

// --- Shield burst ---

pub const SHIELD_RADIUS: f64 = 140.0;
pub const SHIELD_KNOCKBACK: f64 = 420.0;
pub const SHIELD_STUN_SECS: f64 = 0.8;
pub const SHIELD_DAMAGE: i32 = 1;
/// Shield cooldown before upgrades.
pub const SHIELD_BASE_COOLDOWN: f64 = 8.0;
/// Cooldown reduction per shield upgrade level.
pub const SHIELD_COOLDOWN_PER_LEVEL: f64 = 1.2;

// --- Speed boost (fuel pod at full health) ---

pub const BOOST_DURATION: f64 = 4.0;
pub const BOOST_MULTIPLIER: f64 = 1.35;

// --- Weapon heat ---

pub const HEAT_MAX: f64 = 100.0;
/// Heat gained per second while firing.
pub const HEAT_RISE_RATE: f64 = 55.0;
/// Heat lost per second while not firing (or overheated).
pub const HEAT_COOL_RATE: f64 = 30.0;
/// Additional heat lost per second while the trigger is released.
pub const HEAT_RELEASE_COOL_RATE: f64 = 45.0;
/// Overheat disengages once heat falls to this fraction of max.
pub const OVERHEAT_RELEASE_FRACTION: f64 = 0.35;
/// Minimum time between volleys.
pub const FIRE_COOLDOWN: f64 = 0.12;

// --- Player projectiles ---

pub const BULLET_SPEED: f64 = 620.0;
pub const BULLET_RADIUS: f64 = 4.0;
pub const BULLET_LIFETIME: f64 = 1.2;
pub const BULLET_DAMAGE: i32 = 1;
/// Bullets spawn this far ahead of the player centre.
pub const MUZZLE_OFFSET: f64 = 18.0;

// --- Ammo modes ---

pub const AMMO_MOD_DURATION: f64 = 10.0;
pub const TRI_SPREAD: f64 = 0.12;
pub const FIVE_SPREAD: f64 = 0.14;
pub const PIERCE_SPREAD: f64 = 0.08;
pub const PIERCE_COUNT: u32 = 2;
pub const HOMING_SPREAD: f64 = 0.22;
pub const RICOCHET_SPREAD: f64 = 0.12;
pub const RICOCHET_BOUNCES: u32 = 1;

// --- Homing ---

/// Homing bullets only seek enemies within this distance.
pub const HOMING_RADIUS: f64 = 260.0;
/// Fraction of seek velocity blended in per second.
pub const HOMING_STEER_RATE: f64 = 7.0;

// --- Enemy projectiles ---

pub const ENEMY_BULLET_SPEED: f64 = 260.0;
pub const ENEMY_BULLET_RADIUS: f64 = 6.0;
pub const ENEMY_BULLET_LIFETIME: f64 = 4.0;
pub const ENEMY_BULLET_DAMAGE: i32 = 1;
pub const BOSS_FAN_SPREAD: f64 = 0.25;
pub const BOSS_FAN_COUNT: u32 = 3;

// --- Companion drone ---

pub const DRONE_ORBIT_RADIUS: f64 = 46.0;
pub const DRONE_ORBIT_SPEED: f64 = 2.4;
pub const DRONE_RANGE: f64 = 300.0;
pub const DRONE_FIRE_INTERVAL: f64 = 0.9;
pub const DRONE_FIRE_INTERVAL_PER_LEVEL: f64 = 0.2;
pub const DRONE_MAX_LEVEL: u32 = 3;
pub const DRONE_BULLET_SPEED: f64 = 520.0;
pub const DRONE_BULLET_RADIUS: f64 = 3.5;
pub const DRONE_BULLET_LIFETIME: f64 = 1.0;
pub const DRONE_BULLET_DAMAGE: i32 = 1;

// --- Enemies ---

/// Per-step velocity damping while stunned.
pub const STUN_DAMPING: f64 = 0.9;
/// Per-step velocity damping during charger windup.
pub const WINDUP_BRAKE: f64 = 0.85;
/// Hard cap on live enemies (reinforcements are dropped beyond it).
pub const MAX_ENEMIES: usize = 40;
/// Wave enemies spawn at least this far from the player.
pub const SPAWN_MIN_PLAYER_DIST: f64 = 220.0;
/// Radial gain for orbiting species (accel per px of deviation).
pub const ORBIT_RADIAL_GAIN: f64 = 3.0;
/// Tangential share of acceleration for orbiting species.
pub const ORBIT_TANGENT_SHARE: f64 = 0.7;

pub const CHARGER_RANGE: f64 = 320.0;
pub const CHARGER_COOLDOWN: f64 = 2.4;
pub const CHARGER_WINDUP: f64 = 0.5;
pub const CHARGER_DASH_DURATION: f64 = 0.4;
pub const CHARGER_DASH_SPEED: f64 = 520.0;

pub const SAPPER_DROP_RANGE: f64 = 320.0;
pub const SAPPER_DROP_COOLDOWN: f64 = 3.5;

pub const SPLITLET_COUNT: u32 = 2;
/// Outward speed range for freshly split offspring.
pub const SPLITLET_BURST_SPEED: (f64, f64) = (120.0, 220.0);

pub const BOSS_SPAWN_COOLDOWN: f64 = 6.0;
pub const BOSS_FIRE_COOLDOWN: f64 = 1.8;
pub const BOSS_REINFORCEMENTS: u32 = 2;

// --- Pickups ---

pub const GEM_RADIUS: f64 = 8.0;
pub const GEM_SCORE: u64 = 10;
pub const GEM_MAGNET_RADIUS: f64 = 110.0;
pub const GEM_MAGNET_SPEED: f64 = 260.0;
pub const DEFAULT_GEM_TARGET_COUNT: usize = 6;
pub const DEFAULT_RESOURCE_GOAL: u32 = 40;

pub const FUEL_POD_RADIUS: f64 = 10.0;
pub const FUEL_POD_INTERVAL: f64 = 9.0;
pub const FUEL_POD_LIFETIME: f64 = 12.0;
pub const FUEL_POD_MAX: usize = 2;

pub const AMMO_MOD_RADIUS: f64 = 11.0;
pub const AMMO_MOD_INTERVAL: f64 = 14.0;
pub const AMMO_MOD_LIFETIME: f64 = 12.0;
pub const AMMO_MOD_MAX: usize = 1;

/// Pickups spawn at least this far from the field edge.
pub const PICKUP_EDGE_INSET: f64 = 40.0;

// --- Chain scoring ---

pub const CHAIN_BASE_WINDOW: f64 = 2.0;
pub const CHAIN_WINDOW_PER_LEVEL: f64 = 0.5;

// --- Hazards ---

pub const SLOW_FIELD_RADIUS: f64 = 60.0;
pub const SLOW_FIELD_LIFETIME: f64 = 5.0;
pub const SLOW_FIELD_FACTOR: f64 = 0.55;

pub const RISK_ZONE_RADIUS: f64 = 110.0;
pub const RISK_ZONE_LIFETIME: f64 = 10.0;
pub const RISK_ZONE_INTERVAL: f64 = 18.0;
pub const RISK_MULTIPLIER: f64 = 1.5;
pub const RISK_CHAIN_EXTENSION: f64 = 1.0;
pub const RISK_DAMAGE_INTERVAL: f64 = 2.0;
pub const RISK_DAMAGE: i32 = 1;

// --- Gate ---

pub const GATE_RADIUS: f64 = 30.0;
/// The gate never opens closer than this to the player.
pub const GATE_MIN_PLAYER_DIST: f64 = 240.0;

// --- Waves ---

pub const WAVE_COUNTDOWN: f64 = 2.5;
pub const WAVE_BASE_ENEMIES: u32 = 3;
pub const WAVE_ENEMIES_PER_WAVE: u32 = 2;
pub const WAVE_MAX_ENEMIES: u32 = 16;
/// Every Nth wave is a boss wave.
pub const BOSS_WAVE_INTERVAL: u32 = 4;
pub const BOSS_SUPPORT_COUNT: u32 = 2;

// --- Objectives ---

pub const OBJECTIVE_FIRST_DELAY: f64 = 5.0;
pub const OBJECTIVE_REARM: f64 = 6.0;

pub const SURVIVE_TARGET_SECS: f64 = 12.0;
pub const SURVIVE_TIMER: f64 = 15.0;
pub const SURVIVE_REWARD: u64 = 120;

pub const COLLECT_TARGET: u32 = 8;
pub const COLLECT_TIMER: f64 = 25.0;
pub const COLLECT_REWARD: u64 = 150;

pub const SLAY_TARGET: u32 = 6;
pub const SLAY_TIMER: f64 = 30.0;
pub const SLAY_REWARD: u64 = 200;

// --- Effects (cosmetic) ---

pub const COLOR_PLAYER: u32 = 0x4FD1FF;
pub const COLOR_GEM: u32 = 0x7CFF8A;
pub const COLOR_DAMAGE: u32 = 0xFF4D4D;
pub const COLOR_KILL: u32 = 0xFFB347;
pub const COLOR_SHIELD: u32 = 0x9F7BFF;
pub const COLOR_FUEL: u32 = 0xFFE066;
pub const COLOR_GATE: u32 = 0xFFFFFF;
pub const COLOR_RISK: u32 = 0xFF3FA4;
