//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Session mode (top-level state). Only `Playing` advances the simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    Paused,
    Shop,
    GameOver,
    Win,
}

impl GamePhase {
    /// Gameover and win stay put until restart.
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Win)
    }
}

/// Enemy species tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    /// Direct pursuit.
    Chaser,
    /// Weaving orbit at a preferred radius.
    Skirmisher,
    /// Approach, wind up, dash.
    Charger,
    /// Wide orbit, drops slow fields.
    Sapper,
    /// Chaser that splits into two splitlets on death.
    Splitter,
    /// Fast, fragile offspring of a splitter.
    Splitlet,
    /// Slow pursuit, spawns reinforcements and fires fans.
    Boss,
}

impl Species {
    /// Species that the wave spawner picks from at random.
    pub const STANDARD: [Species; 5] = [
        Species::Chaser,
        Species::Skirmisher,
        Species::Charger,
        Species::Sapper,
        Species::Splitter,
    ];
}

/// Behavior mode. Only chargers leave `Normal`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyMode {
    #[default]
    Normal,
    /// Braking, telegraphing an imminent dash.
    Windup,
    /// High-speed lunge along a captured direction.
    Dash,
}

/// Who fired a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileOwner {
    Player,
    Enemy,
    Drone,
}

impl ProjectileOwner {
    /// Friendly projectiles damage enemies; hostile ones damage the player.
    pub fn is_friendly(self) -> bool {
        matches!(self, ProjectileOwner::Player | ProjectileOwner::Drone)
    }
}

/// Active ammo mode. Exactly one is active; `Tri` is the base mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmmoMode {
    #[default]
    Tri,
    Five,
    Pierce,
    Homing,
    Ricochet,
}

impl AmmoMode {
    /// Modes granted by ammo-mod pickups.
    pub const ALTERNATES: [AmmoMode; 4] = [
        AmmoMode::Five,
        AmmoMode::Pierce,
        AmmoMode::Homing,
        AmmoMode::Ricochet,
    ];
}

/// Pickup kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    /// Resource gem counted toward the goal.
    Gem,
    /// Heals one point, or grants a speed boost at full health.
    FuelPod,
    /// Switches the active ammo mode.
    AmmoMod(AmmoMode),
}

/// Area hazards. Applied while the player overlaps them; never collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HazardKind {
    /// Dropped by sappers; slows the player.
    SlowField,
    /// Score multiplier plus periodic damage.
    RiskZone,
}

/// Objective types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectiveKind {
    /// Survive N seconds without taking damage.
    Survive,
    /// Collect N gems.
    Collect,
    /// Defeat N enemies.
    Slay,
}

/// Purchasable upgrade categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeKind {
    /// Player top speed.
    Speed,
    /// Shield burst cooldown reduction.
    Shield,
    /// Chain window extension.
    Chain,
}

/// How a session is being driven. The two are mutually exclusive per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriveMode {
    /// Wall-clock deltas, capped and accumulated.
    RealTime,
    /// Exact durations rounded to whole steps.
    Deterministic,
}

/// Tone cues for the audio collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToneCue {
    Fire,
    Overheat,
    Dash,
    Shield,
    Collect,
    Hurt,
    Kill,
    PowerUp,
    WaveStart,
    BossWave,
    ObjectiveStart,
    ObjectiveComplete,
    ObjectiveFailed,
    GateOpen,
    Purchase,
    Win,
    GameOver,
}
